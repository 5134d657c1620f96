//! Single-value Actor
//!
//! An Actor owns one `Mutable<T>` and the task that mutates it. State changes
//! only inside the processor; everything else reads through signals.

use std::future::Future;
use std::sync::Arc;
use zoon::futures_signals::signal::ReadOnlyMutable;
use zoon::{Mutable, Signal, Task, TaskHandle};

/// Reactive state container driven by relay streams.
///
/// The processor task lives as long as any clone of the Actor. Dropping the
/// last clone aborts the task, which is how timers and event loops owned by a
/// view are cancelled when that view is removed.
///
/// ```rust
/// let (menu_button_pressed_relay, mut menu_button_pressed_stream) = relay();
///
/// let menu_actor = Actor::new(MenuState::default(), async move |state| {
///     while menu_button_pressed_stream.next().await.is_some() {
///         state.update_mut(|menu| *menu = menu.apply(MenuEvent::ButtonPressed));
///     }
/// });
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    state: Mutable<T>,
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Mutable::new(initial_state);
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));
        Self { state, task_handle }
    }

    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.state.signal_cloned()
    }

    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + use<T, U, F>
    where
        U: PartialEq + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        self.state.signal_ref(f)
    }

    /// Read-only view for consumers that outlive a single signal subscription.
    pub fn read_only(&self) -> ReadOnlyMutable<T> {
        self.state.read_only()
    }
}

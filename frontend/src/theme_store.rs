//! Theme Store - the single owner of the light/dark setting

use crate::dataflow::{Actor, Relay, relay};
use futures::StreamExt;
use portfolio_ui::ThemeHandle;
use shared::Theme;

/// Holds the page theme. Renderers receive a [`ThemeHandle`] from here and
/// switch their colors and assets when the theme flips.
#[derive(Clone)]
pub struct ThemeStore {
    pub theme_actor: Actor<Theme>,

    /// Theme icon in the hero was clicked
    pub theme_toggle_clicked_relay: Relay,
}

impl ThemeStore {
    pub fn new(initial_theme: Theme) -> Self {
        let (theme_toggle_clicked_relay, mut theme_toggle_clicked_stream) = relay();

        let theme_actor = Actor::new(initial_theme, async move |state| {
            while theme_toggle_clicked_stream.next().await.is_some() {
                let new_theme = state.get().toggled();
                state.set_neq(new_theme);
                zoon::println!("🎨 THEME_STORE: switched to {new_theme}");
            }
        });

        Self {
            theme_actor,
            theme_toggle_clicked_relay,
        }
    }

    pub fn handle(&self) -> ThemeHandle {
        ThemeHandle::new(self.theme_actor.read_only())
    }

    pub fn toggle_theme(&self) {
        self.theme_toggle_clicked_relay.send(());
    }
}

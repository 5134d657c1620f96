//! Rotating job title shown under the hero heading

use crate::dataflow::Actor;
use shared::{WORD_ROTATION_INTERVAL_MS, WordCycle};
use zoon::*;

/// Advances through the titles on a fixed interval while alive.
///
/// The timer loop belongs to the Actor task, so dropping the rotator (when the
/// hero is removed) stops the rotation.
#[derive(Clone)]
pub struct WordRotator {
    pub word_index_actor: Actor<usize>,
    cycle: WordCycle,
}

impl WordRotator {
    pub fn new(cycle: WordCycle) -> Self {
        let word_index_actor = Actor::new(cycle.index(), {
            let mut cycle = cycle.clone();
            async move |state| {
                loop {
                    Timer::sleep(WORD_ROTATION_INTERVAL_MS).await;
                    state.set(cycle.advance());
                }
            }
        });

        Self {
            word_index_actor,
            cycle,
        }
    }

    pub fn current_word_signal(&self) -> impl Signal<Item = String> + use<> {
        let cycle = self.cycle.clone();
        self.word_index_actor
            .signal()
            .map(move |index| cycle.word_at(index).to_string())
    }
}

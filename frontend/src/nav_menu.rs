//! Mobile navigation panel open/closed state

use crate::dataflow::{Actor, Relay, relay};
use futures::{StreamExt, select};
use shared::{MenuEvent, MenuState};
use zoon::Signal;
use zoon::SignalExt;

#[derive(Clone)]
pub struct NavMenu {
    pub menu_actor: Actor<MenuState>,

    /// Hamburger button was pressed
    pub menu_button_pressed_relay: Relay,

    /// Any navigation link was followed
    pub nav_link_clicked_relay: Relay,
}

impl NavMenu {
    pub fn new() -> Self {
        let (menu_button_pressed_relay, menu_button_pressed_stream) = relay();
        let (nav_link_clicked_relay, nav_link_clicked_stream) = relay();

        let menu_actor = Actor::new(MenuState::default(), async move |state| {
            let mut button_stream = menu_button_pressed_stream.fuse();
            let mut link_stream = nav_link_clicked_stream.fuse();

            loop {
                let event = select! {
                    pressed = button_stream.next() => pressed.map(|()| MenuEvent::ButtonPressed),
                    clicked = link_stream.next() => clicked.map(|()| MenuEvent::LinkActivated),
                    complete => break,
                };
                if let Some(event) = event {
                    state.update_mut(|menu| *menu = menu.apply(event));
                }
            }
        });

        Self {
            menu_actor,
            menu_button_pressed_relay,
            nav_link_clicked_relay,
        }
    }

    pub fn is_open_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.menu_actor.signal_ref(|menu| menu.is_open()).dedupe()
    }

    pub fn press_menu_button(&self) {
        self.menu_button_pressed_relay.send(());
    }

    pub fn link_clicked(&self) {
        self.nav_link_clicked_relay.send(());
    }
}

/// What the user did to the mobile navigation panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    ButtonPressed,
    LinkActivated,
}

/// Open/closed flag of the mobile navigation panel. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn apply(self, event: MenuEvent) -> Self {
        let open = match event {
            MenuEvent::ButtonPressed => !self.open,
            MenuEvent::LinkActivated => false,
        };
        Self { open }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_twice_closes_panel() {
        let menu = MenuState::default()
            .apply(MenuEvent::ButtonPressed)
            .apply(MenuEvent::ButtonPressed);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_link_closes_open_panel() {
        let menu = MenuState::default().apply(MenuEvent::ButtonPressed);
        assert!(menu.is_open());
        assert!(!menu.apply(MenuEvent::LinkActivated).is_open());
    }

    #[test]
    fn test_link_keeps_closed_panel_closed() {
        let menu = MenuState::default().apply(MenuEvent::LinkActivated);
        assert!(!menu.is_open());
    }
}

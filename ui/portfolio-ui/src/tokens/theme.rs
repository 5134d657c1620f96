// Theme access for components

use shared::Theme;
use zoon::futures_signals::signal::ReadOnlyMutable;
use zoon::*;

/// Read-only view of the active theme handed to every themed component.
///
/// The owning store keeps the only writable reference; components can observe
/// the theme but never change it.
#[derive(Clone)]
pub struct ThemeHandle {
    theme: ReadOnlyMutable<Theme>,
}

impl ThemeHandle {
    pub fn new(theme: ReadOnlyMutable<Theme>) -> Self {
        Self { theme }
    }

    pub fn signal(&self) -> impl Signal<Item = Theme> + use<> {
        self.theme.signal()
    }

    /// Resolves a color token against the active theme.
    pub fn color(&self, token: fn(Theme) -> &'static str) -> impl Signal<Item = &'static str> + use<> {
        self.theme.signal().map(token)
    }
}

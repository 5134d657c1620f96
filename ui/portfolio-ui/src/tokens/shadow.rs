// Shadow tokens

pub const SHADOW_COLOR_BLACK_LIGHT: &str = "rgba(0, 0, 0, 0.08)";
pub const SHADOW_COLOR_BLACK_MEDIUM: &str = "rgba(0, 0, 0, 0.15)";
pub const SHADOW_COLOR_BLACK_STRONG: &str = "rgba(0, 0, 0, 0.4)";

pub fn elevation_color(theme: shared::Theme) -> &'static str {
    match theme {
        shared::Theme::Light => SHADOW_COLOR_BLACK_MEDIUM,
        shared::Theme::Dark => SHADOW_COLOR_BLACK_STRONG,
    }
}

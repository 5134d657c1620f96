// Color tokens
// Each token maps a theme to a CSS color; resolve through `ThemeHandle::color`.

use shared::Theme;

pub fn page_background(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "oklch(98% 0.005 255)",
        Theme::Dark => "oklch(16% 0.01 255)",
    }
}

pub fn surface(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "oklch(100% 0 0)",
        Theme::Dark => "oklch(22% 0.015 255)",
    }
}

pub fn header_background(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "oklch(98% 0.005 255 / 0.92)",
        Theme::Dark => "oklch(16% 0.01 255 / 0.92)",
    }
}

pub fn text_primary(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "oklch(22% 0.02 255)",
        Theme::Dark => "oklch(95% 0.01 255)",
    }
}

pub fn text_muted(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "oklch(45% 0.03 255)",
        Theme::Dark => "oklch(75% 0.03 255)",
    }
}

pub fn accent(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "oklch(55% 0.16 250)",
        Theme::Dark => "oklch(72% 0.14 250)",
    }
}

pub fn accent_hover(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "oklch(45% 0.16 250)",
        Theme::Dark => "oklch(80% 0.14 250)",
    }
}

pub fn on_accent(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "oklch(99% 0 0)",
        Theme::Dark => "oklch(16% 0.01 255)",
    }
}

pub fn border(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "oklch(90% 0.02 255)",
        Theme::Dark => "oklch(32% 0.02 255)",
    }
}

pub fn transparent() -> &'static str {
    "transparent"
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKENS: [fn(Theme) -> &'static str; 9] = [
        page_background,
        surface,
        header_background,
        text_primary,
        text_muted,
        accent,
        accent_hover,
        on_accent,
        border,
    ];

    #[test]
    fn test_every_token_differs_between_themes() {
        for token in TOKENS {
            assert_ne!(token(Theme::Light), token(Theme::Dark));
        }
    }

    #[test]
    fn test_text_contrasts_with_background() {
        for theme in Theme::ALL {
            assert_ne!(text_primary(theme), page_background(theme));
            assert_ne!(on_accent(theme), accent(theme));
        }
    }
}

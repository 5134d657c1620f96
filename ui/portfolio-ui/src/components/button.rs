// Button Component
// Theme-aware button with hover colors, optional themed icon content

use crate::components::themed_image::themed_image;
use crate::tokens::*;
use shared::{Theme, ThemedAsset};
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    /// Filled accent background
    Primary,
    /// Accent border, transparent background
    Outline,
    /// No border or background until hovered
    Ghost,
}

struct ButtonIcon {
    asset: ThemedAsset,
    description: String,
}

pub struct ButtonBuilder {
    theme: ThemeHandle,
    label: Option<String>,
    icon: Option<ButtonIcon>,
    variant: ButtonVariant,
    aria_label: Option<String>,
    on_press: Option<Box<dyn Fn()>>,
}

impl ButtonBuilder {
    pub fn new(theme: &ThemeHandle) -> Self {
        Self {
            theme: theme.clone(),
            label: None,
            icon: None,
            variant: ButtonVariant::Primary,
            aria_label: None,
            on_press: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Replaces the text label with an image that follows the theme.
    pub fn icon(mut self, asset: &ThemedAsset, description: impl Into<String>) -> Self {
        self.icon = Some(ButtonIcon {
            asset: asset.clone(),
            description: description.into(),
        });
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let (hovered, hovered_signal) = Mutable::new_and_signal(false);
        let hovered_broadcast = hovered_signal.broadcast();
        let variant = self.variant;
        let is_icon_only = self.icon.is_some();

        let content = match (self.icon, self.label) {
            (Some(icon), _) => themed_image(&icon.asset, icon.description, &self.theme).unify(),
            (None, Some(label)) => Text::new(label).unify(),
            (None, None) => Text::new("").unify(),
        };
        let (padding_x, padding_y) = if is_icon_only {
            (SPACING_8, SPACING_8)
        } else {
            (SPACING_24, SPACING_12)
        };
        let aria_label = self.aria_label;
        let on_press = self.on_press;

        Button::new()
            .s(Padding::new().x(padding_x).y(padding_y))
            .s(RoundedCorners::all(CORNER_RADIUS_20))
            .s(Font::new().size(FONT_SIZE_16).weight(FontWeight::SemiBold))
            .s(Transitions::new([
                Transition::property("background-color").duration(200),
                Transition::property("color").duration(200),
            ]))
            .s(Background::new().color_signal(map_ref! {
                let theme = self.theme.signal(),
                let hovered = hovered_broadcast.signal() =>
                background_color(variant, *theme, *hovered)
            }))
            .s(Font::new().color_signal(map_ref! {
                let theme = self.theme.signal(),
                let hovered = hovered_broadcast.signal() =>
                text_color(variant, *theme, *hovered)
            }))
            .s(Borders::all_signal(self.theme.signal().map(move |theme| {
                let color = match variant {
                    ButtonVariant::Outline => accent(theme),
                    ButtonVariant::Primary | ButtonVariant::Ghost => transparent(),
                };
                Border::new().width(2).color(color)
            })))
            .update_raw_el(move |raw_el| match &aria_label {
                Some(label) => raw_el.attr("aria-label", label),
                None => raw_el,
            })
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .label(content)
            .on_press(move || {
                if let Some(handler) = &on_press {
                    handler();
                }
            })
    }
}

/// Anchor styled like a [`ButtonBuilder`] button, for calls to action that
/// navigate or download instead of running a handler.
pub struct LinkButtonBuilder {
    theme: ThemeHandle,
    label: String,
    href: String,
    variant: ButtonVariant,
    download: bool,
}

impl LinkButtonBuilder {
    pub fn new(theme: &ThemeHandle, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            theme: theme.clone(),
            label: label.into(),
            href: href.into(),
            variant: ButtonVariant::Primary,
            download: false,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Saves the target instead of opening it.
    pub fn download(mut self) -> Self {
        self.download = true;
        self
    }

    pub fn build(self) -> impl Element {
        let (hovered, hovered_signal) = Mutable::new_and_signal(false);
        let hovered_broadcast = hovered_signal.broadcast();
        let variant = self.variant;
        let download = self.download;

        Link::new()
            .to(self.href)
            .s(Padding::new().x(SPACING_24).y(SPACING_12))
            .s(RoundedCorners::all(CORNER_RADIUS_20))
            .s(Font::new().size(FONT_SIZE_16).weight(FontWeight::SemiBold))
            .s(Transitions::new([
                Transition::property("background-color").duration(200),
                Transition::property("color").duration(200),
            ]))
            .s(Background::new().color_signal(map_ref! {
                let theme = self.theme.signal(),
                let hovered = hovered_broadcast.signal() =>
                background_color(variant, *theme, *hovered)
            }))
            .s(Font::new().color_signal(map_ref! {
                let theme = self.theme.signal(),
                let hovered = hovered_broadcast.signal() =>
                text_color(variant, *theme, *hovered)
            }))
            .update_raw_el(move |raw_el| {
                if download {
                    raw_el.attr("download", "")
                } else {
                    raw_el
                }
            })
            .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
            .label(self.label)
    }
}

pub fn link_button(
    theme: &ThemeHandle,
    label: impl Into<String>,
    href: impl Into<String>,
) -> LinkButtonBuilder {
    LinkButtonBuilder::new(theme, label, href)
}

fn background_color(variant: ButtonVariant, theme: Theme, hovered: bool) -> &'static str {
    match (variant, hovered) {
        (ButtonVariant::Primary, false) => accent(theme),
        (ButtonVariant::Primary, true) => accent_hover(theme),
        (ButtonVariant::Outline, true) | (ButtonVariant::Ghost, true) => surface(theme),
        (ButtonVariant::Outline, false) | (ButtonVariant::Ghost, false) => transparent(),
    }
}

fn text_color(variant: ButtonVariant, theme: Theme, hovered: bool) -> &'static str {
    match (variant, hovered) {
        (ButtonVariant::Primary, _) => on_accent(theme),
        (ButtonVariant::Outline, _) => accent(theme),
        (ButtonVariant::Ghost, false) => text_primary(theme),
        (ButtonVariant::Ghost, true) => accent(theme),
    }
}

pub fn button(theme: &ThemeHandle) -> ButtonBuilder {
    ButtonBuilder::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_button_darkens_on_hover() {
        for theme in Theme::ALL {
            assert_eq!(background_color(ButtonVariant::Primary, theme, false), accent(theme));
            assert_eq!(background_color(ButtonVariant::Primary, theme, true), accent_hover(theme));
        }
    }

    #[test]
    fn test_link_button_defaults_to_primary() {
        let theme = ThemeHandle::new(Mutable::new(Theme::Light).read_only());
        let builder = link_button(&theme, "Download Resume", "/cv.pdf");
        assert_eq!(builder.variant, ButtonVariant::Primary);
        assert!(!builder.download().download);
    }

    #[test]
    fn test_primary_text_stays_on_accent_when_hovered() {
        for theme in Theme::ALL {
            assert_eq!(text_color(ButtonVariant::Primary, theme, true), on_accent(theme));
        }
    }

    #[test]
    fn test_ghost_button_is_transparent_at_rest() {
        assert_eq!(background_color(ButtonVariant::Ghost, Theme::Dark, false), "transparent");
        assert_eq!(text_color(ButtonVariant::Ghost, Theme::Dark, true), accent(Theme::Dark));
    }
}

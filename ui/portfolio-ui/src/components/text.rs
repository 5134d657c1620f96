// Text Components
// Headings and body copy colored from the active theme

use crate::tokens::*;
use zoon::*;

/// Centered heading opening each page section.
pub fn section_title(text: impl Into<String>, theme: &ThemeHandle) -> impl Element {
    El::new()
        .s(Align::new().center_x())
        .s(Padding::new().bottom(SPACING_32))
        .s(Font::new()
            .size(FONT_SIZE_36)
            .weight(FontWeight::Bold)
            .family([FontFamily::new(FONT_FAMILY_DISPLAY), FontFamily::SansSerif]))
        .s(Font::new().color_signal(theme.color(text_primary)))
        .child(Text::new(text.into()))
}

pub fn paragraph(text: impl Into<String>, theme: &ThemeHandle) -> impl Element {
    Paragraph::new()
        .s(Font::new().size(FONT_SIZE_18).line_height(LINE_HEIGHT_BODY))
        .s(Font::new().color_signal(theme.color(text_muted)))
        .content(text.into())
}

pub fn small(text: impl Into<String>, theme: &ThemeHandle) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_14))
        .s(Font::new().color_signal(theme.color(text_muted)))
        .child(Text::new(text.into()))
}

/// Rounded label used for skills and project tags.
pub fn chip(text: impl Into<String>, theme: &ThemeHandle) -> impl Element {
    El::new()
        .s(Padding::new().x(SPACING_12).y(SPACING_4))
        .s(RoundedCorners::all(CORNER_RADIUS_20))
        .s(Font::new().size(FONT_SIZE_14).weight(FontWeight::Medium))
        .s(Font::new().color_signal(theme.color(accent)))
        .s(Borders::all_signal(
            theme.signal().map(|theme| Border::new().width(1).color(border(theme))),
        ))
        .child(Text::new(text.into()))
}

use super::social_icons;
use portfolio_ui::*;
use shared::SiteContent;
use zoon::*;

/// Copyright line and social links. Not a navigation target.
pub fn footer(content: &SiteContent, theme: &ThemeHandle) -> impl Element {
    let year = js_sys::Date::new_0().get_full_year();

    Column::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_24).y(SPACING_32))
        .s(Gap::new().y(SPACING_16))
        .s(Background::new().color_signal(theme.color(surface)))
        .s(Borders::new().top_signal(
            theme.signal().map(|theme| Border::new().width(1).color(border(theme))),
        ))
        .item(
            El::new()
                .s(Align::new().center_x())
                .child(social_icons(&content.social, theme, SPACING_24)),
        )
        .item(
            El::new()
                .s(Align::new().center_x())
                .child(small(copyright_line(&content.owner.name, year), theme)),
        )
}

fn copyright_line(owner_name: &str, year: u32) -> String {
    format!("© {year} {owner_name}. All rights reserved.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_names_owner_and_year() {
        assert_eq!(
            copyright_line("Mr Kups", 2025),
            "© 2025 Mr Kups. All rights reserved."
        );
    }
}

//! Page sections, top to bottom

pub mod about_me;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

pub use about_me::about_me;
pub use contact::contact;
pub use footer::footer;
pub use hero::hero;
pub use projects::projects;
pub use skills::skills;

use portfolio_ui::*;
use shared::SocialLink;
use zoon::*;

/// Anchor target for a navigation link, centered and width-limited.
///
/// `scroll-margin-top` keeps the section heading clear of the sticky header
/// when the browser jumps to `#section_id`.
pub fn section_frame(section_id: &str, content: impl Element) -> impl Element {
    let section_id = section_id.to_string();
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_24).y(SPACING_64))
        .update_raw_el(move |raw_el| {
            raw_el
                .attr("id", &section_id)
                .style("scroll-margin-top", &format!("{HEADER_HEIGHT}px"))
        })
        .child(
            El::new()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Align::new().center_x())
                .child(content),
        )
}

/// Social profile icons, each opening in a new tab.
pub fn social_icons(links: &[SocialLink], theme: &ThemeHandle, icon_size: u32) -> impl Element {
    Row::new().s(Gap::new().x(SPACING_16)).items(links.iter().map(|link| {
        Link::new()
            .to(link.url.as_str())
            .new_tab(NewTab::new())
            .s(Width::exact(icon_size))
            .s(Height::exact(icon_size))
            .update_raw_el({
                let name = link.name.clone();
                move |raw_el| raw_el.attr("aria-label", &name)
            })
            .label(themed_image(&link.icon, link.name.as_str(), theme))
    }))
}

use super::section_frame;
use crate::dataflow::Atom;
use portfolio_ui::*;
use shared::Owner;
use zoon::*;

pub fn about_me(owner: &Owner, theme: &ThemeHandle, viewport_width: &Atom<u32>) -> impl Element {
    section_frame(
        "about",
        Column::new()
            .s(Width::fill())
            .item(section_title("About Me", theme))
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Gap::both(SPACING_48))
                    .multiline()
                    .item(
                        Image::new()
                            .s(Width::exact_signal(
                                viewport_width
                                    .signal()
                                    .map(|width| if is_compact_width(width) { 280 } else { 420 }),
                            ))
                            .s(RoundedCorners::all(CORNER_RADIUS_20))
                            .url(owner.about_image.as_str())
                            .description("Moon over the night sky"),
                    )
                    .item(
                        Column::new()
                            .s(Width::growable())
                            .s(Align::new().center_y())
                            .s(Gap::new().y(SPACING_16))
                            .items(owner.bio.iter().map(|text| paragraph(text.as_str(), theme)))
                            .item(small(format!("Based in {}", owner.location), theme)),
                    ),
            ),
    )
}

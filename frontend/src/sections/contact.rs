use super::{section_frame, social_icons};
use portfolio_ui::*;
use shared::{Owner, SocialLink};
use zoon::*;

pub fn contact(owner: &Owner, social: &[SocialLink], theme: &ThemeHandle) -> impl Element {
    section_frame(
        "contact",
        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_24))
            .item(section_title("Contact", theme))
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .child(paragraph("Have a project in mind or just want to say hi? My inbox is open.", theme)),
            )
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .child(link_button(theme, owner.email.as_str(), format!("mailto:{}", owner.email)).build()),
            )
            .item(
                El::new()
                    .s(Align::new().center_x())
                    .child(social_icons(social, theme, SPACING_32)),
            ),
    )
}

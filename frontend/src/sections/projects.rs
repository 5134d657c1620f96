use super::section_frame;
use portfolio_ui::*;
use shared::Project;
use zoon::*;

/// "Works" in the navigation.
pub fn projects(projects: &[Project], theme: &ThemeHandle) -> impl Element {
    section_frame(
        "projects",
        Column::new()
            .s(Width::fill())
            .item(section_title("Works", theme))
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Gap::both(SPACING_24))
                    .multiline()
                    .items(projects.iter().map(|project| project_card(project, theme))),
            ),
    )
}

fn project_card(project: &Project, theme: &ThemeHandle) -> impl Element {
    Column::new()
        .s(Width::growable().min(280).max(360))
        .s(Padding::all(SPACING_24))
        .s(Gap::new().y(SPACING_12))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(theme.color(surface)))
        .s(Shadows::new([Shadow::new().y(1).blur(4).color(SHADOW_COLOR_BLACK_LIGHT)]))
        .item(project.image.as_deref().map(|image| {
            Image::new()
                .s(Width::fill())
                .s(RoundedCorners::all(CORNER_RADIUS_8))
                .url(image)
                .description(project.title.as_str())
        }))
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_18).weight(FontWeight::SemiBold))
                .s(Font::new().color_signal(theme.color(text_primary)))
                .child(Text::new(project.title.as_str())),
        )
        .item(paragraph(project.description.as_str(), theme))
        .item(
            Row::new()
                .s(Gap::both(SPACING_8))
                .multiline()
                .items(project.tags.iter().map(|tag| chip(tag.as_str(), theme))),
        )
        .item(project.url.as_deref().map(|url| {
            Link::new()
                .to(url)
                .new_tab(NewTab::new())
                .s(Font::new().size(FONT_SIZE_14).weight(FontWeight::SemiBold))
                .s(Font::new().color_signal(theme.color(accent)))
                .label("View project →")
        }))
}

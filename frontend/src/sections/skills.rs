use super::section_frame;
use portfolio_ui::*;
use shared::SkillGroup;
use zoon::*;

pub fn skills(groups: &[SkillGroup], theme: &ThemeHandle) -> impl Element {
    section_frame(
        "skills",
        Column::new()
            .s(Width::fill())
            .item(section_title("Skills", theme))
            .item(
                Row::new()
                    .s(Width::fill())
                    .s(Gap::both(SPACING_24))
                    .multiline()
                    .items(groups.iter().map(|group| skill_group(group, theme))),
            ),
    )
}

fn skill_group(group: &SkillGroup, theme: &ThemeHandle) -> impl Element {
    Column::new()
        .s(Width::growable().min(240))
        .s(Padding::all(SPACING_24))
        .s(Gap::new().y(SPACING_16))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(theme.color(surface)))
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_18).weight(FontWeight::SemiBold))
                .s(Font::new().color_signal(theme.color(text_primary)))
                .child(Text::new(group.title.as_str())),
        )
        .item(
            Row::new()
                .s(Gap::both(SPACING_8))
                .multiline()
                .items(group.skills.iter().map(|skill| chip(skill.as_str(), theme))),
        )
}

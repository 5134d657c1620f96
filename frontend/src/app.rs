//! PortfolioApp - owns the app-level stores and composes the page

use crate::dataflow::Atom;
use crate::nav_menu::NavMenu;
use crate::sections::{about_me, contact, footer, hero, projects, skills};
use crate::theme_store::ThemeStore;
use portfolio_ui::*;
use shared::{ContentError, SiteContent, Theme, WordCycle};
use zoon::*;

pub struct PortfolioApp {
    /// Embedded site content, or why it could not be used
    pub content: Result<(SiteContent, WordCycle), ContentError>,

    pub theme_store: ThemeStore,

    pub nav_menu: NavMenu,

    /// Window width in CSS pixels, drives the compact layout
    pub viewport_width: Atom<u32>,
}

impl PortfolioApp {
    pub fn new() -> Self {
        let content = SiteContent::embedded().and_then(|content| {
            let word_cycle = WordCycle::new(content.rotating_titles.clone())?;
            Ok((content, word_cycle))
        });
        if let Err(error) = &content {
            zoon::eprintln!("🚨 APP: {error}");
        }

        Self {
            content,
            theme_store: ThemeStore::new(Theme::default()),
            nav_menu: NavMenu::new(),
            viewport_width: Atom::new(0),
        }
    }

    /// Root UI element
    pub fn root(&self) -> impl Element {
        let theme = self.theme_store.handle();

        Column::new()
            .s(Width::fill())
            .s(Height::screen())
            .s(Background::new().color_signal(theme.color(page_background)))
            .s(Font::new().color_signal(theme.color(text_primary)))
            .s(Font::new().family([
                FontFamily::new(FONT_FAMILY_SANS),
                FontFamily::new("system-ui"),
                FontFamily::new("Segoe UI"),
                FontFamily::new("Arial"),
                FontFamily::SansSerif,
            ]))
            .s(Transitions::new([
                Transition::property("background-color").duration(300),
                Transition::property("color").duration(300),
            ]))
            .on_viewport_size_change({
                let viewport_width = self.viewport_width.clone();
                move |width, _height| viewport_width.set_neq(width)
            })
            .item(match &self.content {
                Ok((content, word_cycle)) => self.page(content, word_cycle.clone(), &theme).unify(),
                Err(error) => content_error_page(error, &theme).unify(),
            })
    }

    fn page(&self, content: &SiteContent, word_cycle: WordCycle, theme: &ThemeHandle) -> impl Element {
        Column::new()
            .s(Width::fill())
            .item(hero(
                content,
                word_cycle,
                &self.theme_store,
                &self.nav_menu,
                &self.viewport_width,
            ))
            .item(about_me(&content.owner, theme, &self.viewport_width))
            .item(projects(&content.projects, theme))
            .item(skills(&content.skill_groups, theme))
            .item(contact(&content.owner, &content.social, theme))
            .item(footer(content, theme))
    }
}

fn content_error_page(error: &ContentError, theme: &ThemeHandle) -> impl Element {
    Column::new()
        .s(Align::center())
        .s(Padding::all(SPACING_48))
        .s(Gap::new().y(SPACING_16))
        .item(section_title("This page could not be loaded", theme))
        .item(paragraph(error.to_string(), theme))
}

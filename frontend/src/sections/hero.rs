//! Hero section
//!
//! Owns the page-level behaviors: the sticky header that hides while scrolling
//! down, the navigation with its active link, the compact-width menu, the
//! theme toggle, the rotating title and the back-to-top button.
//!
//! The viewport tracker and the word rotator live exactly as long as this
//! element. Browser listeners are attached after insertion, once every section
//! is in the document, and released in `after_remove`.

use crate::dataflow::Atom;
use crate::nav_menu::NavMenu;
use crate::theme_store::ThemeStore;
use crate::viewport_tracker::{
    ActiveSectionView, ViewportSubscriptions, ViewportTracker, scroll_to_top,
};
use crate::word_rotator::WordRotator;
use portfolio_ui::*;
use super::social_icons;
use shared::{NavLink, SiteContent, WordCycle};
use std::cell::RefCell;
use std::rc::Rc;
use zoon::*;

const HEADER_SLIDE_MS: u32 = 300;

pub fn hero(
    content: &SiteContent,
    word_cycle: WordCycle,
    theme_store: &ThemeStore,
    nav_menu: &NavMenu,
    viewport_width: &Atom<u32>,
) -> impl Element {
    let theme = theme_store.handle();
    let tracker = ViewportTracker::new(content.linked_sections());
    let rotator = WordRotator::new(word_cycle);
    let subscriptions: Rc<RefCell<Option<ViewportSubscriptions>>> = Rc::default();

    Column::new()
        .s(Width::fill())
        .s(Padding::new().top(HEADER_HEIGHT))
        .update_raw_el(|raw_el| raw_el.attr("id", "home"))
        .item(header(content, &theme, nav_menu, &tracker, viewport_width))
        .item(introduction(content, &theme, theme_store, &rotator, viewport_width))
        .item(back_to_top_button(content, &theme, &tracker))
        .after_insert({
            let tracker = tracker.clone();
            let subscriptions = subscriptions.clone();
            move |_| {
                *subscriptions.borrow_mut() = tracker.attach();
            }
        })
        .after_remove(move |_| {
            drop(subscriptions.borrow_mut().take());
            drop(tracker);
            drop(rotator);
        })
}

// ===== HEADER =====

fn header(
    content: &SiteContent,
    theme: &ThemeHandle,
    nav_menu: &NavMenu,
    tracker: &ViewportTracker,
    viewport_width: &Atom<u32>,
) -> impl Element {
    let compact = viewport_width.signal().map(is_compact_width).dedupe().broadcast();

    Column::new()
        .s(Width::fill())
        .s(Background::new().color_signal(theme.color(header_background)))
        .s(Shadows::with_signal(
            theme
                .signal()
                .map(|theme| [Shadow::new().y(2).blur(8).color(elevation_color(theme))]),
        ))
        .s(Transitions::new([
            Transition::property("top").duration(HEADER_SLIDE_MS)
        ]))
        .update_raw_el({
            let header_top_signal = tracker.header_top_signal();
            move |raw_el| {
                raw_el
                    .style("position", "fixed")
                    .style("left", "0")
                    .style("z-index", "100")
                    .style_signal("top", header_top_signal)
            }
        })
        .item(
            Row::new()
                .s(Width::fill().max(CONTENT_MAX_WIDTH))
                .s(Height::exact(HEADER_HEIGHT))
                .s(Align::new().center_x())
                .s(Padding::new().x(SPACING_24))
                .item(logo(&content.owner.logo, theme))
                .item(El::new().s(Width::fill()))
                .item_signal(compact.signal().map({
                    let links = content.nav.clone();
                    let theme = theme.clone();
                    let nav_menu = nav_menu.clone();
                    let active_section = tracker.active_section();
                    move |compact| {
                        if compact {
                            menu_button(&theme, &nav_menu).unify()
                        } else {
                            Row::new()
                                .s(Gap::new().x(SPACING_24))
                                .items(nav_links(&links, &theme, &nav_menu, &active_section))
                                .unify()
                        }
                    }
                })),
        )
        .item_signal(
            map_ref! {
                let compact = compact.signal(),
                let open = nav_menu.is_open_signal() =>
                *compact && *open
            }
            .dedupe()
            .map_true({
                let links = content.nav.clone();
                let theme = theme.clone();
                let nav_menu = nav_menu.clone();
                let active_section = tracker.active_section();
                move || {
                    Column::new()
                        .s(Width::fill())
                        .s(Padding::new().x(SPACING_24).bottom(SPACING_16))
                        .s(Gap::new().y(SPACING_16))
                        .items(nav_links(&links, &theme, &nav_menu, &active_section))
                }
            }),
        )
}

fn logo(text: &str, theme: &ThemeHandle) -> impl Element {
    Link::new()
        .to("#home")
        .s(Font::new()
            .size(FONT_SIZE_30)
            .weight(FontWeight::Bold)
            .family([FontFamily::new(FONT_FAMILY_DISPLAY), FontFamily::SansSerif]))
        .s(Font::new().color_signal(theme.color(text_primary)))
        .label(text)
}

fn nav_links(
    links: &[NavLink],
    theme: &ThemeHandle,
    nav_menu: &NavMenu,
    active_section: &ActiveSectionView,
) -> Vec<impl Element + use<>> {
    links
        .iter()
        .map(|link| {
            let is_active = active_section.is_active_signal(link.section_id.clone()).broadcast();
            let nav_menu = nav_menu.clone();
            Link::new()
                .to(link.href())
                .s(Font::new().size(FONT_SIZE_16).weight(FontWeight::Medium))
                .s(Font::new().color_signal(map_ref! {
                    let theme = theme.signal(),
                    let is_active = is_active.signal() =>
                    if *is_active { accent(*theme) } else { text_primary(*theme) }
                }))
                .s(Borders::new().bottom_signal(is_active.signal().map(|is_active| {
                    Border::new().width(2).color(if is_active { "currentColor" } else { transparent() })
                })))
                .update_raw_el(move |raw_el| {
                    raw_el.event_handler(move |_: events::Click| nav_menu.link_clicked())
                })
                .label(link.label.clone())
        })
        .collect()
}

fn menu_button(theme: &ThemeHandle, nav_menu: &NavMenu) -> impl Element {
    let nav_menu = nav_menu.clone();
    button(theme)
        .label("☰")
        .variant(ButtonVariant::Ghost)
        .aria_label("Toggle navigation menu")
        .on_press(move || nav_menu.press_menu_button())
        .build()
}

// ===== INTRODUCTION =====

fn introduction(
    content: &SiteContent,
    theme: &ThemeHandle,
    theme_store: &ThemeStore,
    rotator: &WordRotator,
    viewport_width: &Atom<u32>,
) -> impl Element {
    let owner = &content.owner;

    Row::new()
        .s(Width::fill().max(CONTENT_MAX_WIDTH))
        .s(Align::new().center_x())
        .s(Padding::new().x(SPACING_24).y(SPACING_64))
        .s(Gap::both(SPACING_48))
        .multiline()
        .item(
            Image::new()
                .s(Width::exact_signal(
                    viewport_width
                        .signal()
                        .map(|width| if is_compact_width(width) { 240 } else { 380 }),
                ))
                .s(RoundedCorners::all_max())
                .url(owner.profile_image.as_str())
                .description(owner.name.as_str()),
        )
        .item(
            Column::new()
                .s(Gap::new().y(SPACING_24))
                .s(Align::new().center_y())
                .item(theme_toggle_button(content, theme, theme_store))
                .item(heading(&owner.heading_lines, theme))
                .item(rotating_title(theme, rotator))
                .item(social_icons(&content.social, theme, SPACING_32))
                .item(paragraph(owner.tagline.as_str(), theme))
                .item(resume_link(&owner.resume, theme)),
        )
}

fn theme_toggle_button(
    content: &SiteContent,
    theme: &ThemeHandle,
    theme_store: &ThemeStore,
) -> impl Element {
    let theme_store = theme_store.clone();
    button(theme)
        .icon(&content.theme_icon, "Toggle theme")
        .variant(ButtonVariant::Ghost)
        .aria_label("Toggle theme")
        .on_press(move || theme_store.toggle_theme())
        .build()
}

fn heading(lines: &[String], theme: &ThemeHandle) -> impl Element {
    Column::new()
        .s(Font::new()
            .size(FONT_SIZE_56)
            .weight(FontWeight::ExtraBold)
            .family([FontFamily::new(FONT_FAMILY_DISPLAY), FontFamily::SansSerif]))
        .s(Font::new().color_signal(theme.color(text_primary)))
        .items(lines.iter().map(|line| Text::new(line.as_str())))
}

fn rotating_title(theme: &ThemeHandle, rotator: &WordRotator) -> impl Element {
    Row::new()
        .s(Gap::new().x(SPACING_8))
        .s(Font::new().size(FONT_SIZE_24).weight(FontWeight::SemiBold))
        .item(
            El::new()
                .s(Font::new().color_signal(theme.color(text_muted)))
                .child("I'm a"),
        )
        .item(
            El::new()
                .s(Font::new().color_signal(theme.color(accent)))
                .child(Text::with_signal(rotator.current_word_signal())),
        )
}

fn resume_link(resume: &str, theme: &ThemeHandle) -> impl Element {
    link_button(theme, "Download Resume", resume).download().build()
}

// ===== BACK TO TOP =====

fn back_to_top_button(
    content: &SiteContent,
    theme: &ThemeHandle,
    tracker: &ViewportTracker,
) -> impl Element {
    let icon = content.back_to_top_icon.clone();
    let theme = theme.clone();

    El::new()
        .update_raw_el(|raw_el| {
            raw_el
                .style("position", "fixed")
                .style("right", &format!("{SPACING_24}px"))
                .style("bottom", &format!("{SPACING_24}px"))
                .style("z-index", "100")
        })
        .child_signal(tracker.back_to_top_visible_signal().map_true(move || {
            button(&theme)
                .icon(&icon, "Back to top")
                .variant(ButtonVariant::Outline)
                .aria_label("Back to top")
                .on_press(scroll_to_top)
                .build()
        }))
}

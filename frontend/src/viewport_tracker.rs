//! Viewport Tracker - header visibility, back-to-top and active nav link
//!
//! `ViewportTracker` owns the derived [`ScrollState`]. Browser callbacks only
//! forward raw samples (scroll offsets, intersection ratios) through relays;
//! the Actor turns them into presentation flags with the pure trackers from
//! `shared::viewport`.
//!
//! DOM subscriptions are held by [`ViewportSubscriptions`] and released when
//! that guard is dropped.

use crate::dataflow::{Actor, Relay, relay};
use crate::debug_utils::debug_viewport;
use futures::{StreamExt, select};
use shared::{
    ActiveSectionTracker, SECTION_VISIBILITY_THRESHOLD, ScrollState, ScrollTracker,
    SectionVisibility, TRACKED_SECTIONS,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use zoon::futures_signals::signal::ReadOnlyMutable;
use zoon::*;

const INITIAL_SECTION: &str = "home";

#[derive(Clone)]
pub struct ViewportTracker {
    pub scroll_state_actor: Actor<ScrollState>,

    /// Window scrolled; carries the vertical offset in CSS pixels
    pub page_scrolled_relay: Relay<f64>,

    /// Observed sections crossed the visibility threshold
    pub sections_intersected_relay: Relay<Vec<SectionVisibility>>,
}

impl ViewportTracker {
    /// `linked_sections` are the section ids that have a navigation link.
    pub fn new(linked_sections: Vec<String>) -> Self {
        let (page_scrolled_relay, page_scrolled_stream) = relay::<f64>();
        let (sections_intersected_relay, sections_intersected_stream) =
            relay::<Vec<SectionVisibility>>();

        let active_sections = ActiveSectionTracker::new(linked_sections, Some(INITIAL_SECTION));
        let initial_state = ScrollState {
            active_section_id: active_sections.active().map(str::to_string),
            ..ScrollState::default()
        };

        let scroll_state_actor = Actor::new(initial_state, move |state| async move {
            let mut scroll = ScrollTracker::new();
            let mut active_sections = active_sections;
            let mut scrolled_stream = page_scrolled_stream.fuse();
            let mut intersected_stream = sections_intersected_stream.fuse();

            loop {
                select! {
                    offset = scrolled_stream.next() => {
                        if let Some(offset) = offset {
                            let signals = scroll.observe(offset);
                            debug_viewport!("📜 VIEWPORT: offset {offset} -> {signals:?}");
                            state.update_mut(|current| {
                                *current = current.clone().with_scroll(signals);
                            });
                        }
                    }
                    entries = intersected_stream.next() => {
                        if let Some(entries) = entries {
                            let active = active_sections.apply(&entries).map(str::to_string);
                            debug_viewport!("👁️ VIEWPORT: {entries:?} -> active {active:?}");
                            state.update_mut(|current| current.active_section_id = active);
                        }
                    }
                    complete => break,
                }
            }
        });

        Self {
            scroll_state_actor,
            page_scrolled_relay,
            sections_intersected_relay,
        }
    }

    /// CSS `top` of the sticky header.
    pub fn header_top_signal(&self) -> impl Signal<Item = String> + use<> {
        self.scroll_state_actor
            .signal_ref(|state| state.header_top_px())
            .dedupe()
            .map(|top| format!("{top}px"))
    }

    pub fn back_to_top_visible_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.scroll_state_actor
            .signal_ref(|state| state.back_to_top_visible)
            .dedupe()
    }

    pub fn active_section(&self) -> ActiveSectionView {
        ActiveSectionView {
            scroll_state: self.scroll_state_actor.read_only(),
        }
    }

    /// Starts listening to window scrolling and section visibility.
    ///
    /// Sections missing from the document are skipped. Returns `None` when the
    /// browser objects cannot be reached; the page then renders without
    /// scroll-driven behavior.
    pub fn attach(&self) -> Option<ViewportSubscriptions> {
        match self.try_attach() {
            Ok(subscriptions) => Some(subscriptions),
            Err(error) => {
                zoon::eprintln!("🚨 VIEWPORT: failed to attach listeners: {error:?}");
                None
            }
        }
    }

    fn try_attach(&self) -> Result<ViewportSubscriptions, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let scroll_listener = Closure::wrap(Box::new({
            let window = window.clone();
            let page_scrolled_relay = self.page_scrolled_relay.clone();
            move |_event: web_sys::Event| match window.scroll_y() {
                Ok(offset) => page_scrolled_relay.send(offset),
                Err(error) => zoon::eprintln!("🚨 VIEWPORT: cannot read scroll offset: {error:?}"),
            }
        }) as Box<dyn FnMut(web_sys::Event)>);
        window.add_event_listener_with_callback("scroll", scroll_listener.as_ref().unchecked_ref())?;

        let observer_callback = Closure::wrap(Box::new({
            let sections_intersected_relay = self.sections_intersected_relay.clone();
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                let visibility = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                    .map(|entry| SectionVisibility::new(entry.target().id(), entry.intersection_ratio()))
                    .collect::<Vec<_>>();
                sections_intersected_relay.send(visibility);
            }
        })
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(SECTION_VISIBILITY_THRESHOLD));
        let observer = web_sys::IntersectionObserver::new_with_options(
            observer_callback.as_ref().unchecked_ref(),
            &options,
        )?;

        for section_id in TRACKED_SECTIONS {
            match document.get_element_by_id(section_id) {
                Some(section) => observer.observe(&section),
                None => debug_viewport!("👁️ VIEWPORT: no '#{section_id}' element, not observed"),
            }
        }

        Ok(ViewportSubscriptions {
            window,
            scroll_listener,
            observer,
            _observer_callback: observer_callback,
        })
    }
}

/// Read side of the active section.
///
/// Views rebuilt by signals (the nav links switch between the header row and
/// the compact menu) hold this instead of the tracker, so they never extend
/// the lifetime of its Actor task.
#[derive(Clone)]
pub struct ActiveSectionView {
    scroll_state: ReadOnlyMutable<ScrollState>,
}

impl ActiveSectionView {
    pub fn is_active_signal(&self, section_id: String) -> impl Signal<Item = bool> + use<> {
        self.scroll_state
            .signal_ref(move |state| state.active_section_id.as_deref() == Some(section_id.as_str()))
            .dedupe()
    }
}

/// Live browser subscriptions of a mounted hero. Dropping it unsubscribes.
pub struct ViewportSubscriptions {
    window: web_sys::Window,
    scroll_listener: Closure<dyn FnMut(web_sys::Event)>,
    observer: web_sys::IntersectionObserver,
    _observer_callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

impl Drop for ViewportSubscriptions {
    fn drop(&mut self) {
        if let Err(error) = self
            .window
            .remove_event_listener_with_callback("scroll", self.scroll_listener.as_ref().unchecked_ref())
        {
            zoon::eprintln!("🚨 VIEWPORT: failed to remove scroll listener: {error:?}");
        }
        self.observer.disconnect();
    }
}

/// Smoothly scrolls the window back to the top of the page.
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

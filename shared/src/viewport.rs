//! Scroll and section-visibility bookkeeping for the sticky header,
//! the back-to-top button and navigation highlighting.
//!
//! Everything here is a pure function of offsets and visibility ratios so the
//! browser wiring in the frontend stays a thin adapter.

/// Sections observed for navigation highlighting, in page navigation order.
pub const TRACKED_SECTIONS: [&str; 6] = ["home", "about", "skills", "projects", "education", "contact"];

/// Back-to-top shows strictly above this vertical offset (CSS pixels).
pub const BACK_TO_TOP_THRESHOLD: f64 = 200.0;

/// Fraction of a section that must be inside the viewport for it to count as active.
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.7;

/// Browsers report `intersectionRatio` in single precision, so a crossing of
/// exactly 0.7 can arrive as 0.69999998...
const VISIBILITY_RATIO_TOLERANCE: f64 = 1e-6;

/// `top` of the sticky header while hidden.
pub const HEADER_HIDDEN_TOP_PX: i32 = -100;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollSignals {
    pub header_hidden: bool,
    pub back_to_top_visible: bool,
}

/// Remembers the previous offset so consecutive scroll events can be compared.
#[derive(Debug, Clone, Default)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives both scroll signals from a single offset sample.
    ///
    /// Equal offsets are not a downward scroll, so the header stays visible.
    pub fn observe(&mut self, offset: f64) -> ScrollSignals {
        let signals = ScrollSignals {
            header_hidden: offset > self.last_offset,
            back_to_top_visible: back_to_top_visible(offset),
        };
        self.last_offset = offset.max(0.0);
        signals
    }
}

pub fn back_to_top_visible(offset: f64) -> bool {
    offset > BACK_TO_TOP_THRESHOLD
}

/// One intersection report for a section element.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionVisibility {
    pub section_id: String,
    pub ratio: f64,
}

impl SectionVisibility {
    pub fn new(section_id: impl Into<String>, ratio: f64) -> Self {
        Self {
            section_id: section_id.into(),
            ratio,
        }
    }

    pub fn is_in_view(&self) -> bool {
        self.ratio + VISIBILITY_RATIO_TOLERANCE >= SECTION_VISIBILITY_THRESHOLD
    }
}

/// Tracks which navigation link is highlighted.
///
/// Remembers which sections are currently at or above the visibility
/// threshold, in the order they crossed into view. The most recent one is
/// active; when it leaves, the previous still-visible section takes over, and
/// with nothing in view no link is active. A section without a navigation
/// link clears the highlight while it is the most recent.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSectionTracker {
    linked_sections: Vec<String>,
    in_view: Vec<String>,
    active: Option<String>,
}

impl ActiveSectionTracker {
    /// `initial` counts as in view until the first report says otherwise.
    pub fn new(linked_sections: Vec<String>, initial: Option<&str>) -> Self {
        let mut tracker = Self {
            linked_sections,
            in_view: initial.map(str::to_string).into_iter().collect(),
            active: None,
        };
        tracker.active = tracker.resolve_active();
        tracker
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, section_id: &str) -> bool {
        self.active.as_deref() == Some(section_id)
    }

    pub fn apply(&mut self, entries: &[SectionVisibility]) -> Option<&str> {
        for entry in entries {
            self.in_view.retain(|id| *id != entry.section_id);
            if entry.is_in_view() {
                self.in_view.push(entry.section_id.clone());
            }
        }
        self.active = self.resolve_active();
        self.active()
    }

    fn resolve_active(&self) -> Option<String> {
        self.in_view
            .last()
            .filter(|latest| self.linked_sections.contains(latest))
            .cloned()
    }
}

/// Presentation state derived from the viewport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    pub header_hidden: bool,
    pub back_to_top_visible: bool,
    pub active_section_id: Option<String>,
}

impl ScrollState {
    pub fn with_scroll(mut self, signals: ScrollSignals) -> Self {
        self.header_hidden = signals.header_hidden;
        self.back_to_top_visible = signals.back_to_top_visible;
        self
    }

    pub fn header_top_px(&self) -> i32 {
        if self.header_hidden { HEADER_HIDDEN_TOP_PX } else { 0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ActiveSectionTracker {
        ActiveSectionTracker::new(
            TRACKED_SECTIONS.iter().map(|id| id.to_string()).collect(),
            Some("home"),
        )
    }

    #[test]
    fn test_back_to_top_threshold_boundary() {
        assert!(!back_to_top_visible(0.0));
        assert!(!back_to_top_visible(200.0));
        assert!(back_to_top_visible(201.0));
    }

    #[test]
    fn test_header_hides_on_every_downward_step() {
        let mut scroll = ScrollTracker::new();
        for offset in [10.0, 50.0, 120.0, 400.0] {
            assert!(scroll.observe(offset).header_hidden, "offset {offset}");
        }
    }

    #[test]
    fn test_header_shows_on_upward_steps() {
        let mut scroll = ScrollTracker::new();
        scroll.observe(900.0);
        for offset in [700.0, 300.0, 0.0] {
            assert!(!scroll.observe(offset).header_hidden, "offset {offset}");
        }
    }

    #[test]
    fn test_equal_offset_keeps_header_visible() {
        let mut scroll = ScrollTracker::new();
        scroll.observe(300.0);
        assert!(!scroll.observe(300.0).header_hidden);
    }

    #[test]
    fn test_negative_overscroll_is_clamped() {
        let mut scroll = ScrollTracker::new();
        assert!(!scroll.observe(-40.0).header_hidden);
        // Compared against the clamped zero, not -40.
        assert!(!scroll.observe(0.0).header_hidden);
        assert!(scroll.observe(1.0).header_hidden);
    }

    #[test]
    fn test_scroll_signals_are_computed_together() {
        let mut scroll = ScrollTracker::new();
        let signals = scroll.observe(250.0);
        assert_eq!(
            signals,
            ScrollSignals {
                header_hidden: true,
                back_to_top_visible: true
            }
        );
        let state = ScrollState::default().with_scroll(signals);
        assert_eq!(state.header_top_px(), HEADER_HIDDEN_TOP_PX);
    }

    #[test]
    fn test_only_section_above_threshold_is_active() {
        let mut sections = tracker();
        let entries = [
            SectionVisibility::new("home", 0.1),
            SectionVisibility::new("about", 0.4),
            SectionVisibility::new("skills", 0.75),
            SectionVisibility::new("projects", 0.69),
            SectionVisibility::new("contact", 0.0),
        ];
        assert_eq!(sections.apply(&entries), Some("skills"));
        let active: Vec<&str> = TRACKED_SECTIONS
            .iter()
            .copied()
            .filter(|id| sections.is_active(id))
            .collect();
        assert_eq!(active, vec!["skills"]);
    }

    #[test]
    fn test_latest_crossing_wins() {
        let mut sections = tracker();
        let entries = [
            SectionVisibility::new("about", 0.8),
            SectionVisibility::new("skills", 0.9),
        ];
        assert_eq!(sections.apply(&entries), Some("skills"));
    }

    #[test]
    fn test_no_section_in_view_clears_selection() {
        let mut sections = tracker();
        assert_eq!(sections.apply(&[SectionVisibility::new("about", 0.8)]), Some("about"));
        assert_eq!(sections.apply(&[SectionVisibility::new("about", 0.3)]), None);
        assert!(TRACKED_SECTIONS.iter().all(|id| !sections.is_active(id)));
    }

    #[test]
    fn test_leaving_section_falls_back_to_one_still_in_view() {
        let mut sections = tracker();
        sections.apply(&[
            SectionVisibility::new("home", 0.0),
            SectionVisibility::new("skills", 0.9),
        ]);
        sections.apply(&[SectionVisibility::new("projects", 0.8)]);
        assert_eq!(sections.active(), Some("projects"));
        assert_eq!(sections.apply(&[SectionVisibility::new("projects", 0.2)]), Some("skills"));
    }

    #[test]
    fn test_threshold_crossing_reported_in_single_precision() {
        let mut sections = tracker();
        let crossing = SectionVisibility::new("skills", 0.699_999_988_079_071);
        assert!(crossing.is_in_view());
        assert_eq!(sections.apply(&[crossing]), Some("skills"));
        assert!(!SectionVisibility::new("skills", 0.69).is_in_view());
    }

    #[test]
    fn test_unlinked_section_clears_selection() {
        let mut sections = ActiveSectionTracker::new(vec!["home".to_string()], Some("home"));
        assert_eq!(sections.apply(&[SectionVisibility::new("about", 1.0)]), None);
        assert!(!sections.is_active("home"));
    }

    #[test]
    fn test_unknown_initial_section_is_ignored() {
        let sections = ActiveSectionTracker::new(vec!["home".to_string()], Some("blog"));
        assert_eq!(sections.active(), None);
    }

    #[test]
    fn test_initial_section_active_until_reported() {
        let mut sections = tracker();
        assert_eq!(sections.active(), Some("home"));
        assert_eq!(sections.apply(&[SectionVisibility::new("home", 0.1)]), None);
    }
}

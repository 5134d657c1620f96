// Spacing and layout tokens (px)

pub const SPACING_4: u32 = 4;
pub const SPACING_8: u32 = 8;
pub const SPACING_12: u32 = 12;
pub const SPACING_16: u32 = 16;
pub const SPACING_24: u32 = 24;
pub const SPACING_32: u32 = 32;
pub const SPACING_48: u32 = 48;
pub const SPACING_64: u32 = 64;

pub const CORNER_RADIUS_8: u32 = 8;
pub const CORNER_RADIUS_20: u32 = 20;

pub const CONTENT_MAX_WIDTH: u32 = 1100;
pub const HEADER_HEIGHT: u32 = 72;

/// Below this viewport width the navigation collapses behind the menu button.
pub const COMPACT_LAYOUT_BREAKPOINT: u32 = 800;

pub fn is_compact_width(viewport_width: u32) -> bool {
    viewport_width < COMPACT_LAYOUT_BREAKPOINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_breakpoint() {
        assert!(is_compact_width(390));
        assert!(!is_compact_width(COMPACT_LAYOUT_BREAKPOINT));
        assert!(!is_compact_width(1440));
    }
}

// Typography tokens

pub const FONT_SIZE_14: u32 = 14;
pub const FONT_SIZE_16: u32 = 16;
pub const FONT_SIZE_18: u32 = 18;
pub const FONT_SIZE_24: u32 = 24;
pub const FONT_SIZE_30: u32 = 30;
pub const FONT_SIZE_36: u32 = 36;
pub const FONT_SIZE_56: u32 = 56;

pub const FONT_FAMILY_SANS: &str = "Inter";
pub const FONT_FAMILY_DISPLAY: &str = "Rubik";

pub const LINE_HEIGHT_BODY: u32 = 28;

//! Theme tokens and small view components shared by the portfolio sections.
//!
//! Nothing here owns theme state. Components receive a [`ThemeHandle`] and
//! derive their colors from it, so one store drives every themed element.

pub mod components;
pub mod tokens;

pub use components::*;
pub use tokens::*;

// Design tokens for the portfolio page

pub mod color;
pub mod font;
pub mod shadow;
pub mod spacing;
pub mod theme;

pub use color::*;
pub use font::*;
pub use shadow::*;
pub use spacing::*;
pub use theme::*;

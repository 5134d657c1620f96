// View components

pub mod button;
pub mod text;
pub mod themed_image;

pub use button::*;
pub use text::*;
pub use themed_image::*;

pub mod color;
pub mod palette;

pub use color::Color;

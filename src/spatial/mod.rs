pub mod geometry;
pub mod grid;

pub use geometry::{Point, Region};
pub use grid::Grid;

//! Drawing tools. Each one mutates the grid in place, clips anything outside
//! it, and reports how many cells it wrote.

pub mod flood;
pub mod gradient;
pub mod line;

pub use flood::flood_fill;
pub use gradient::{apply_gradient, GradientParams};
pub use line::draw_line;

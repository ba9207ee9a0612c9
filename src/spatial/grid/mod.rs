//! Grid - square cell buffer, one packed ABGR color per cell
//!
//! Stored row-major in a single `Vec<u32>` (index = y * size + x), so the
//! raw buffer can be handed to an export canvas as RGBA bytes.

use crate::core::error::{EngineError, EngineResult};
use crate::domain::Color;

mod indexing;
mod accessors;

pub struct Grid {
    size: u32,
    len: usize,

    pub colors: Vec<u32>, // ABGR packed color
}

impl Grid {
    /// Allocate a `size x size` grid with every cell set to `fill`.
    pub fn new(size: u32, fill: Color) -> EngineResult<Self> {
        if size == 0 {
            return Err(EngineError::EmptyGrid);
        }
        let len = (size as usize) * (size as usize);
        Ok(Self {
            size,
            len,
            colors: vec![fill.to_abgr(); len],
        })
    }

    /// Adopt an existing row-major ABGR buffer of exactly `size * size` cells.
    pub fn from_packed(size: u32, colors: Vec<u32>) -> EngineResult<Self> {
        let len = (size as usize) * (size as usize);
        if size == 0 || colors.len() != len {
            return Err(EngineError::InvalidGrid(format!(
                "expected {len} cells for a {size}x{size} grid, got {}",
                colors.len()
            )));
        }
        Ok(Self { size, len, colors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_every_cell() {
        let c = Color::rgb(10, 20, 30);
        let grid = Grid::new(7, c).unwrap();
        assert_eq!(grid.size(), 7);
        assert_eq!(grid.len(), 49);
        for y in 0..7 {
            for x in 0..7 {
                assert_eq!(grid.get(x, y), Ok(c));
            }
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        let err = Grid::new(0, Color::WHITE).err();
        assert_eq!(err, Some(EngineError::EmptyGrid));
        assert_eq!(err.map(|e| e.to_string()).as_deref(), Some("grid size must be at least 1"));
    }

    #[test]
    fn get_and_set_report_out_of_bounds() {
        let mut grid = Grid::new(4, Color::WHITE).unwrap();
        let oob = EngineError::OutOfBounds { x: 4, y: 0, size: 4 };
        assert_eq!(grid.get(4, 0), Err(oob.clone()));
        assert_eq!(grid.set(4, 0, Color::BLACK), Err(oob));
        assert!(grid.get(-1, 2).is_err());
        assert!(grid.colors.iter().all(|&c| c == Color::WHITE.to_abgr()));
    }

    #[test]
    fn set_writes_row_major() {
        let mut grid = Grid::new(3, Color::WHITE).unwrap();
        grid.set(2, 1, Color::BLACK).unwrap();
        assert_eq!(grid.colors[grid.index(2, 1)], Color::BLACK.to_abgr());
        assert_eq!(grid.index(2, 1), 5);
        assert_eq!(grid.coords(5), (2, 1));
    }

    #[test]
    fn fill_and_rgba_bytes() {
        let mut grid = Grid::new(2, Color::WHITE).unwrap();
        grid.fill(Color::rgba(1, 2, 3, 4));
        assert_eq!(grid.to_rgba_bytes(), [1u8, 2, 3, 4].repeat(4));
    }
}

//! Linear two-anchor gradient
//!
//! Each cell is projected onto the `start -> end` axis:
//!
//! ```text
//! t = clamp(((p - start) . (end - start)) / |end - start|^2, 0, 1)
//! ```
//!
//! and gets `from.lerp(to, t)`. Cells before `start` keep `from`, cells past
//! `end` keep `to`. Identical anchors give `t = 0` everywhere.

use std::ops::Range;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::Color;
use crate::spatial::{Grid, Point, Region};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientParams {
    pub start: Point,
    pub end: Point,
    pub from: Color,
    pub to: Color,
    /// Restrict the fill to this rectangle; `None` = whole grid
    pub region: Option<Region>,
}

impl GradientParams {
    pub fn new(start: Point, end: Point, from: Color, to: Color) -> Self {
        Self { start, end, from, to, region: None }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }
}

/// Precomputed projection onto the gradient axis
#[derive(Clone, Copy)]
struct Axis {
    sx: f64,
    sy: f64,
    dx: f64,
    dy: f64,
    inv_len2: f64,
}

impl Axis {
    fn new(start: Point, end: Point) -> Self {
        let dx = end.x as f64 - start.x as f64;
        let dy = end.y as f64 - start.y as f64;
        let len2 = dx * dx + dy * dy;
        Self {
            sx: start.x as f64,
            sy: start.y as f64,
            dx,
            dy,
            inv_len2: if len2 > 0.0 { 1.0 / len2 } else { 0.0 },
        }
    }

    #[inline]
    fn factor(&self, x: u32, y: u32) -> f64 {
        let px = x as f64 - self.sx;
        let py = y as f64 - self.sy;
        ((px * self.dx + py * self.dy) * self.inv_len2).clamp(0.0, 1.0)
    }
}

#[inline]
fn fill_row(row: &mut [u32], y: u32, cols: Range<u32>, axis: &Axis, from: Color, to: Color) {
    for x in cols {
        row[x as usize] = from.lerp(to, axis.factor(x, y)).to_abgr();
    }
}

/// Apply the gradient. Returns the number of cells written.
pub fn apply_gradient(grid: &mut Grid, params: &GradientParams) -> usize {
    let size = grid.size();
    let (cols, rows) = match params.region {
        Some(region) => match region.clip(size) {
            Some(ranges) => ranges,
            None => return 0,
        },
        None => (0..size, 0..size),
    };

    let axis = Axis::new(params.start, params.end);
    let (from, to) = (params.from, params.to);
    let stride = size as usize;
    let first_row = rows.start;
    let band = &mut grid.colors[rows.start as usize * stride..rows.end as usize * stride];

    #[cfg(feature = "parallel")]
    {
        band.par_chunks_mut(stride).enumerate().for_each(|(i, row)| {
            fill_row(row, first_row + i as u32, cols.clone(), &axis, from, to);
        });
    }
    #[cfg(not(feature = "parallel"))]
    {
        for (i, row) in band.chunks_mut(stride).enumerate() {
            fill_row(row, first_row + i as u32, cols.clone(), &axis, from, to);
        }
    }

    cols.len() * rows.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color::BLACK;
    const WHITE: Color = Color::WHITE;

    #[test]
    fn horizontal_ramp_hits_anchor_colors() {
        let mut grid = Grid::new(5, Color::rgb(1, 2, 3)).unwrap();
        let params = GradientParams::new(Point::new(0, 0), Point::new(4, 0), BLACK, WHITE);
        assert_eq!(apply_gradient(&mut grid, &params), 25);

        for y in 0..5 {
            assert_eq!(grid.get(0, y), Ok(BLACK));
            assert_eq!(grid.get(1, y), Ok(Color::rgb(64, 64, 64)));
            assert_eq!(grid.get(2, y), Ok(Color::rgb(128, 128, 128)));
            assert_eq!(grid.get(3, y), Ok(Color::rgb(191, 191, 191)));
            assert_eq!(grid.get(4, y), Ok(WHITE));
        }
    }

    #[test]
    fn cells_beyond_anchors_are_clamped() {
        let mut grid = Grid::new(6, WHITE).unwrap();
        let params = GradientParams::new(Point::new(1, 0), Point::new(3, 0), BLACK, WHITE);
        apply_gradient(&mut grid, &params);
        assert_eq!(grid.get(0, 2), Ok(BLACK));
        assert_eq!(grid.get(5, 2), Ok(WHITE));
    }

    #[test]
    fn diagonal_axis_is_symmetric() {
        let mut grid = Grid::new(4, WHITE).unwrap();
        let params = GradientParams::new(Point::new(0, 0), Point::new(3, 3), BLACK, WHITE);
        apply_gradient(&mut grid, &params);
        assert_eq!(grid.get(1, 2), grid.get(2, 1));
        assert_eq!(grid.get(3, 3), Ok(WHITE));
    }

    #[test]
    fn identical_anchors_fill_with_start_color() {
        let mut grid = Grid::new(3, WHITE).unwrap();
        let red = Color::rgb(255, 0, 0);
        let params = GradientParams::new(Point::new(1, 1), Point::new(1, 1), red, BLACK);
        apply_gradient(&mut grid, &params);
        assert!(grid.colors.iter().all(|&c| c == red.to_abgr()));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let params = GradientParams::new(Point::new(-3, 7), Point::new(9, -2), Color::rgb(10, 200, 30), Color::rgba(250, 5, 90, 128));
        let mut grid = Grid::new(16, WHITE).unwrap();
        apply_gradient(&mut grid, &params);
        let first = grid.colors.clone();
        apply_gradient(&mut grid, &params);
        assert_eq!(grid.colors, first);
    }

    #[test]
    fn region_limits_writes() {
        let mut grid = Grid::new(4, WHITE).unwrap();
        let params = GradientParams::new(Point::new(0, 0), Point::new(3, 0), BLACK, BLACK)
            .with_region(Region::new(2, -1, 10, 2));
        assert_eq!(apply_gradient(&mut grid, &params), 2);
        assert_eq!(grid.get(2, 0), Ok(BLACK));
        assert_eq!(grid.get(3, 0), Ok(BLACK));
        assert_eq!(grid.get(1, 0), Ok(WHITE));
        assert_eq!(grid.get(2, 1), Ok(WHITE));
    }

    #[test]
    fn region_outside_grid_is_noop() {
        let mut grid = Grid::new(4, WHITE).unwrap();
        let params = GradientParams::new(Point::new(0, 0), Point::new(3, 0), BLACK, BLACK)
            .with_region(Region::new(4, 4, 2, 2));
        assert_eq!(apply_gradient(&mut grid, &params), 0);
        assert!(grid.colors.iter().all(|&c| c == WHITE.to_abgr()));
    }
}

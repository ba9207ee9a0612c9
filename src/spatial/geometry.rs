use std::ops::Range;

/// Integer cell coordinate, `x` = column, `y` = row. May lie outside the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle of cells, origin at top-left. May extend past the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Clip against a `size x size` grid. Returns column and row ranges,
    /// or `None` when nothing overlaps.
    pub fn clip(&self, size: u32) -> Option<(Range<u32>, Range<u32>)> {
        let clip_axis = |start: i32, len: u32| -> Option<Range<u32>> {
            let lo = (start as i64).max(0);
            let hi = (start as i64 + len as i64).min(size as i64);
            (lo < hi).then(|| lo as u32..hi as u32)
        };
        Some((clip_axis(self.x, self.width)?, clip_axis(self.y, self.height)?))
    }
}

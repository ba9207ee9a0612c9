use crate::domain::Color;
use crate::spatial::{Grid, Point};

/// Bresenham line from `from` to `to` (both inclusive), 8-connected.
///
/// Cells outside the grid are skipped, not clamped. Step direction is -1
/// whenever the coordinates are equal; single-pixel output depends on that
/// tie-break, keep it.
///
/// Only the part of the walk whose major-axis coordinate lies inside the
/// grid is stepped: the walk jumps straight to its first step on the grid
/// and stops after the last one, so the cost is bounded by the grid size
/// rather than the segment length. The cells written are exactly those the
/// full walk would write.
///
/// Returns the number of cells written.
pub fn draw_line(grid: &mut Grid, from: Point, to: Point, color: Color) -> usize {
    let size = i64::from(grid.size());
    let mut walk = Walk::new(from, to);
    let Some((first, last)) = walk.visible_steps(size) else {
        return 0;
    };
    walk.skip_to(first);

    let packed = color.to_abgr();
    let mut written = 0usize;
    let mut n = first;
    loop {
        if let (Ok(x), Ok(y)) = (i32::try_from(walk.x), i32::try_from(walk.y)) {
            if grid.put(x, y, packed) {
                written += 1;
            }
        }
        if n == last {
            break;
        }
        walk.step();
        n += 1;
    }

    written
}

/// Integer Bresenham state. i64 so extreme host coordinates cannot overflow
/// the error term.
struct Walk {
    origin: (i64, i64),
    end: (i64, i64),
    x: i64,
    y: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
}

impl Walk {
    fn new(from: Point, to: Point) -> Self {
        let (x0, y0) = (i64::from(from.x), i64::from(from.y));
        let (x1, y1) = (i64::from(to.x), i64::from(to.y));
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        Walk {
            origin: (x0, y0),
            end: (x1, y1),
            x: x0,
            y: y0,
            dx,
            dy,
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
            err: dx + dy,
        }
    }

    /// x steps on every iteration (ties included), otherwise y does
    fn x_major(&self) -> bool {
        self.dx >= -self.dy
    }

    fn step(&mut self) {
        let e2 = 2 * self.err;
        if e2 >= self.dy {
            self.err += self.dy;
            self.x += self.sx;
        }
        if e2 <= self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }
    }

    /// First and last step index whose major-axis coordinate is on a
    /// `size x size` grid, or `None` when the segment's bounding box misses
    /// the grid entirely.
    fn visible_steps(&self, size: i64) -> Option<(i64, i64)> {
        let ((x0, y0), (x1, y1)) = (self.origin, self.end);
        if x0.max(x1) < 0 || y0.max(y1) < 0 || x0.min(x1) >= size || y0.min(y1) >= size {
            return None;
        }

        let total = self.dx.max(-self.dy);
        let (start, step) = if self.x_major() { (x0, self.sx) } else { (y0, self.sy) };
        let (lo, hi) = if step > 0 {
            (-start, size - 1 - start)
        } else {
            (start - (size - 1), start)
        };
        let (lo, hi) = (lo.max(0), hi.min(total));
        (lo <= hi).then_some((lo, hi))
    }

    /// Put the walk in the exact state it has after `n` steps from the
    /// origin. The minor axis has advanced `round(n * minor / major)` times
    /// (halves round up), and the error term follows from both counts.
    fn skip_to(&mut self, n: i64) {
        let (a, b) = (i128::from(self.dx), i128::from(-self.dy));
        let n = i128::from(n);
        let (nx, ny) = if self.x_major() {
            (n, minor_steps(n, a, b))
        } else {
            (minor_steps(n, b, a), n)
        };

        let (x0, y0) = self.origin;
        self.x = x0 + self.sx * nx as i64;
        self.y = y0 + self.sy * ny as i64;
        // Bounded by the deltas, so it fits back into i64
        self.err = (a - b - nx * b + ny * a) as i64;
    }
}

fn minor_steps(n: i128, major: i128, minor: i128) -> i128 {
    if major == 0 {
        0
    } else {
        (2 * n * minor + major) / (2 * major)
    }
}

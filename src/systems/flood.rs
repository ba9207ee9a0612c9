use crate::domain::Color;
use crate::spatial::{Grid, Point};

/// Bucket fill: recolor the 4-connected region of cells that share the seed's
/// color.
///
/// Uses an explicit stack of flat indices, so region size is bounded by the
/// grid and not by the call stack. A cell is recolored when it is pushed,
/// which doubles as the visited mark: it no longer matches the target color.
///
/// No-op when the seed is outside the grid or already has `color`.
/// Returns the number of cells written.
pub fn flood_fill(grid: &mut Grid, seed: Point, color: Color) -> usize {
    let Ok(seed_idx) = grid.checked_index(seed.x, seed.y) else {
        return 0;
    };

    let target = grid.colors[seed_idx];
    let replacement = color.to_abgr();
    if target == replacement {
        return 0;
    }

    let size = grid.size() as usize;
    let colors = &mut grid.colors;
    let mut written = 0usize;

    let mut stack: Vec<usize> = Vec::with_capacity(size.max(64));
    colors[seed_idx] = replacement;
    written += 1;
    stack.push(seed_idx);

    while let Some(idx) = stack.pop() {
        let x = idx % size;
        let y = idx / size;

        // Left, right, up, down
        let neighbors = [
            (x > 0).then(|| idx - 1),
            (x + 1 < size).then(|| idx + 1),
            (y > 0).then(|| idx - size),
            (y + 1 < size).then(|| idx + size),
        ];

        for ni in neighbors.into_iter().flatten() {
            if colors[ni] == target {
                colors[ni] = replacement;
                written += 1;
                stack.push(ni);
            }
        }
    }

    written
}

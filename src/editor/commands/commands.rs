use crate::core::error::{EngineError, EngineResult};
use crate::domain::Color;
use crate::spatial::{Grid, Point};
use crate::systems::{self, GradientParams};

use super::snapshot;
use super::{EditorCore, OpStats};

pub(super) fn init_grid(editor: &mut EditorCore, size: i32, fill: Color) -> EngineResult<()> {
    let max = editor.config.max_grid_size;
    if size <= 0 || size as u32 > max {
        return Err(EngineError::InvalidSize { size: size as i64, max });
    }

    editor.grid = Some(Grid::new(size as u32, fill)?);
    editor.last_op = OpStats::default();
    log::info!("grid initialized: {size}x{size} filled with {fill}");
    Ok(())
}

pub(super) fn load_snapshot(editor: &mut EditorCore, json: &str) -> EngineResult<()> {
    let grid = snapshot::parse_snapshot(json, editor.config.max_grid_size)?;
    log::info!("grid loaded from snapshot: {0}x{0}", grid.size());
    editor.grid = Some(grid);
    editor.last_op = OpStats::default();
    Ok(())
}

pub(super) fn line(grid: &mut Grid, from: Point, to: Point, color: Color) -> usize {
    systems::draw_line(grid, from, to, color)
}

pub(super) fn gradient(grid: &mut Grid, params: &GradientParams) -> usize {
    systems::apply_gradient(grid, params)
}

pub(super) fn bucket(grid: &mut Grid, seed: Point, color: Color) -> usize {
    systems::flood_fill(grid, seed, color)
}

pub(super) fn pixel(grid: &mut Grid, at: Point, color: Color) -> usize {
    usize::from(grid.put(at.x, at.y, color.to_abgr()))
}

pub(super) fn fill(grid: &mut Grid, color: Color) -> usize {
    grid.fill(color);
    grid.len()
}

//! Editor - one editing session over one grid
//!
//! `EditorCore` owns the grid and the session settings. Every tool call runs
//! to completion and returns the full snapshot; nothing is carried between
//! calls except the grid itself. The grid is `None` until `init_grid` (or
//! `load_snapshot`) succeeds, and tools called before that fail with
//! `Uninitialized`.
//!
//! Drawing algorithms live in `systems/`, this module only wires them to the
//! session (validation, stats, logging, snapshot).

use crate::core::config::EditorConfig;
use crate::core::error::{EngineError, EngineResult};
use crate::domain::Color;
use crate::spatial::{Grid, Point};
use crate::systems::GradientParams;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/op_stats.rs"]
mod op_stats;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/snapshot.rs"]
pub mod snapshot;
pub(crate) mod facade;

pub use facade::Editor;
pub use op_stats::OpStats;
pub use snapshot::EMPTY_SNAPSHOT;

pub struct EditorCore {
    config: EditorConfig,
    grid: Option<Grid>,

    // Perf metrics
    perf_enabled: bool,
    last_op: OpStats,
}

impl Default for EditorCore {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorCore {
    /// Session with default settings and no grid yet
    pub fn new() -> Self {
        Self {
            config: EditorConfig::default(),
            grid: None,
            perf_enabled: false,
            last_op: OpStats::default(),
        }
    }

    pub fn with_config(config: EditorConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config, ..Self::new() })
    }

    pub fn load_config_json(&mut self, json: &str) -> EngineResult<()> {
        settings::load_config_json(self, json)
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn set_default_color(&mut self, color: Color) {
        settings::set_default_color(self, color);
    }

    pub fn set_max_grid_size(&mut self, max: u32) -> EngineResult<()> {
        settings::set_max_grid_size(self, max)
    }

    /// Enable or disable per-call timing (cell counts are always recorded)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Stats of the last tool call
    pub fn last_op_stats(&self) -> &OpStats {
        &self.last_op
    }

    // === Grid store ===

    /// (Re)create the grid: `size x size`, every cell `fill`. On error the
    /// previous grid (if any) is left untouched.
    pub fn init_grid(&mut self, size: i32, fill: Color) -> EngineResult<()> {
        commands::init_grid(self, size, fill)
    }

    pub fn is_initialized(&self) -> bool {
        self.grid.is_some()
    }

    pub fn grid(&self) -> EngineResult<&Grid> {
        self.grid.as_ref().ok_or(EngineError::Uninitialized)
    }

    fn grid_mut(&mut self) -> EngineResult<&mut Grid> {
        self.grid.as_mut().ok_or(EngineError::Uninitialized)
    }

    pub fn size(&self) -> EngineResult<u32> {
        Ok(self.grid()?.size())
    }

    pub fn get_cell(&self, x: i32, y: i32) -> EngineResult<Color> {
        self.grid()?.get(x, y)
    }

    pub fn set_cell(&mut self, x: i32, y: i32, color: Color) -> EngineResult<()> {
        self.grid_mut()?.set(x, y, color)
    }

    // === Tools (each returns the snapshot after the edit) ===

    pub fn apply_line(&mut self, from: Point, to: Point, color: Color) -> EngineResult<String> {
        self.run_tool("line", |grid| commands::line(grid, from, to, color))
    }

    pub fn apply_gradient(&mut self, params: &GradientParams) -> EngineResult<String> {
        self.run_tool("gradient", |grid| commands::gradient(grid, params))
    }

    pub fn apply_bucket(&mut self, seed: Point, color: Color) -> EngineResult<String> {
        self.run_tool("bucket", |grid| commands::bucket(grid, seed, color))
    }

    /// Single-cell pencil; out-of-bounds is a no-op
    pub fn apply_pixel(&mut self, at: Point, color: Color) -> EngineResult<String> {
        self.run_tool("pixel", |grid| commands::pixel(grid, at, color))
    }

    /// Fill every cell with the configured default color
    pub fn clear(&mut self) -> EngineResult<String> {
        let color = self.config.default_color;
        self.run_tool("clear", |grid| commands::fill(grid, color))
    }

    pub fn fill(&mut self, color: Color) -> EngineResult<String> {
        self.run_tool("fill", |grid| commands::fill(grid, color))
    }

    // === Snapshot / export ===

    pub fn snapshot(&self) -> EngineResult<String> {
        snapshot::serialize_grid(self.grid()?)
    }

    /// Replace the grid with one parsed from a snapshot. On error the
    /// current grid is left untouched.
    pub fn load_snapshot(&mut self, json: &str) -> EngineResult<()> {
        commands::load_snapshot(self, json)
    }

    /// Row-major RGBA bytes for the host's export canvas
    pub fn rgba_pixels(&self) -> EngineResult<Vec<u8>> {
        Ok(self.grid()?.to_rgba_bytes())
    }

    fn run_tool<F>(&mut self, op: &str, tool: F) -> EngineResult<String>
    where
        F: FnOnce(&mut Grid) -> usize,
    {
        let perf_enabled = self.perf_enabled;
        let grid = self.grid_mut()?;
        let grid_size = grid.size();
        let (written, elapsed_ms) = perf_timer::timed(perf_enabled, || tool(grid));

        self.last_op = OpStats {
            op: op.to_string(),
            cells_written: written.min(u32::MAX as usize) as u32,
            elapsed_ms,
            grid_size,
        };
        log::debug!("{op}: {written} cells written");

        self.snapshot()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

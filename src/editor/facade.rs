use wasm_bindgen::prelude::*;

use crate::core::config::EditorConfig;
use crate::core::error::{EngineError, EngineResult};
use crate::domain::Color;
use crate::spatial::{Point, Region};
use crate::systems::GradientParams;

use super::op_stats::OpStats;
use super::snapshot::EMPTY_SNAPSHOT;
use super::EditorCore;

/// Tool calls never throw into the host's UI loop: failures are logged and
/// turned into the empty snapshot.
pub(crate) fn snapshot_or_empty(op: &str, result: EngineResult<String>) -> String {
    match result {
        Ok(json) => json,
        Err(e) => {
            log::warn!("{op} failed: {e}");
            EMPTY_SNAPSHOT.to_string()
        }
    }
}

pub(crate) fn to_js_error(e: EngineError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct Editor {
    core: EditorCore,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl Editor {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { core: EditorCore::new() }
    }

    #[wasm_bindgen(js_name = newWithConfig)]
    pub fn new_with_config(json: &str) -> Result<Editor, JsValue> {
        let core = EditorConfig::from_json(json)
            .and_then(EditorCore::with_config)
            .map_err(to_js_error)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn initialized(&self) -> bool { self.core.is_initialized() }

    /// Grid side length, 0 before `initGrid`
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> u32 { self.core.size().unwrap_or(0) }

    #[wasm_bindgen(js_name = setDefaultColor)]
    pub fn set_default_color(&mut self, color: &str) -> Result<(), JsValue> {
        let color = color.parse::<Color>().map_err(to_js_error)?;
        self.core.set_default_color(color);
        Ok(())
    }

    #[wasm_bindgen(js_name = setMaxGridSize)]
    pub fn set_max_grid_size(&mut self, max: u32) -> Result<(), JsValue> {
        self.core.set_max_grid_size(max).map_err(to_js_error)
    }

    /// Enable or disable per-call timing (adds a clock read per call)
    #[wasm_bindgen(js_name = enablePerfMetrics)]
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    #[wasm_bindgen(js_name = lastOpStats)]
    pub fn last_op_stats(&self) -> OpStats {
        self.core.last_op_stats().clone()
    }

    #[wasm_bindgen(js_name = initGrid)]
    pub fn init_grid(&mut self, size: i32, color: &str) -> Result<(), JsValue> {
        let fill = color.parse::<Color>().map_err(to_js_error)?;
        self.core.init_grid(size, fill).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = applyLine)]
    pub fn apply_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: &str) -> String {
        let result = color
            .parse::<Color>()
            .and_then(|c| self.core.apply_line(Point::new(x0, y0), Point::new(x1, y1), c));
        snapshot_or_empty("applyLine", result)
    }

    #[wasm_bindgen(js_name = applyGradient)]
    pub fn apply_gradient(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        from: &str,
        to: &str,
    ) -> String {
        let result = parse_gradient(x0, y0, x1, y1, from, to)
            .and_then(|params| self.core.apply_gradient(&params));
        snapshot_or_empty("applyGradient", result)
    }

    /// Gradient restricted to the `width x height` rectangle at (`rx`, `ry`)
    #[wasm_bindgen(js_name = applyGradientRegion)]
    #[allow(clippy::too_many_arguments)]
    pub fn apply_gradient_region(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        from: &str,
        to: &str,
        rx: i32,
        ry: i32,
        width: u32,
        height: u32,
    ) -> String {
        let result = parse_gradient(x0, y0, x1, y1, from, to).and_then(|params| {
            let params = params.with_region(Region::new(rx, ry, width, height));
            self.core.apply_gradient(&params)
        });
        snapshot_or_empty("applyGradientRegion", result)
    }

    #[wasm_bindgen(js_name = applyBucket)]
    pub fn apply_bucket(&mut self, x: i32, y: i32, color: &str) -> String {
        let result = color
            .parse::<Color>()
            .and_then(|c| self.core.apply_bucket(Point::new(x, y), c));
        snapshot_or_empty("applyBucket", result)
    }

    #[wasm_bindgen(js_name = applyPixel)]
    pub fn apply_pixel(&mut self, x: i32, y: i32, color: &str) -> String {
        let result = color
            .parse::<Color>()
            .and_then(|c| self.core.apply_pixel(Point::new(x, y), c));
        snapshot_or_empty("applyPixel", result)
    }

    #[wasm_bindgen(js_name = clearGrid)]
    pub fn clear_grid(&mut self) -> String {
        snapshot_or_empty("clearGrid", self.core.clear())
    }

    #[wasm_bindgen(js_name = fillGrid)]
    pub fn fill_grid(&mut self, color: &str) -> String {
        let result = color.parse::<Color>().and_then(|c| self.core.fill(c));
        snapshot_or_empty("fillGrid", result)
    }

    #[wasm_bindgen(js_name = getGrid)]
    pub fn get_grid(&self) -> String {
        snapshot_or_empty("getGrid", self.core.snapshot())
    }

    /// Canonical color of one cell, `undefined` outside the grid
    #[wasm_bindgen(js_name = getCell)]
    pub fn get_cell(&self, x: i32, y: i32) -> Option<String> {
        self.core.get_cell(x, y).ok().map(|c| c.to_string())
    }

    #[wasm_bindgen(js_name = loadGrid)]
    pub fn load_grid(&mut self, json: &str) -> Result<(), JsValue> {
        self.core.load_snapshot(json).map_err(to_js_error)
    }

    /// RGBA bytes for the export canvas (empty before `initGrid`)
    #[wasm_bindgen(js_name = rgbaPixels)]
    pub fn rgba_pixels(&self) -> Vec<u8> {
        self.core.rgba_pixels().unwrap_or_default()
    }
}

pub(crate) fn parse_gradient(
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
    from: &str,
    to: &str,
) -> EngineResult<GradientParams> {
    Ok(GradientParams::new(
        Point::new(x0, y0),
        Point::new(x1, y1),
        from.parse()?,
        to.parse()?,
    ))
}

//! Global JS functions (`initGrid`, `applyLine`, ...) for hosts that call
//! the engine without holding an `Editor` handle.
//!
//! They all share one default session behind a mutex, so at most one grid
//! mutation runs at a time.

use std::sync::{Mutex, MutexGuard};

use wasm_bindgen::prelude::*;

use crate::domain::palette::default_palette;
use crate::domain::Color;
use crate::editor::facade::{parse_gradient, snapshot_or_empty, to_js_error};
use crate::editor::{EditorCore, EMPTY_SNAPSHOT};
use crate::spatial::Point;

static DEFAULT_SESSION: Mutex<Option<EditorCore>> = Mutex::new(None);

/// Run `f` against the default session, creating it on first use. A
/// poisoned lock is recovered: the grid is always left in a valid state
/// between writes.
pub fn with_default_session<R>(f: impl FnOnce(&mut EditorCore) -> R) -> R {
    let mut guard: MutexGuard<'_, Option<EditorCore>> = DEFAULT_SESSION
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    f(guard.get_or_insert_with(EditorCore::new))
}

#[wasm_bindgen(js_name = initGrid)]
pub fn init_grid(size: i32, color: &str) -> Result<(), JsValue> {
    let fill = color.parse::<Color>().map_err(to_js_error)?;
    with_default_session(|core| core.init_grid(size, fill)).map_err(to_js_error)
}

#[wasm_bindgen(js_name = applyLine)]
pub fn apply_line(x0: i32, y0: i32, x1: i32, y1: i32, color: &str) -> String {
    let result = color.parse::<Color>().and_then(|c| {
        with_default_session(|core| core.apply_line(Point::new(x0, y0), Point::new(x1, y1), c))
    });
    snapshot_or_empty("applyLine", result)
}

#[wasm_bindgen(js_name = applyGradient)]
pub fn apply_gradient(x0: i32, y0: i32, x1: i32, y1: i32, from: &str, to: &str) -> String {
    let result = parse_gradient(x0, y0, x1, y1, from, to)
        .and_then(|params| with_default_session(|core| core.apply_gradient(&params)));
    snapshot_or_empty("applyGradient", result)
}

#[wasm_bindgen(js_name = applyBucket)]
pub fn apply_bucket(x: i32, y: i32, color: &str) -> String {
    let result = color
        .parse::<Color>()
        .and_then(|c| with_default_session(|core| core.apply_bucket(Point::new(x, y), c)));
    snapshot_or_empty("applyBucket", result)
}

#[wasm_bindgen(js_name = applyPixel)]
pub fn apply_pixel(x: i32, y: i32, color: &str) -> String {
    let result = color
        .parse::<Color>()
        .and_then(|c| with_default_session(|core| core.apply_pixel(Point::new(x, y), c)));
    snapshot_or_empty("applyPixel", result)
}

#[wasm_bindgen(js_name = clearGrid)]
pub fn clear_grid() -> String {
    snapshot_or_empty("clearGrid", with_default_session(|core| core.clear()))
}

#[wasm_bindgen(js_name = fillGrid)]
pub fn fill_grid(color: &str) -> String {
    let result = color
        .parse::<Color>()
        .and_then(|c| with_default_session(|core| core.fill(c)));
    snapshot_or_empty("fillGrid", result)
}

#[wasm_bindgen(js_name = getGrid)]
pub fn get_grid() -> String {
    snapshot_or_empty("getGrid", with_default_session(|core| core.snapshot()))
}

/// Canonical color of one cell, `undefined` outside the grid or before `initGrid`
#[wasm_bindgen(js_name = getCell)]
pub fn get_cell(x: i32, y: i32) -> Option<String> {
    with_default_session(|core| core.get_cell(x, y))
        .ok()
        .map(|c| c.to_string())
}

#[wasm_bindgen(js_name = loadGrid)]
pub fn load_grid(json: &str) -> Result<(), JsValue> {
    with_default_session(|core| core.load_snapshot(json)).map_err(to_js_error)
}

#[wasm_bindgen(js_name = rgbaPixels)]
pub fn rgba_pixels() -> Vec<u8> {
    with_default_session(|core| core.rgba_pixels()).unwrap_or_default()
}

/// The editor's 256-swatch palette as a JSON array of hex strings
#[wasm_bindgen]
pub fn palette() -> String {
    serde_json::to_string(&default_palette()).unwrap_or_else(|e| {
        log::warn!("palette failed: {e}");
        EMPTY_SNAPSHOT.to_string()
    })
}

use wasm_bindgen::prelude::*;

/// What the last tool call did. Timing is only filled in when perf metrics
/// are enabled; the cell count is always recorded.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OpStats {
    pub(super) op: String,
    pub(super) cells_written: u32,
    pub(super) elapsed_ms: f64,
    pub(super) grid_size: u32,
}

#[wasm_bindgen]
impl OpStats {
    #[wasm_bindgen(getter)]
    pub fn op(&self) -> String { self.op.clone() }

    #[wasm_bindgen(getter)]
    pub fn cells_written(&self) -> u32 { self.cells_written }

    #[wasm_bindgen(getter)]
    pub fn elapsed_ms(&self) -> f64 { self.elapsed_ms }

    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
}

//! Pixelgrid Engine - raster grid editing in WASM
//!
//! A square grid of colored cells plus the drawing tools the texture editor
//! needs: Bresenham line, two-anchor linear gradient, 4-connected bucket
//! fill. Every tool mutates the grid in place and returns the whole grid as
//! a JSON snapshot for the host to render.
//!
//! Architecture:
//! - core/     - Errors and configuration
//! - domain/   - Colors and the default palette
//! - spatial/  - Grid store and geometry
//! - systems/  - Drawing tools
//! - editor/   - Editing session, snapshot serialization, `Editor` JS class
//! - api/      - Global JS functions over a default session

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod editor;
pub mod api;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine: panic hook, console logger, banner.
/// Safe to call more than once.
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    {
        // Fails only when a logger is already installed (second init)
        let _ = console_log::init_with_level(log::Level::Info);
        web_sys::console::log_1(&"Pixelgrid WASM engine initialized".into());
    }
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::config::EditorConfig;
pub use crate::core::error::{EngineError, EngineResult};
pub use domain::Color;
pub use editor::{Editor, EditorCore, OpStats, EMPTY_SNAPSHOT};
pub use spatial::{Grid, Point, Region};
pub use systems::GradientParams;

pub mod wasm;

pub use crate::editor::Editor;

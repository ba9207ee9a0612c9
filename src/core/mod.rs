pub mod config;
pub mod error;

pub use config::EditorConfig;
pub use error::{EngineError, EngineResult};

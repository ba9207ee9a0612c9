use thiserror::Error;

/// Engine errors.
///
/// None of these are fatal: the wasm boundary turns tool failures into the
/// empty snapshot `[]` and only `initGrid`/`loadGrid` surface an exception.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid grid size {size} (expected 1..={max})")]
    InvalidSize { size: i64, max: u32 },
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds { x: i32, y: i32, size: u32 },
    #[error("grid has not been initialized")]
    Uninitialized,
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
    #[error("invalid grid data: {0}")]
    InvalidGrid(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("invalid config: {0}")]
    Config(String),
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

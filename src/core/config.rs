//! Editor configuration
//!
//! Loaded from JSON the same way the host hands over any other settings
//! bundle. Missing fields fall back to the defaults below.

use serde::{Deserialize, Serialize};

use crate::domain::Color;

use super::error::{EngineError, EngineResult};

pub const DEFAULT_GRID_COLOR: Color = Color::WHITE;

/// Largest grid `initGrid` accepts. 1024x1024 is already 4 MiB of cells and
/// a ~10 MB JSON snapshot per tool call.
pub const DEFAULT_MAX_GRID_SIZE: u32 = 1024;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Color used by `clear`
    pub default_color: Color,
    pub max_grid_size: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            default_color: DEFAULT_GRID_COLOR,
            max_grid_size: DEFAULT_MAX_GRID_SIZE,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: EditorConfig =
            serde_json::from_str(json).map_err(|e| EngineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.max_grid_size == 0 {
            return Err(EngineError::Config("max_grid_size must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = EditorConfig::from_json("{}").unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn fields_override_defaults() {
        let config =
            EditorConfig::from_json(r##"{"default_color":"#000","max_grid_size":64}"##).unwrap();
        assert_eq!(config.default_color, Color::BLACK);
        assert_eq!(config.max_grid_size, 64);
    }

    #[test]
    fn bad_color_or_zero_limit_is_rejected() {
        assert!(matches!(
            EditorConfig::from_json(r#"{"default_color":"nope"}"#),
            Err(EngineError::Config(_))
        ));
        assert!(matches!(
            EditorConfig::from_json(r#"{"max_grid_size":0}"#),
            Err(EngineError::Config(_))
        ));
    }
}

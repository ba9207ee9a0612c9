use crate::core::config::EditorConfig;
use crate::core::error::{EngineError, EngineResult};
use crate::domain::Color;

use super::EditorCore;

pub(super) fn load_config_json(editor: &mut EditorCore, json: &str) -> EngineResult<()> {
    editor.config = EditorConfig::from_json(json)?;
    Ok(())
}

pub(super) fn set_default_color(editor: &mut EditorCore, color: Color) {
    editor.config.default_color = color;
}

/// Only affects future `init_grid`/`load_snapshot` calls; a live grid larger
/// than the new limit is kept.
pub(super) fn set_max_grid_size(editor: &mut EditorCore, max: u32) -> EngineResult<()> {
    if max == 0 {
        return Err(EngineError::Config("max_grid_size must be at least 1".into()));
    }
    editor.config.max_grid_size = max;
    Ok(())
}

pub(super) fn enable_perf_metrics(editor: &mut EditorCore, enabled: bool) {
    editor.perf_enabled = enabled;
}

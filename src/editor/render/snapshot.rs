//! Snapshot - the grid as a row-major JSON array of color strings
//!
//! `[["#ffffff","#000000"],["#ffffff","#ffffff"]]` is a 2x2 grid whose
//! top-right cell is black. The host renders directly from this and can hand
//! it back later through `load_snapshot`.

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use crate::core::error::{EngineError, EngineResult};
use crate::domain::Color;
use crate::spatial::Grid;

/// Returned to the host in place of a snapshot when anything goes wrong.
pub const EMPTY_SNAPSHOT: &str = "[]";

struct RowsView<'a>(&'a Grid);

struct RowView<'a>(&'a [u32]);

impl Serialize for RowsView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.size() as usize))?;
        for row in self.0.rows() {
            seq.serialize_element(&RowView(row))?;
        }
        seq.end()
    }
}

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
        for &packed in self.0 {
            seq.serialize_element(&Color::from_abgr(packed))?;
        }
        seq.end()
    }
}

pub fn serialize_grid(grid: &Grid) -> EngineResult<String> {
    serde_json::to_string(&RowsView(grid)).map_err(|e| EngineError::Serialization(e.to_string()))
}

/// Parse a snapshot back into a grid. The rows must form a non-empty square
/// no larger than `max_size`, and every entry must be a color token.
pub fn parse_snapshot(json: &str, max_size: u32) -> EngineResult<Grid> {
    let rows: Vec<Vec<String>> =
        serde_json::from_str(json).map_err(|e| EngineError::InvalidGrid(e.to_string()))?;

    let n = rows.len();
    if n == 0 {
        return Err(EngineError::InvalidGrid("grid has no rows".into()));
    }
    if n > max_size as usize {
        return Err(EngineError::InvalidSize { size: n as i64, max: max_size });
    }

    let mut colors = Vec::with_capacity(n * n);
    for (y, row) in rows.iter().enumerate() {
        if row.len() != n {
            return Err(EngineError::InvalidGrid(format!(
                "row {y} has {} cells, expected {n}",
                row.len()
            )));
        }
        for token in row {
            colors.push(token.parse::<Color>()?.to_abgr());
        }
    }

    Grid::from_packed(n as u32, colors)
}

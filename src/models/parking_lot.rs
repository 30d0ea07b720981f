//! Parking Lot Model
//!
//! A lot is a rectangular grid of spaces (`rows` x `cols`) plus a set of
//! merged aisle indices. Aisle `r` is the drive lane between row `r` and
//! row `r + 1`; merging it models two rows pushed back-to-back.
//!
//! All layout edits go through the methods here so the invariants hold:
//! `spaces.len() == rows * cols`, every `(row, col)` appears exactly once,
//! and `merged_aisles` only names aisles that exist.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::layout::{geometry, registry};
use crate::models::space::{Space, SpaceType};

/// Parking lot entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParkingLot {
    pub id: i64,
    pub name: String,
    pub rows: u32,
    pub cols: u32,
    pub spaces: Vec<Space>,
    /// Indices of merged aisles; aisle `r` sits between row `r` and `r + 1`
    pub merged_aisles: BTreeSet<u32>,
}

impl ParkingLot {
    /// Create a lot with freshly generated spaces (all `regular`)
    pub fn new(id: i64, name: impl Into<String>, rows: u32, cols: u32) -> EngineResult<Self> {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            id,
            name: name.into(),
            rows,
            cols,
            spaces: registry::generate_spaces(rows, cols),
            merged_aisles: BTreeSet::new(),
        })
    }

    /// Change the lot dimensions, regenerating the space list.
    ///
    /// Space types are carried forward for every `(row, col)` that still
    /// exists; ids are reassigned from scratch. Merged aisles that no longer
    /// index an existing aisle are dropped.
    pub fn resize(&mut self, rows: u32, cols: u32) -> EngineResult<()> {
        validate_dimensions(rows, cols)?;
        self.spaces = registry::regenerate_spaces(rows, cols, &self.spaces);
        self.rows = rows;
        self.cols = cols;
        self.merged_aisles.retain(|&r| r + 1 < rows);
        Ok(())
    }

    /// Change the type of one space.
    ///
    /// The only per-space mutation; everything else about a space is
    /// positional and owned by the registry.
    pub fn set_space_type(&mut self, space_id: i64, space_type: SpaceType) -> EngineResult<()> {
        let space = self
            .spaces
            .iter_mut()
            .find(|s| s.id == space_id)
            .ok_or_else(|| {
                EngineError::inconsistent(format!("space {} not in registry", space_id))
            })?;
        space.space_type = space_type;
        Ok(())
    }

    /// Merge the aisle between two adjacent rows.
    ///
    /// Records `min(r1, r2)` as the merged aisle index. Idempotent: merging
    /// an already-merged pair is a no-op. Out-of-range or non-adjacent rows
    /// fail without mutating anything.
    pub fn merge_rows(&mut self, r1: u32, r2: u32) -> EngineResult<()> {
        if r1 >= self.rows || r2 >= self.rows {
            return Err(EngineError::validation(format!(
                "merge rows out of range: ({}, {}) in a {}-row lot",
                r1, r2, self.rows
            )));
        }
        if r1.abs_diff(r2) != 1 {
            return Err(EngineError::validation(format!(
                "rows {} and {} are not adjacent",
                r1, r2
            )));
        }
        self.merged_aisles.insert(r1.min(r2));
        Ok(())
    }

    /// Clear all merged aisles, restoring the standard aisle everywhere
    pub fn reset_merged_aisles(&mut self) {
        self.merged_aisles.clear();
    }

    // ==================== Geometry ====================

    /// Width of the aisle after `row` (see [`geometry::aisle_width_after_row`])
    pub fn aisle_width_after_row(&self, row: u32) -> f64 {
        debug_assert!(row + 1 < self.rows, "no aisle after the last row");
        geometry::aisle_width_after_row(row, &self.merged_aisles)
    }

    /// Total physical height of the lot
    pub fn height(&self) -> f64 {
        geometry::lot_height(self.rows, &self.merged_aisles)
    }

    /// Total physical width of the lot
    pub fn width(&self) -> f64 {
        geometry::lot_width(self.cols)
    }

    /// Physical `(x, y)` of a space's top-left corner
    pub fn space_position(&self, space: &Space) -> (f64, f64) {
        (
            geometry::space_x_position(space.col),
            geometry::row_y_position(space.row, &self.merged_aisles),
        )
    }
}

fn validate_dimensions(rows: u32, cols: u32) -> EngineResult<()> {
    if rows == 0 || cols == 0 {
        return Err(EngineError::validation(format!(
            "lot dimensions must be positive, got {}x{}",
            rows, cols
        )));
    }
    Ok(())
}

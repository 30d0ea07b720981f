//! Space Registry
//!
//! Keeps a lot's space list consistent with its dimensions. Regeneration is
//! an explicit rebuild: spaces from the previous list are keyed by
//! `(row, col)` so their types survive a resize, then ids are assigned
//! sequentially (1-based, row-major) during the rebuild pass. Ids are
//! positional and never preserved across regenerations.

use std::collections::HashMap;

use crate::models::space::{Space, SpaceType};

/// Build the space list for a fresh lot; every space starts `regular`
pub fn generate_spaces(rows: u32, cols: u32) -> Vec<Space> {
    regenerate_spaces(rows, cols, &[])
}

/// Rebuild the space list for new dimensions, carrying forward the type of
/// every `(row, col)` that existed before.
///
/// Cells outside the new bounds are dropped with their type assignments;
/// new cells default to `regular`.
pub fn regenerate_spaces(rows: u32, cols: u32, previous: &[Space]) -> Vec<Space> {
    let kept_types: HashMap<(u32, u32), SpaceType> = previous
        .iter()
        .map(|s| ((s.row, s.col), s.space_type))
        .collect();

    let mut spaces = Vec::with_capacity((rows * cols) as usize);
    let mut next_id: i64 = 1;
    for row in 0..rows {
        for col in 0..cols {
            spaces.push(Space {
                id: next_id,
                row,
                col,
                space_type: kept_types
                    .get(&(row, col))
                    .copied()
                    .unwrap_or(SpaceType::Regular),
            });
            next_id += 1;
        }
    }
    spaces
}

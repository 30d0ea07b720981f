//! Lot Geometry
//!
//! Deterministic mapping from lot dimensions to physical coordinates.
//! All distances are in abstract distance-units; rendering scales them.
//!
//! A merged aisle collapses the drive lane between two adjacent rows to a
//! near-zero gap, modelling rows pushed back-to-back.

use std::collections::BTreeSet;

/// Width of one space
pub const SPACE_WIDTH: f64 = 2.5;
/// Depth of one space (front to back)
pub const SPACE_DEPTH: f64 = 5.0;
/// Standard drive aisle width between rows
pub const AISLE_WIDTH: f64 = 6.0;
/// Residual gap left where an aisle has been merged away
pub const MERGED_AISLE_WIDTH: f64 = 0.1;

/// Width of the aisle after `row`.
///
/// Only defined for `row < rows - 1`; there is no aisle after the last row
/// (callers assert that contract, see `ParkingLot::aisle_width_after_row`).
pub fn aisle_width_after_row(row: u32, merged_aisles: &BTreeSet<u32>) -> f64 {
    if merged_aisles.contains(&row) {
        MERGED_AISLE_WIDTH
    } else {
        AISLE_WIDTH
    }
}

/// Total lot height: every row's depth plus every inter-row aisle
pub fn lot_height(rows: u32, merged_aisles: &BTreeSet<u32>) -> f64 {
    let mut height = rows as f64 * SPACE_DEPTH;
    for r in 0..rows.saturating_sub(1) {
        height += aisle_width_after_row(r, merged_aisles);
    }
    height
}

/// Y coordinate of a row's top edge; row 0 starts at 0
pub fn row_y_position(row: u32, merged_aisles: &BTreeSet<u32>) -> f64 {
    let mut y = 0.0;
    for r in 0..row {
        y += SPACE_DEPTH + aisle_width_after_row(r, merged_aisles);
    }
    y
}

/// X coordinate of a column's left edge
pub fn space_x_position(col: u32) -> f64 {
    col as f64 * SPACE_WIDTH
}

/// Total lot width
pub fn lot_width(cols: u32) -> f64 {
    cols as f64 * SPACE_WIDTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merged(rows: &[u32]) -> BTreeSet<u32> {
        rows.iter().copied().collect()
    }

    #[test]
    fn test_aisle_width_after_row() {
        let m = merged(&[1]);
        assert_eq!(aisle_width_after_row(0, &m), AISLE_WIDTH);
        assert_eq!(aisle_width_after_row(1, &m), MERGED_AISLE_WIDTH);
    }

    #[test]
    fn test_lot_height_matches_sum_decomposition() {
        // rows * depth + sum of per-aisle widths, for a mix of merge sets
        for rows in 1..=6u32 {
            for merge_row in 0..rows.saturating_sub(1) {
                let m = merged(&[merge_row]);
                let expected = rows as f64 * SPACE_DEPTH
                    + (0..rows - 1)
                        .map(|r| aisle_width_after_row(r, &m))
                        .sum::<f64>();
                assert!((lot_height(rows, &m) - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_lot_height_single_row_has_no_aisles() {
        assert_eq!(lot_height(1, &BTreeSet::new()), SPACE_DEPTH);
    }

    #[test]
    fn test_merging_strictly_decreases_height() {
        let baseline = lot_height(4, &BTreeSet::new());
        let shrunk = lot_height(4, &merged(&[2]));
        assert!(shrunk < baseline);
        assert!((baseline - shrunk - (AISLE_WIDTH - MERGED_AISLE_WIDTH)).abs() < 1e-9);
    }

    #[test]
    fn test_row_y_position() {
        let none = BTreeSet::new();
        assert_eq!(row_y_position(0, &none), 0.0);
        assert_eq!(row_y_position(1, &none), SPACE_DEPTH + AISLE_WIDTH);
        assert_eq!(row_y_position(2, &none), 2.0 * (SPACE_DEPTH + AISLE_WIDTH));

        // merging the first aisle pulls every later row up
        let m = merged(&[0]);
        assert_eq!(row_y_position(1, &m), SPACE_DEPTH + MERGED_AISLE_WIDTH);
        assert_eq!(row_y_position(0, &m), 0.0);
    }

    #[test]
    fn test_horizontal_positions() {
        assert_eq!(space_x_position(0), 0.0);
        assert_eq!(space_x_position(3), 7.5);
        assert_eq!(lot_width(4), 10.0);
    }
}

//! Scoring module - clear scoring rule
//!
//! Every completed region pays its full value: a row is worth 9, a column 9,
//! a 3x3 subgrid 9, and the values add up even when regions share cells.
//! Only the cleared-cell set is deduplicated, never the score.

use crate::types::{POINTS_PER_COL, POINTS_PER_ROW, POINTS_PER_SUBGRID};

/// Calculate the score for a clear, given how many regions of each kind
/// completed simultaneously
pub fn clear_score(rows: u32, cols: u32, subgrids: u32) -> u32 {
    rows * POINTS_PER_ROW + cols * POINTS_PER_COL + subgrids * POINTS_PER_SUBGRID
}

//! Board module - manages the 9x9 puzzle grid
//!
//! Each cell is empty or filled with a shape kind. Uses a flat array for
//! better cache locality and zero-allocation clearing.
//! Coordinates: (x, y) where x ranges 0..8 (left to right), y ranges 0..8
//! (top to bottom). Clearing scans rows, columns, and 3x3 subgrids
//! independently against the pre-clear grid, then resets the union once.

use arrayvec::ArrayVec;

use crate::core::scoring;
use crate::core::shapes::shape_cells;
use crate::types::{Cell, CellPos, ShapeKind, BOARD_CELLS, COLS, ROWS, SUBGRID};

/// Result of a `check_and_clear` pass
///
/// `cells` is the deduplicated union of all completed regions, in row-major
/// order; the per-region counts are not deduplicated and drive the score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClearOutcome {
    /// Cleared cells (each listed once, row-major)
    pub cells: ArrayVec<CellPos, BOARD_CELLS>,
    /// Number of completed rows
    pub rows: u8,
    /// Number of completed columns
    pub cols: u8,
    /// Number of completed 3x3 subgrids
    pub subgrids: u8,
}

impl ClearOutcome {
    /// True if nothing was cleared
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Score awarded for this clear (every completed region counts, even
    /// where regions share cells)
    pub fn score_delta(&self) -> u32 {
        scoring::clear_score(self.rows as u32, self.cols as u32, self.subgrids as u32)
    }
}

/// The game board - 9x9 grid using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * COLS + x)
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: u8, y: u8) -> Option<usize> {
        if x >= COLS || y >= ROWS {
            return None;
        }
        Some((y as usize) * (COLS as usize) + (x as usize))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: u8, y: u8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: u8, y: u8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: u8, y: u8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: u8, y: u8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if a shape can legally occupy the given origin: every occupied
    /// relative cell must land in bounds and on an empty cell.
    /// No side effects.
    pub fn can_place(&self, kind: ShapeKind, x: u8, y: u8) -> bool {
        shape_cells(kind)
            .iter()
            .all(|&(dx, dy)| match (x.checked_add(dx), y.checked_add(dy)) {
                (Some(px), Some(py)) => self.is_valid(px, py),
                _ => false,
            })
    }

    /// Fill every occupied relative cell of the shape at the given origin.
    /// Precondition: `can_place(kind, x, y)` was true when the placement was
    /// accepted; this does not re-check.
    pub fn place(&mut self, kind: ShapeKind, x: u8, y: u8) {
        for &(dx, dy) in shape_cells(kind) {
            self.set(x + dx, y + dy, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: u8) -> bool {
        if y >= ROWS {
            return false;
        }
        let start = (y as usize) * (COLS as usize);
        let end = start + COLS as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, x: u8) -> bool {
        if x >= COLS {
            return false;
        }
        (0..ROWS).all(|y| self.cells[(y as usize) * (COLS as usize) + (x as usize)].is_some())
    }

    /// Check if a 3x3 subgrid is completely filled.
    /// (gx, gy) are subgrid indices in 0..3; the subgrid origin is (gx*3, gy*3).
    pub fn is_subgrid_full(&self, gx: u8, gy: u8) -> bool {
        if gx >= SUBGRID || gy >= SUBGRID {
            return false;
        }
        for dy in 0..SUBGRID {
            for dx in 0..SUBGRID {
                let x = (gx * SUBGRID + dx) as usize;
                let y = (gy * SUBGRID + dy) as usize;
                if self.cells[y * (COLS as usize) + x].is_none() {
                    return false;
                }
            }
        }
        true
    }

    /// Scan for completed rows, columns, and subgrids, reset their union to
    /// empty, and report what was cleared.
    ///
    /// All three scans run against the pre-clear grid, so regions completed
    /// by the same placement all count. Calling again immediately clears
    /// nothing (the completed regions are gone).
    pub fn check_and_clear(&mut self) -> ClearOutcome {
        let mut marked = [false; BOARD_CELLS];
        let mut outcome = ClearOutcome::default();

        for y in 0..ROWS {
            if self.is_row_full(y) {
                outcome.rows += 1;
                let start = (y as usize) * (COLS as usize);
                for flag in &mut marked[start..start + COLS as usize] {
                    *flag = true;
                }
            }
        }

        for x in 0..COLS {
            if self.is_col_full(x) {
                outcome.cols += 1;
                for y in 0..ROWS as usize {
                    marked[y * (COLS as usize) + (x as usize)] = true;
                }
            }
        }

        for gy in 0..SUBGRID {
            for gx in 0..SUBGRID {
                if self.is_subgrid_full(gx, gy) {
                    outcome.subgrids += 1;
                    for dy in 0..SUBGRID {
                        for dx in 0..SUBGRID {
                            let x = (gx * SUBGRID + dx) as usize;
                            let y = (gy * SUBGRID + dy) as usize;
                            marked[y * (COLS as usize) + x] = true;
                        }
                    }
                }
            }
        }

        for (idx, cell) in self.cells.iter_mut().enumerate() {
            if marked[idx] {
                *cell = None;
                let x = (idx % COLS as usize) as u8;
                let y = (idx / COLS as usize) as u8;
                outcome.cells.push((x, y));
            }
        }

        outcome
    }

    /// Check if the shape fits anywhere on the current board.
    /// Tries all 81 origins; `can_place` rejects out-of-range origins on its
    /// own, so no edge special-casing is needed.
    pub fn has_valid_placement(&self, kind: ShapeKind) -> bool {
        for y in 0..ROWS {
            for x in 0..COLS {
                if self.can_place(kind, x, y) {
                    return true;
                }
            }
        }
        false
    }

    /// Export the grid as u8 codes (0 = empty, 1..=9 = shape code)
    pub fn write_u8_grid(&self, out: &mut [[u8; COLS as usize]; ROWS as usize]) {
        for y in 0..ROWS as usize {
            for x in 0..COLS as usize {
                out[y][x] = match self.cells[y * (COLS as usize) + x] {
                    Some(kind) => kind.code(),
                    None => 0,
                };
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(8, 0), Some(8));
        assert_eq!(Board::index(0, 1), Some(9));
        assert_eq!(Board::index(8, 8), Some(80));
        assert_eq!(Board::index(9, 0), None);
        assert_eq!(Board::index(0, 9), None);
        assert_eq!(Board::index(255, 255), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        // Set some cells
        board.set(0, 0, Some(ShapeKind::Dot));
        board.set(5, 7, Some(ShapeKind::Tee));

        // Verify via get
        assert_eq!(board.get(0, 0), Some(Some(ShapeKind::Dot)));
        assert_eq!(board.get(5, 7), Some(Some(ShapeKind::Tee)));

        // Verify internal array
        assert_eq!(board.cells[0], Some(ShapeKind::Dot));
        assert_eq!(board.cells[7 * 9 + 5], Some(ShapeKind::Tee));
    }

    #[test]
    fn test_check_and_clear_dedups_shared_cell() {
        let mut board = Board::new();

        // Fill row 0 and column 0; they share cell (0, 0)
        for x in 0..COLS {
            board.set(x, 0, Some(ShapeKind::Dot));
        }
        for y in 0..ROWS {
            board.set(0, y, Some(ShapeKind::Dot));
        }

        let outcome = board.check_and_clear();
        assert_eq!(outcome.rows, 1);
        assert_eq!(outcome.cols, 1);
        assert_eq!(outcome.subgrids, 0);

        // Union of 9 + 9 cells minus the shared corner
        assert_eq!(outcome.cells.len(), 17);
        assert_eq!(
            outcome.cells.iter().filter(|&&c| c == (0, 0)).count(),
            1,
            "shared cell must appear once"
        );

        // Both regions still score
        assert_eq!(outcome.score_delta(), 18);
    }

    #[test]
    fn test_check_and_clear_row_major_order() {
        let mut board = Board::new();
        for x in 0..COLS {
            board.set(x, 4, Some(ShapeKind::TrominoRow));
        }

        let outcome = board.check_and_clear();
        let expected: Vec<(u8, u8)> = (0..COLS).map(|x| (x, 4)).collect();
        assert_eq!(outcome.cells.as_slice(), expected.as_slice());
    }
}

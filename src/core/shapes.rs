//! Shapes module - the fixed block catalog
//!
//! Each shape is an immutable polyomino mask, stored as occupied cell offsets
//! relative to the shape's top-left origin, plus a bounding size. Shapes are
//! never rotated or mutated; the tray only ever references catalog entries.

use crate::types::{CellPos, ShapeKind};

/// All catalog entries, in snapshot-code order
pub const CATALOG: [ShapeKind; 9] = [
    ShapeKind::Dot,
    ShapeKind::DominoRow,
    ShapeKind::DominoCol,
    ShapeKind::TrominoRow,
    ShapeKind::TrominoCol,
    ShapeKind::Square,
    ShapeKind::Ell,
    ShapeKind::Tee,
    ShapeKind::Plus,
];

/// Get the occupied cells of a shape, relative to its origin (row-major order)
pub fn shape_cells(kind: ShapeKind) -> &'static [CellPos] {
    match kind {
        ShapeKind::Dot => &[(0, 0)],
        ShapeKind::DominoRow => &[(0, 0), (1, 0)],
        ShapeKind::DominoCol => &[(0, 0), (0, 1)],
        ShapeKind::TrominoRow => &[(0, 0), (1, 0), (2, 0)],
        ShapeKind::TrominoCol => &[(0, 0), (0, 1), (0, 2)],
        ShapeKind::Square => &[(0, 0), (1, 0), (0, 1), (1, 1)],
        // [1 0]
        // [1 0]
        // [1 1]
        ShapeKind::Ell => &[(0, 0), (0, 1), (0, 2), (1, 2)],
        // [1 1 1]
        // [0 1 0]
        ShapeKind::Tee => &[(0, 0), (1, 0), (2, 0), (1, 1)],
        // [0 1 0]
        // [1 1 1]
        // [0 1 0]
        ShapeKind::Plus => &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2)],
    }
}

/// Get the bounding size of a shape as (width, height)
pub fn shape_size(kind: ShapeKind) -> (u8, u8) {
    match kind {
        ShapeKind::Dot => (1, 1),
        ShapeKind::DominoRow => (2, 1),
        ShapeKind::DominoCol => (1, 2),
        ShapeKind::TrominoRow => (3, 1),
        ShapeKind::TrominoCol => (1, 3),
        ShapeKind::Square => (2, 2),
        ShapeKind::Ell => (2, 3),
        ShapeKind::Tee => (3, 2),
        ShapeKind::Plus => (3, 3),
    }
}

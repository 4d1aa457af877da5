//! Core types shared across the engine
//! This module contains pure data types and constants with no external dependencies

/// Board dimensions (cells)
pub const COLS: u8 = 9;
pub const ROWS: u8 = 9;

/// Subgrid edge length (the board divides into 3x3 blocks of 3x3 cells)
pub const SUBGRID: u8 = 3;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (COLS as usize) * (ROWS as usize);

/// Number of tray slots holding pending shapes
pub const TRAY_SLOTS: usize = 3;

/// Board pixel geometry. The rendering collaborator translates pointer
/// positions into grid cells with CELL_PX, and the clear animation uses
/// BOARD_PX as the exit distance for falling cells.
pub const BOARD_PX: u32 = 540;
pub const CELL_PX: u32 = BOARD_PX / COLS as u32;

/// Effect timing (in ticks; one tick per rendered frame)
pub const PLACEMENT_TICKS: u32 = 10;
pub const FALL_STAGGER_TICKS: u32 = 10;
pub const FALL_SPEED_PX: u32 = 2;
pub const CLEAR_TICKS: u32 = ROWS as u32 * FALL_STAGGER_TICKS + BOARD_PX / FALL_SPEED_PX;

/// Delay between tray exhaustion and the game-over signal,
/// so the final placement's animation stays visible
pub const GAME_OVER_DELAY_TICKS: u32 = 30;

/// Points awarded per completed region. A cell shared by several completed
/// regions scores for each of them.
pub const POINTS_PER_ROW: u32 = COLS as u32;
pub const POINTS_PER_COL: u32 = ROWS as u32;
pub const POINTS_PER_SUBGRID: u32 = (SUBGRID * SUBGRID) as u32;

/// Block shape kinds from the fixed catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Dot,
    DominoRow,
    DominoCol,
    TrominoRow,
    TrominoCol,
    Square,
    Ell,
    Tee,
    Plus,
}

impl ShapeKind {
    /// Stable u8 code for snapshot grids (1-based; 0 means empty)
    pub fn code(&self) -> u8 {
        match self {
            ShapeKind::Dot => 1,
            ShapeKind::DominoRow => 2,
            ShapeKind::DominoCol => 3,
            ShapeKind::TrominoRow => 4,
            ShapeKind::TrominoCol => 5,
            ShapeKind::Square => 6,
            ShapeKind::Ell => 7,
            ShapeKind::Tee => 8,
            ShapeKind::Plus => 9,
        }
    }
}

/// Session lifecycle states
///
/// Playing is initial. GameOverPending holds for a fixed tick delay so the
/// final placement's animation is visible, then GameOver is terminal until an
/// explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    Playing,
    GameOverPending,
    GameOver,
}

/// Cell on the board (None = empty, Some = filled, remembering which shape)
pub type Cell = Option<ShapeKind>;

/// Grid cell position as (x, y)
pub type CellPos = (u8, u8);

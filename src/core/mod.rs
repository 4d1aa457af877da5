//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games (for replay and analysis)
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (GUI, terminal, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 9x9 board with placement legality and row/column/subgrid clearing
//! - [`shapes`]: The block catalog, from single cell to the 5-cell plus
//! - [`tray`]: The three offered slots, with validity-aware regeneration
//! - [`effects`]: FIFO animation sequencer that defers placement commits
//! - [`session`]: Complete session state: drag input, scoring, game over
//! - [`rng`]: Small deterministic generator for shape draws
//! - [`scoring`]: Points for cleared regions
//! - [`snapshot`]: Read-only state export for renderers
//!
//! # Game Rules
//!
//! - **Board**: 9 columns by 9 rows, subdivided into nine 3x3 subgrids
//! - **Tray**: Three shapes offered at a time; a consumed slot refills
//!   immediately, and a drawn shape with no legal placement left is discarded
//!   as a dead slot
//! - **Clearing**: Completing a row, column, or subgrid empties it; each
//!   completed region scores 9 points, and simultaneous completions all count
//! - **Game over**: When no offered shape fits anywhere, a short grace period
//!   runs and then the session ends
//!
//! # Example
//!
//! ```
//! use blockfill::core::Session;
//! use blockfill::types::SessionState;
//!
//! let mut game = Session::new(12345);
//!
//! // Drag the first tray shape onto the board
//! assert!(game.on_drag_start(0, Some((3, 3))));
//! game.on_drag_end(Some((3, 3)));
//!
//! // The placement commits after its 10-tick animation
//! for _ in 0..10 {
//!     game.tick();
//! }
//! assert_eq!(game.state(), SessionState::Playing);
//! assert!(game.tray().get(0).is_some());
//! ```
//!
//! # Timing
//!
//! All timing is expressed in ticks of a fixed-rate frame loop; the core
//! never reads a clock. A placement effect takes 10 ticks before the board
//! mutates, a clear animation runs 360 ticks, and the game-over grace period
//! is 30 ticks. Call [`Session::tick`] once per frame.

pub mod board;
pub mod effects;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod tray;

// Re-export commonly used types for convenience
pub use board::{Board, ClearOutcome};
pub use effects::{cell_origin_px, fall_offset_px, Effect, EffectQueue};
pub use rng::SimpleRng;
pub use session::{DragState, DropOutcome, Session};
pub use shapes::{shape_cells, shape_size, CATALOG};
pub use snapshot::{DragView, SessionSnapshot, TraySlotView};
pub use tray::Tray;

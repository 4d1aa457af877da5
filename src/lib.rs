//! Blockfill - a 9x9 block-placement puzzle core.
//!
//! Drag shapes from a three-slot tray onto the board, clear completed rows,
//! columns, and 3x3 subgrids, and survive until nothing fits. This crate
//! holds the playable core only: deterministic, tick-driven, and free of
//! rendering or input dependencies, exporting read-only snapshots for
//! whatever front end drives it.

pub mod core;
pub mod types;

//! Tray module - the three pending-block slots
//!
//! Generation is validity-aware: a drawn shape with no legal placement
//! anywhere on the current board becomes a dead (empty) slot rather than an
//! offer that can never be played. Usability is recomputed on every query
//! since the board changes between checks.

use crate::core::board::Board;
use crate::core::rng::SimpleRng;
use crate::core::shapes::CATALOG;
use crate::types::{ShapeKind, TRAY_SLOTS};

/// The block tray - 3 slots, each holding at most one pending shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tray {
    slots: [Option<ShapeKind>; TRAY_SLOTS],
}

impl Tray {
    /// Create a tray with all slots empty
    pub fn new() -> Self {
        Self {
            slots: [None; TRAY_SLOTS],
        }
    }

    /// Draw a shape uniformly at random from the catalog into the slot.
    /// If the drawn shape has no valid placement anywhere, the slot is left
    /// empty (dead) instead; there is no re-draw.
    pub fn generate(&mut self, slot: usize, board: &Board, rng: &mut SimpleRng) {
        let kind = CATALOG[rng.next_range(CATALOG.len() as u32) as usize];
        self.slots[slot] = if board.has_valid_placement(kind) {
            Some(kind)
        } else {
            None
        };
    }

    /// Generate a fresh shape for every slot (session start, or when all
    /// slots have been consumed)
    pub fn refill_all(&mut self, board: &Board, rng: &mut SimpleRng) {
        for slot in 0..TRAY_SLOTS {
            self.generate(slot, board, rng);
        }
    }

    /// Remove and return the slot's shape for drag tracking.
    /// Returns None if the slot is already empty.
    pub fn pick_up(&mut self, slot: usize) -> Option<ShapeKind> {
        self.slots[slot].take()
    }

    /// Restore a shape to a slot after a cancelled drag.
    /// The slot is expected to be the one the shape was picked up from (and
    /// therefore empty).
    pub fn put_back(&mut self, slot: usize, kind: ShapeKind) {
        self.slots[slot] = Some(kind);
    }

    /// Get the shape held in a slot, if any
    pub fn get(&self, slot: usize) -> Option<ShapeKind> {
        self.slots[slot]
    }

    /// Check if the slot holds a shape that fits somewhere right now
    pub fn is_usable(&self, slot: usize, board: &Board) -> bool {
        match self.slots[slot] {
            Some(kind) => board.has_valid_placement(kind),
            None => false,
        }
    }

    /// Check if any slot is still usable (the session is not lost)
    pub fn any_usable(&self, board: &Board) -> bool {
        (0..TRAY_SLOTS).any(|slot| self.is_usable(slot, board))
    }

    /// Check if every slot is empty
    pub fn is_all_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    /// Get all slots for tray UI rendering
    pub fn slots(&self) -> &[Option<ShapeKind>; TRAY_SLOTS] {
        &self.slots
    }
}

impl Default for Tray {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{COLS, ROWS};

    fn full_board() -> Board {
        let mut board = Board::new();
        for y in 0..ROWS {
            for x in 0..COLS {
                board.set(x, y, Some(ShapeKind::Dot));
            }
        }
        board
    }

    #[test]
    fn test_generate_fills_slot_on_empty_board() {
        let board = Board::new();
        let mut rng = SimpleRng::new(1);
        let mut tray = Tray::new();

        // Every catalog shape fits on an empty board, so no draw can go dead
        for seed in 1..50u32 {
            let mut rng_seeded = SimpleRng::new(seed);
            tray.generate(0, &board, &mut rng_seeded);
            assert!(tray.get(0).is_some(), "seed {} produced a dead slot", seed);
        }

        tray.generate(1, &board, &mut rng);
        assert!(tray.is_usable(1, &board));
    }

    #[test]
    fn test_generate_dead_slot_on_full_board() {
        let board = full_board();
        let mut rng = SimpleRng::new(1);
        let mut tray = Tray::new();

        tray.generate(0, &board, &mut rng);
        assert_eq!(tray.get(0), None);
        assert!(!tray.is_usable(0, &board));
    }

    #[test]
    fn test_refill_all_usable_or_dead() {
        // One free cell: only the Dot fits, every other draw must go dead
        let mut board = full_board();
        board.set(4, 4, None);

        for seed in 1..100u32 {
            let mut rng = SimpleRng::new(seed);
            let mut tray = Tray::new();
            tray.refill_all(&board, &mut rng);

            for slot in 0..TRAY_SLOTS {
                match tray.get(slot) {
                    Some(kind) => {
                        assert!(
                            board.has_valid_placement(kind),
                            "slot {} holds unplaceable {:?} (seed {})",
                            slot,
                            kind,
                            seed
                        );
                        assert_eq!(kind, ShapeKind::Dot);
                    }
                    None => {}
                }
            }
        }
    }

    #[test]
    fn test_pick_up_and_put_back() {
        let board = Board::new();
        let mut rng = SimpleRng::new(42);
        let mut tray = Tray::new();
        tray.refill_all(&board, &mut rng);

        let kind = tray.pick_up(0).expect("slot 0 should be filled");
        assert_eq!(tray.get(0), None);

        // Picking up again yields nothing
        assert_eq!(tray.pick_up(0), None);

        tray.put_back(0, kind);
        assert_eq!(tray.get(0), Some(kind));
    }

    #[test]
    fn test_is_usable_recomputed_against_board() {
        let mut board = Board::new();
        let mut tray = Tray::new();
        tray.put_back(0, ShapeKind::Square);

        assert!(tray.is_usable(0, &board));
        assert!(tray.any_usable(&board));

        // Same slot, changed board: usability flips
        for y in 0..ROWS {
            for x in 0..COLS {
                board.set(x, y, Some(ShapeKind::Dot));
            }
        }
        assert!(!tray.is_usable(0, &board));
        assert!(!tray.any_usable(&board));
    }

    #[test]
    fn test_is_all_empty() {
        let board = Board::new();
        let mut rng = SimpleRng::new(3);
        let mut tray = Tray::new();
        assert!(tray.is_all_empty());

        tray.refill_all(&board, &mut rng);
        assert!(!tray.is_all_empty());

        for slot in 0..TRAY_SLOTS {
            tray.pick_up(slot);
        }
        assert!(tray.is_all_empty());
    }
}

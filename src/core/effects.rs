//! Effects module - the animation sequencer
//!
//! A single-lane FIFO of plain-data effects. Only the head entry advances,
//! one tick per rendered frame; completion side effects (board mutation, tray
//! refill, game-over re-check) run in the session, inside the tick that
//! crosses the threshold. Durations are defined purely in tick counts; no
//! wall clock is consulted.

use std::collections::VecDeque;

use arrayvec::ArrayVec;

use crate::types::{
    CellPos, ShapeKind, BOARD_CELLS, CELL_PX, CLEAR_TICKS, FALL_SPEED_PX, FALL_STAGGER_TICKS,
    PLACEMENT_TICKS, ROWS,
};

/// Cleared-cell snapshot captured for a clear animation
pub type ClearedCells = ArrayVec<CellPos, BOARD_CELLS>;

/// A queued, timed visual transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// A shape dropped at a legal origin. Shown as a translucent preview at
    /// its drop location until the board mutation commits on completion.
    Placement {
        shape: ShapeKind,
        x: u8,
        y: u8,
        slot: usize,
        elapsed: u32,
    },
    /// Cleared cells falling out of the grid. The board was already reset
    /// when this was enqueued; the animation plays on the captured snapshot.
    Clear { cells: ClearedCells, elapsed: u32 },
}

impl Effect {
    /// Create a placement effect at tick zero
    pub fn placement(shape: ShapeKind, x: u8, y: u8, slot: usize) -> Self {
        Effect::Placement {
            shape,
            x,
            y,
            slot,
            elapsed: 0,
        }
    }

    /// Create a clear effect at tick zero
    pub fn clear(cells: ClearedCells) -> Self {
        Effect::Clear { cells, elapsed: 0 }
    }

    /// Ticks this effect has been the active head
    pub fn elapsed(&self) -> u32 {
        match self {
            Effect::Placement { elapsed, .. } => *elapsed,
            Effect::Clear { elapsed, .. } => *elapsed,
        }
    }

    /// Total duration in ticks
    pub fn duration(&self) -> u32 {
        match self {
            Effect::Placement { .. } => PLACEMENT_TICKS,
            Effect::Clear { .. } => CLEAR_TICKS,
        }
    }

    /// Completion fraction in [0, 1] for animation rendering
    pub fn progress(&self) -> f32 {
        (self.elapsed() as f32 / self.duration() as f32).min(1.0)
    }

    fn is_done(&self) -> bool {
        self.elapsed() >= self.duration()
    }

    fn advance(&mut self) {
        match self {
            Effect::Placement { elapsed, .. } => *elapsed += 1,
            Effect::Clear { elapsed, .. } => *elapsed += 1,
        }
    }
}

/// Pixel offset of a falling cleared cell at the given elapsed tick.
///
/// Cells lower in the grid start falling sooner: each cell waits
/// `(ROWS - row) * FALL_STAGGER_TICKS` ticks, then falls `FALL_SPEED_PX` per
/// tick, so clears read as a cascading collapse. The renderer should stop
/// drawing a cell once its offset exceeds `BOARD_PX`.
pub fn fall_offset_px(row: u8, elapsed: u32) -> u32 {
    let start = (ROWS as u32).saturating_sub(row as u32) * FALL_STAGGER_TICKS;
    elapsed.saturating_sub(start) * FALL_SPEED_PX
}

/// Top-left pixel origin of a grid cell. A falling cleared cell is drawn at
/// this origin plus its `fall_offset_px`.
pub fn cell_origin_px((x, y): CellPos) -> (u32, u32) {
    (x as u32 * CELL_PX, y as u32 * CELL_PX)
}

/// The effect queue - strictly ordered, only the head is ever active
#[derive(Debug, Clone, Default)]
pub struct EffectQueue {
    queue: VecDeque<Effect>,
}

impl EffectQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Append an effect; it waits its turn behind everything already queued
    pub fn push(&mut self, effect: Effect) {
        self.queue.push_back(effect);
    }

    /// The currently active effect, if any
    pub fn head(&self) -> Option<&Effect> {
        self.queue.front()
    }

    /// Advance the head by one tick. Returns the effect once it completes
    /// (popped), so the caller can run its completion side effects.
    pub fn advance(&mut self) -> Option<Effect> {
        let head = self.queue.front_mut()?;
        head.advance();
        if head.is_done() {
            self.queue.pop_front()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BOARD_PX;

    #[test]
    fn test_placement_completes_at_threshold() {
        let mut queue = EffectQueue::new();
        queue.push(Effect::placement(ShapeKind::Dot, 0, 0, 0));

        for tick in 1..PLACEMENT_TICKS {
            assert_eq!(queue.advance(), None, "completed early at tick {}", tick);
            assert!(queue.head().is_some());
        }

        let done = queue.advance().expect("placement should complete");
        assert_eq!(done.elapsed(), PLACEMENT_TICKS);
        assert!(queue.head().is_none());
    }

    #[test]
    fn test_clear_duration() {
        let mut cells = ClearedCells::new();
        cells.push((0, 0));
        let mut queue = EffectQueue::new();
        queue.push(Effect::clear(cells));

        let mut ticks = 0u32;
        while queue.advance().is_none() {
            ticks += 1;
            assert!(ticks < 10_000, "clear effect never completed");
        }
        assert_eq!(ticks + 1, CLEAR_TICKS);
    }

    #[test]
    fn test_only_head_advances() {
        let mut queue = EffectQueue::new();
        queue.push(Effect::placement(ShapeKind::Square, 3, 3, 1));
        let mut cells = ClearedCells::new();
        cells.push((3, 3));
        queue.push(Effect::clear(cells));

        // Drain the placement
        let mut popped = None;
        for _ in 0..PLACEMENT_TICKS {
            popped = queue.advance();
        }
        assert!(matches!(popped, Some(Effect::Placement { .. })));

        // The queued clear waited untouched at tick zero
        let head = queue.head().expect("clear should now be head");
        assert_eq!(head.elapsed(), 0);
        assert!(matches!(head, Effect::Clear { .. }));
    }

    #[test]
    fn test_fall_offsets_stagger_by_row() {
        // Bottom row starts falling first
        let bottom_start = FALL_STAGGER_TICKS;
        assert_eq!(fall_offset_px(8, bottom_start), 0);
        assert_eq!(fall_offset_px(8, bottom_start + 1), FALL_SPEED_PX);

        // Top row waits the full stagger
        let top_start = ROWS as u32 * FALL_STAGGER_TICKS;
        assert_eq!(fall_offset_px(0, top_start - 1), 0);
        assert_eq!(fall_offset_px(0, top_start + 1), FALL_SPEED_PX);

        // By the end of the effect even the slowest cell has left the board
        assert_eq!(fall_offset_px(0, CLEAR_TICKS), BOARD_PX);
    }

    #[test]
    fn test_cell_origins() {
        assert_eq!(cell_origin_px((0, 0)), (0, 0));
        assert_eq!(cell_origin_px((1, 0)), (CELL_PX, 0));
        assert_eq!(cell_origin_px((8, 8)), (8 * CELL_PX, 8 * CELL_PX));
    }

    #[test]
    fn test_progress_clamped() {
        let mut effect = Effect::placement(ShapeKind::Plus, 0, 0, 2);
        assert_eq!(effect.progress(), 0.0);

        for _ in 0..PLACEMENT_TICKS * 2 {
            effect.advance();
        }
        assert_eq!(effect.progress(), 1.0);
    }
}

//! Session module - manages the complete game state
//!
//! This module ties together all core components: board, tray, RNG, effects,
//! and scoring. It handles drag input, placement commits, clear detection,
//! and the game-over countdown. All timing is tick-driven; nothing in here
//! reads a clock.

use crate::core::board::Board;
use crate::core::effects::{Effect, EffectQueue};
use crate::core::rng::SimpleRng;
use crate::core::snapshot::{DragView, SessionSnapshot, TraySlotView};
use crate::core::tray::Tray;
use crate::types::{CellPos, SessionState, ShapeKind, GAME_OVER_DELAY_TICKS, TRAY_SLOTS};

/// A drag in progress: the shape lifted out of its tray slot and the grid
/// cell currently under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub slot: usize,
    pub shape: ShapeKind,
    /// None while the pointer is off the board
    pub target: Option<CellPos>,
}

/// Outcome of releasing a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Legal target: a placement effect was enqueued. The board commits when
    /// the effect completes, not now.
    Queued,
    /// No legal target: the shape went back to its tray slot
    Returned,
    /// No drag was in progress
    Ignored,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    tray: Tray,
    effects: EffectQueue,
    rng: SimpleRng,
    score: u32,
    state: SessionState,
    /// Remaining ticks of the game-over grace period (meaningful only in
    /// `GameOverPending`)
    game_over_ticks: u32,
    drag: Option<DragState>,
    /// Monotonic episode id (increments on restart).
    episode: u32,
}

impl Session {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let board = Board::new();
        let mut rng = SimpleRng::new(seed);
        let mut tray = Tray::new();
        tray.refill_all(&board, &mut rng);

        Self {
            board,
            tray,
            effects: EffectQueue::new(),
            rng,
            score: 0,
            state: SessionState::Playing,
            game_over_ticks: 0,
            drag: None,
            episode: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tray(&self) -> &Tray {
        &self.tray
    }

    /// The drag in progress, if any
    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// The effect currently animating, if any
    pub fn head_effect(&self) -> Option<&Effect> {
        self.effects.head()
    }

    /// Whether the current drag target is a legal placement. False with no
    /// drag active or with the pointer off the board.
    pub fn drag_target_legal(&self) -> bool {
        match self.drag {
            Some(DragState {
                shape,
                target: Some((x, y)),
                ..
            }) => self.board.can_place(shape, x, y),
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub fn tray_mut(&mut self) -> &mut Tray {
        &mut self.tray
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        self.board.write_u8_grid(&mut out.board);

        for slot in 0..TRAY_SLOTS {
            out.tray[slot] = TraySlotView {
                shape: self.tray.get(slot),
                usable: self.tray.is_usable(slot, &self.board),
            };
        }

        out.score = self.score;
        out.state = self.state;
        out.episode = self.episode;
        out.seed = self.rng.seed();
        out.head_effect = self.effects.head().cloned();
        out.drag = self.drag.map(|d| DragView {
            slot: d.slot,
            shape: d.shape,
            target: d.target,
            legal: self.drag_target_legal(),
        });
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut s = SessionSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Main game tick - step the game-over countdown, then advance the head
    /// of the effect queue. Placement commits happen here, inside the tick
    /// that completes the effect, never inside an input callback.
    pub fn tick(&mut self) {
        if self.state == SessionState::GameOverPending {
            self.game_over_ticks = self.game_over_ticks.saturating_sub(1);
            if self.game_over_ticks == 0 {
                self.state = SessionState::GameOver;
            }
        }

        // Effects keep animating in every state, including the countdown.
        if let Some(effect) = self.effects.advance() {
            match effect {
                Effect::Placement {
                    shape, x, y, slot, ..
                } => self.complete_placement(shape, x, y, slot),
                Effect::Clear { .. } => {}
            }
        }
    }

    /// Side effects of a finished placement effect: stamp the shape, scan for
    /// completed regions, score them, and regenerate the consumed slot.
    fn complete_placement(&mut self, shape: ShapeKind, x: u8, y: u8, slot: usize) {
        self.board.place(shape, x, y);

        let outcome = self.board.check_and_clear();
        self.score += outcome.score_delta();
        if !outcome.is_empty() {
            self.effects.push(Effect::clear(outcome.cells));
        }

        self.tray.generate(slot, &self.board, &mut self.rng);
        if self.drag.is_none() && self.tray.is_all_empty() {
            self.tray.refill_all(&self.board, &mut self.rng);
        }

        self.evaluate_game_over();
    }

    /// Re-check the terminal condition: no slot holds a shape with a legal
    /// placement left. Skipped while a drag is active, since the held shape
    /// is still in play and both release paths re-evaluate.
    ///
    /// Once the countdown starts it runs to completion, even if a queued
    /// placement frees up space before it expires.
    fn evaluate_game_over(&mut self) {
        if self.state != SessionState::Playing || self.drag.is_some() {
            return;
        }
        if !self.tray.any_usable(&self.board) {
            self.state = SessionState::GameOverPending;
            self.game_over_ticks = GAME_OVER_DELAY_TICKS;
        }
    }

    /// Begin dragging the shape in a tray slot. Returns false (and changes
    /// nothing) outside `Playing`, while another drag is active, or for an
    /// empty slot.
    pub fn on_drag_start(&mut self, slot: usize, target: Option<CellPos>) -> bool {
        if self.state != SessionState::Playing || self.drag.is_some() || slot >= TRAY_SLOTS {
            return false;
        }
        let Some(shape) = self.tray.pick_up(slot) else {
            return false;
        };
        self.drag = Some(DragState {
            slot,
            shape,
            target,
        });
        true
    }

    /// Update the grid cell under the pointer (None while off the board)
    pub fn on_drag_move(&mut self, target: Option<CellPos>) {
        if let Some(drag) = &mut self.drag {
            drag.target = target;
        }
    }

    /// Release the drag. A legal target enqueues a placement effect and
    /// reports `Queued`; anything else returns the shape to its slot
    /// synchronously.
    pub fn on_drag_end(&mut self, target: Option<CellPos>) -> DropOutcome {
        let Some(drag) = self.drag.take() else {
            return DropOutcome::Ignored;
        };

        if let Some((x, y)) = target {
            if self.board.can_place(drag.shape, x, y) {
                self.effects
                    .push(Effect::placement(drag.shape, x, y, drag.slot));
                return DropOutcome::Queued;
            }
        }

        self.tray.put_back(drag.slot, drag.shape);
        self.evaluate_game_over();
        DropOutcome::Returned
    }

    /// Restart with a fresh board and tray. The RNG is re-seeded from its
    /// current state, so consecutive episodes differ but a whole run replays
    /// from the initial seed. Accepted in any state.
    pub fn on_restart_requested(&mut self) {
        let seed = self.rng.seed();
        let next_episode = self.episode.wrapping_add(1);
        *self = Self::new(seed);
        self.episode = next_episode;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}

use crate::core::effects::Effect;
use crate::types::{CellPos, SessionState, ShapeKind, COLS, ROWS, TRAY_SLOTS};

/// One tray slot as a renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TraySlotView {
    pub shape: Option<ShapeKind>,
    /// False for empty slots and for shapes with no legal placement left
    pub usable: bool,
}

/// The drag in progress as a renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DragView {
    pub slot: usize,
    pub shape: ShapeKind,
    pub target: Option<CellPos>,
    /// Whether dropping at `target` would be a legal placement
    pub legal: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub board: [[u8; COLS as usize]; ROWS as usize],
    pub tray: [TraySlotView; TRAY_SLOTS],
    pub score: u32,
    pub state: SessionState,
    pub episode: u32,
    pub seed: u32,
    pub head_effect: Option<Effect>,
    pub drag: Option<DragView>,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.board = [[0u8; COLS as usize]; ROWS as usize];
        self.tray = [TraySlotView {
            shape: None,
            usable: false,
        }; TRAY_SLOTS];
        self.score = 0;
        self.state = SessionState::Playing;
        self.episode = 0;
        self.seed = 0;
        self.head_effect = None;
        self.drag = None;
    }

    pub fn accepts_input(&self) -> bool {
        self.state == SessionState::Playing
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        let mut s = Self {
            board: [[0u8; COLS as usize]; ROWS as usize],
            tray: [TraySlotView {
                shape: None,
                usable: false,
            }; TRAY_SLOTS],
            score: 0,
            state: SessionState::Playing,
            episode: 0,
            seed: 0,
            head_effect: None,
            drag: None,
        };
        s.clear();
        s
    }
}

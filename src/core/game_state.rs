use crate::core::{
    board::{Board, CellIndex, Location},
    cell::Mark,
    error::GameError,
    status::Status,
    win_detector,
};
use log::{debug, trace, warn};
use serde::Serialize;

/// Immutable game value; every transition returns a new state.
///
/// `history[0]` is always the empty board and `current_move` always indexes
/// into `history`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
#[readonly::make]
pub struct GameState {
    pub history: Vec<Board>,
    pub current_move: usize,
    pub order_ascending: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            history: vec![Board::empty()],
            current_move: 0,
            order_ascending: true,
        }
    }

    pub fn with_order(order_ascending: bool) -> Self {
        Self {
            order_ascending,
            ..Self::new()
        }
    }

    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// X moves on even snapshots, so turns alternate starting with X.
    pub fn x_is_next(&self) -> bool {
        self.current_move % 2 == 0
    }

    pub fn next_mark(&self) -> Mark {
        if self.x_is_next() { Mark::X } else { Mark::O }
    }

    pub fn num_moves(&self) -> usize {
        self.history.len() - 1
    }

    pub fn is_at_latest(&self) -> bool {
        self.current_move == self.num_moves()
    }

    /// Plays `cell` for the side to move. An occupied cell or a decided game
    /// leaves the state unchanged. Snapshots after `current_move` are dropped
    /// before the new board is appended.
    pub fn play(&self, cell: CellIndex) -> GameState {
        let board = self.current_board();

        if board.is_occupied(cell) {
            trace!("ignoring move at occupied cell {cell}");
            return self.clone();
        }

        if let Some(win) = win_detector::detect_winner(board) {
            trace!("ignoring move at cell {cell}; {} already won", win.winner);
            return self.clone();
        }

        let mark = self.next_mark();
        let new_board = board.with_mark(cell, mark);
        let mut history = Vec::with_capacity(self.current_move + 2);
        history.extend_from_slice(&self.history[..=self.current_move]);
        history.push(new_board);

        let dropped = self.history.len() - (self.current_move + 1);
        if dropped > 0 {
            debug!("playing from move #{} discards {dropped} later snapshot(s)", self.current_move);
        }

        let current_move = history.len() - 1;
        debug!("{mark} plays cell {cell} as move #{current_move}");

        GameState {
            history,
            current_move,
            order_ascending: self.order_ascending,
        }
    }

    /// Moves the view to snapshot `move_number`; history is untouched.
    pub fn jump_to(&self, move_number: usize) -> Result<GameState, GameError> {
        if move_number >= self.history.len() {
            warn!(
                "rejecting jump to move #{move_number}; history has {} snapshots",
                self.history.len()
            );
            return Err(GameError::MoveOutOfRange {
                requested: move_number,
                history_len: self.history.len(),
            });
        }

        debug!("jumping from move #{} to move #{move_number}", self.current_move);
        Ok(GameState {
            history: self.history.clone(),
            current_move: move_number,
            order_ascending: self.order_ascending,
        })
    }

    pub fn undo_target(&self) -> Option<usize> {
        self.current_move.checked_sub(1)
    }

    pub fn toggle_order(&self) -> GameState {
        let order_ascending = !self.order_ascending;
        debug!(
            "move list order is now {}",
            if order_ascending { "ascending" } else { "descending" }
        );

        GameState {
            history: self.history.clone(),
            current_move: self.current_move,
            order_ascending,
        }
    }

    pub fn status(&self) -> Status {
        Status::of_board(self.current_board(), self.next_mark())
    }

    pub fn move_location(&self, move_number: usize) -> Result<Location, GameError> {
        move_location(&self.history, move_number)
    }

    pub fn order_toggle_label(&self) -> &'static str {
        if self.order_ascending {
            "Set to descending order"
        } else {
            "Set to ascending order"
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn move_location(history: &[Board], move_number: usize) -> Result<Location, GameError> {
    if move_number == 0 {
        return Err(GameError::NoMoveAtStart);
    }

    let (Some(previous), Some(current)) = (history.get(move_number - 1), history.get(move_number))
    else {
        return Err(GameError::MoveOutOfRange {
            requested: move_number,
            history_len: history.len(),
        });
    };

    current
        .newly_marked_since(previous)
        .map(CellIndex::location)
        .ok_or(GameError::NotASingleMove { move_number })
}

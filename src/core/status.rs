use crate::core::{
    board::Board,
    cell::Mark,
    win_detector::{self, WinLine},
};
use serde::Serialize;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Status {
    Winner { mark: Mark, line: WinLine },
    Draw,
    InProgress { next: Mark },
}

impl Status {
    /// Winner is checked before draw, so a full board with a line is a win.
    pub fn of_board(board: &Board, next: Mark) -> Self {
        if let Some(win) = win_detector::detect_winner(board) {
            Status::Winner {
                mark: win.winner,
                line: win.line,
            }
        } else if win_detector::is_draw(board) {
            Status::Draw
        } else {
            Status::InProgress { next }
        }
    }

    pub fn is_over(&self) -> bool {
        !matches!(self, Status::InProgress { .. })
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        match self {
            Status::Winner { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Winner { mark, .. } => write!(f, "Winner: {mark}"),
            Status::Draw => f.write_str("It was a draw"),
            Status::InProgress { next } => write!(f, "Next Player: {next}"),
        }
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("cell {cell} is outside the board (expected 0..=8)")]
    CellOutOfRange { cell: usize },

    #[error("row {row}, column {column} is outside the board (expected 1..=3 each)")]
    LocationOutOfRange { row: usize, column: usize },

    #[error("move #{requested} is out of range (history has {history_len} snapshots)")]
    MoveOutOfRange { requested: usize, history_len: usize },

    #[error("game start has no move location")]
    NoMoveAtStart,

    #[error("move #{move_number} did not mark exactly one new cell")]
    NotASingleMove { move_number: usize },

    #[error("invalid board text '{input}': {reason}")]
    BoardParse { input: String, reason: String },

    #[error("failed to serialize game view: {message}")]
    Serialization { message: String },
}

impl GameError {
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            GameError::CellOutOfRange { .. }
                | GameError::LocationOutOfRange { .. }
                | GameError::MoveOutOfRange { .. }
        )
    }
}

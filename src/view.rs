use crate::core::{
    board::CellIndex,
    cell::Cell,
    error::GameError,
    game_state::GameState,
    move_list::{self, MoveEntry},
    status::Status,
};
use serde::Serialize;
use tsify::Tsify;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct CellView {
    pub index: usize,
    pub value: Cell,
    pub label: String,
    pub is_winning: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub cells: Vec<CellView>,
    #[tsify(
        type = "{ kind: \"winner\"; mark: Mark; line: number[] } | { kind: \"draw\" } | { kind: \"inProgress\"; next: Mark }"
    )]
    pub status: Status,
    pub status_text: String,
    pub current_move: usize,
    pub history_length: usize,
    pub x_is_next: bool,
    pub order_ascending: bool,
    pub order_toggle_label: String,
    pub moves: Vec<MoveEntry>,
}

impl GameView {
    pub fn from_state(state: &GameState) -> Result<Self, GameError> {
        let status = state.status();
        let winning_line = status.winning_line();
        let board = state.current_board();

        let cells = CellIndex::all()
            .map(|index| {
                let value = board.get(index);
                CellView {
                    index: index.get(),
                    value,
                    label: value.label().to_string(),
                    is_winning: winning_line.is_some_and(|line| line.contains(index)),
                }
            })
            .collect::<Vec<_>>();

        Ok(Self {
            cells,
            status,
            status_text: status.to_string(),
            current_move: state.current_move,
            history_length: state.history.len(),
            x_is_next: state.x_is_next(),
            order_ascending: state.order_ascending,
            order_toggle_label: state.order_toggle_label().to_string(),
            moves: move_list::move_entries(state)?,
        })
    }
}

pub fn view_json(state: &GameState) -> Result<String, GameError> {
    let view = GameView::from_state(state)?;
    serde_json::to_string(&view).map_err(|err| GameError::Serialization {
        message: err.to_string(),
    })
}

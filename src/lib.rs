use crate::core::{board::CellIndex, error::GameError, game_state::GameState};
use log::debug;
use wasm_bindgen::prelude::*;

pub mod core;
pub mod view;

pub use view::{CellView, GameView, view_json};

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        let message = err.to_string();
        if err.is_range_error() {
            js_sys::RangeError::new(&message).into()
        } else {
            js_sys::Error::new(&message).into()
        }
    }
}

fn to_cell_index(cell: u32) -> Result<CellIndex, GameError> {
    CellIndex::new(cell as usize)
}

#[wasm_bindgen]
pub struct GameHandle {
    state: GameState,
}

impl GameHandle {
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

#[wasm_bindgen]
impl GameHandle {
    /// Returns whether the click changed the board.
    pub fn play(&mut self, cell: u32) -> Result<bool, JsValue> {
        let cell = to_cell_index(cell)?;
        let next = self.state.play(cell);
        let changed = next != self.state;
        self.state = next;
        Ok(changed)
    }

    #[wasm_bindgen(js_name = "jumpTo")]
    pub fn jump_to(&mut self, move_number: u32) -> Result<(), JsValue> {
        self.state = self.state.jump_to(move_number as usize)?;
        Ok(())
    }

    #[wasm_bindgen(js_name = "toggleOrder")]
    pub fn toggle_order(&mut self) {
        self.state = self.state.toggle_order();
    }

    pub fn reset(&mut self) {
        debug!("resetting game");
        self.state = GameState::with_order(self.state.order_ascending);
    }

    #[wasm_bindgen(js_name = "currentMove")]
    pub fn current_move(&self) -> u32 {
        self.state.current_move as u32
    }

    #[wasm_bindgen(js_name = "historyLength")]
    pub fn history_length(&self) -> u32 {
        self.state.history.len() as u32
    }

    #[wasm_bindgen(js_name = "orderAscending")]
    pub fn order_ascending(&self) -> bool {
        self.state.order_ascending
    }

    #[wasm_bindgen(js_name = "orderToggleLabel")]
    pub fn order_toggle_label(&self) -> String {
        self.state.order_toggle_label().to_string()
    }

    #[wasm_bindgen(js_name = "xIsNext")]
    pub fn x_is_next(&self) -> bool {
        self.state.x_is_next()
    }

    #[wasm_bindgen(js_name = "cellValues")]
    pub fn cell_values(&self) -> Vec<String> {
        self.state
            .current_board()
            .cells()
            .iter()
            .map(|cell| cell.label().to_string())
            .collect()
    }

    #[wasm_bindgen(js_name = "statusText")]
    pub fn status_text(&self) -> String {
        self.state.status().to_string()
    }

    #[wasm_bindgen(js_name = "winningLine")]
    pub fn winning_line(&self) -> Vec<u32> {
        self.state
            .status()
            .winning_line()
            .map(|line| line.indices().iter().map(|&idx| idx as u32).collect())
            .unwrap_or_default()
    }

    /// `[row, column]`, 1-indexed.
    #[wasm_bindgen(js_name = "moveLocation")]
    pub fn move_location(&self, move_number: u32) -> Result<Vec<u32>, JsValue> {
        let location = self.state.move_location(move_number as usize)?;
        Ok(vec![location.row as u32, location.column as u32])
    }

    pub fn view(&self) -> Result<JsValue, JsValue> {
        let view = GameView::from_state(&self.state)?;
        Ok(serde_wasm_bindgen::to_value(&view)?)
    }

    #[wasm_bindgen(js_name = "viewJson")]
    pub fn view_json(&self) -> Result<String, JsValue> {
        Ok(view_json(&self.state)?)
    }
}

#[wasm_bindgen(js_name = "newGame")]
pub fn new_game() -> GameHandle {
    GameHandle {
        state: GameState::new(),
    }
}

#[wasm_bindgen(js_name = "newGameWithOrder")]
pub fn new_game_with_order(order_ascending: bool) -> GameHandle {
    GameHandle {
        state: GameState::with_order(order_ascending),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{cell::Mark, status::Status};

    fn handle_after(cells: &[u32]) -> GameHandle {
        let mut handle = new_game();
        for &cell in cells {
            handle.play(cell).unwrap();
        }
        handle
    }

    #[test]
    fn play_reports_whether_board_changed() {
        let mut handle = new_game();
        assert!(handle.play(4).unwrap());
        assert!(!handle.play(4).unwrap());
        assert_eq!(handle.history_length(), 2);
        assert!(!handle.x_is_next());
    }

    #[test]
    fn winning_line_and_status_text_follow_the_board() {
        let handle = handle_after(&[0, 4, 1, 5, 2]);
        assert_eq!(handle.status_text(), "Winner: X");
        assert_eq!(handle.winning_line(), vec![0, 1, 2]);
        assert_eq!(
            handle.cell_values(),
            vec!["X", "X", "X", "", "O", "O", "", "", ""]
        );
    }

    #[test]
    fn jump_and_toggle_change_view_only() {
        let mut handle = handle_after(&[0, 4, 1]);
        handle.jump_to(1).unwrap();
        handle.toggle_order();
        assert_eq!(handle.current_move(), 1);
        assert_eq!(handle.history_length(), 4);
        assert!(!handle.order_ascending());
        assert_eq!(handle.order_toggle_label(), "Set to ascending order");
        assert!(handle.winning_line().is_empty());
        assert_eq!(handle.move_location(2).unwrap(), vec![2, 2]);
    }

    #[test]
    fn reset_keeps_order_preference() {
        let mut handle = new_game_with_order(false);
        handle.play(0).unwrap();
        handle.reset();
        assert_eq!(handle.history_length(), 1);
        assert!(!handle.order_ascending());
    }

    #[test]
    fn view_marks_winning_cells() {
        let handle = handle_after(&[2, 0, 4, 1, 6]);
        let view = GameView::from_state(handle.state()).unwrap();
        let winning = view
            .cells
            .iter()
            .filter(|cell| cell.is_winning)
            .map(|cell| cell.index)
            .collect::<Vec<_>>();
        assert_eq!(winning, vec![2, 4, 6]);
        assert_eq!(
            view.status,
            Status::Winner {
                mark: Mark::X,
                line: crate::core::win_detector::WINNING_LINES[7],
            }
        );
    }

    #[test]
    fn view_json_snapshot_after_one_move() {
        let handle = handle_after(&[4]);
        let json = view_json(handle.state()).unwrap();
        let expected = concat!(
            "{\"cells\":[",
            "{\"index\":0,\"value\":\"Empty\",\"label\":\"\",\"isWinning\":false},",
            "{\"index\":1,\"value\":\"Empty\",\"label\":\"\",\"isWinning\":false},",
            "{\"index\":2,\"value\":\"Empty\",\"label\":\"\",\"isWinning\":false},",
            "{\"index\":3,\"value\":\"Empty\",\"label\":\"\",\"isWinning\":false},",
            "{\"index\":4,\"value\":\"X\",\"label\":\"X\",\"isWinning\":false},",
            "{\"index\":5,\"value\":\"Empty\",\"label\":\"\",\"isWinning\":false},",
            "{\"index\":6,\"value\":\"Empty\",\"label\":\"\",\"isWinning\":false},",
            "{\"index\":7,\"value\":\"Empty\",\"label\":\"\",\"isWinning\":false},",
            "{\"index\":8,\"value\":\"Empty\",\"label\":\"\",\"isWinning\":false}],",
            "\"status\":{\"kind\":\"inProgress\",\"next\":\"O\"},",
            "\"statusText\":\"Next Player: O\",",
            "\"currentMove\":1,",
            "\"historyLength\":2,",
            "\"xIsNext\":false,",
            "\"orderAscending\":true,",
            "\"orderToggleLabel\":\"Set to descending order\",",
            "\"moves\":[",
            "{\"moveNumber\":0,\"row\":null,\"column\":null,\"description\":\"Go to game Start\",\"selectable\":true},",
            "{\"moveNumber\":1,\"row\":2,\"column\":2,\"description\":\"You are at move #1 (row: 2, col: 2)\",\"selectable\":false}",
            "]}"
        );
        assert_eq!(json, expected);
    }
}

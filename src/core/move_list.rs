use crate::core::{board::Location, error::GameError, game_state::GameState};
use serde::Serialize;
use tsify::Tsify;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Tsify)]
#[serde(rename_all = "camelCase")]
pub struct MoveEntry {
    pub move_number: usize,
    pub row: Option<usize>,
    pub column: Option<usize>,
    pub description: String,
    /// The latest snapshot renders as plain text instead of a jump button.
    pub selectable: bool,
}

impl MoveEntry {
    fn start() -> Self {
        Self {
            move_number: 0,
            row: None,
            column: None,
            description: "Go to game Start".to_string(),
            selectable: true,
        }
    }

    fn at(move_number: usize, location: Location, is_latest: bool) -> Self {
        let description = if is_latest {
            format!("You are at move #{move_number} ({location})")
        } else {
            format!("Go to move #{move_number} ({location})")
        };

        Self {
            move_number,
            row: Some(location.row),
            column: Some(location.column),
            description,
            selectable: !is_latest,
        }
    }
}

pub fn move_entries(state: &GameState) -> Result<Vec<MoveEntry>, GameError> {
    let latest = state.num_moves();
    let mut entries = (0..=latest)
        .map(|move_number| {
            if move_number == 0 {
                Ok(MoveEntry::start())
            } else {
                let location = state.move_location(move_number)?;
                Ok(MoveEntry::at(move_number, location, move_number == latest))
            }
        })
        .collect::<Result<Vec<_>, GameError>>()?;

    if !state.order_ascending {
        entries.reverse();
    }

    Ok(entries)
}

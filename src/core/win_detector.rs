use crate::core::{
    board::{Board, CellIndex},
    cell::Mark,
};
use serde::Serialize;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct WinLine(pub [CellIndex; 3]);

impl WinLine {
    const fn of(a: usize, b: usize, c: usize) -> Self {
        WinLine([
            CellIndex::from_const(a),
            CellIndex::from_const(b),
            CellIndex::from_const(c),
        ])
    }

    pub fn contains(&self, index: CellIndex) -> bool {
        self.0.contains(&index)
    }

    pub fn indices(&self) -> [usize; 3] {
        self.0.map(CellIndex::get)
    }
}

impl fmt::Display for WinLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{a},{b},{c}]")
    }
}

/// Rows, then columns, then diagonals; the first match wins.
pub const WINNING_LINES: [WinLine; 8] = [
    WinLine::of(0, 1, 2),
    WinLine::of(3, 4, 5),
    WinLine::of(6, 7, 8),
    WinLine::of(0, 3, 6),
    WinLine::of(1, 4, 7),
    WinLine::of(2, 5, 8),
    WinLine::of(0, 4, 8),
    WinLine::of(2, 4, 6),
];

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Win {
    pub winner: Mark,
    pub line: WinLine,
}

pub fn detect_winner(board: &Board) -> Option<Win> {
    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = line.0;
        let winner = board.get(a).mark()?;
        (board.get(a) == board.get(b) && board.get(a) == board.get(c)).then_some(Win {
            winner,
            line: *line,
        })
    })
}

/// A full board that also completes a line counts as a win, not a draw.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && detect_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cell::Cell;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn empty_board_has_no_winner() {
        assert_eq!(detect_winner(&Board::empty()), None);
        assert!(!is_draw(&Board::empty()));
    }

    #[test]
    fn incomplete_lines_do_not_win() {
        assert_eq!(detect_winner(&board("XX. OO. ...")), None);
        assert_eq!(detect_winner(&board("XOX OXO ...")), None);
    }

    #[test]
    fn every_line_wins_for_either_mark() {
        for line in WINNING_LINES {
            for mark in [Mark::X, Mark::O] {
                let mut cells = [Cell::Empty; 9];
                for index in line.0 {
                    cells[index.get()] = mark.into();
                }
                // one opposing mark off the line so the board is not trivially uniform
                if let Some(spare) = (0..9).find(|idx| !line.indices().contains(idx)) {
                    cells[spare] = match mark {
                        Mark::X => Cell::O,
                        Mark::O => Cell::X,
                    };
                }

                let win = detect_winner(&Board::from_cells(cells));
                assert_eq!(win, Some(Win { winner: mark, line }), "line {line}");
            }
        }
    }

    #[test]
    fn first_line_in_table_order_is_reported() {
        // X completes both the top row and the left column
        let win = detect_winner(&board("XXX XOO XOO")).unwrap();
        assert_eq!(win.winner, Mark::X);
        assert_eq!(win.line.indices(), [0, 1, 2]);
    }

    #[test]
    fn full_board_without_line_is_draw() {
        // X: 0,1,5,6,8  O: 2,3,4,7
        let full = board("XXO OOX XOX");
        assert_eq!(detect_winner(&full), None);
        assert!(is_draw(&full));
    }

    #[test]
    fn full_board_with_line_is_not_draw() {
        let full = board("XXX OOX OXO");
        assert!(detect_winner(&full).is_some());
        assert!(!is_draw(&full));
    }

    #[test]
    fn non_full_board_is_never_draw() {
        assert!(!is_draw(&board("XXO OOX XO.")));
    }

    #[test]
    fn win_line_contains_its_cells() {
        let diagonal = WINNING_LINES[7];
        assert!(diagonal.contains(CellIndex::new(4).unwrap()));
        assert!(!diagonal.contains(CellIndex::new(0).unwrap()));
        assert_eq!(diagonal.to_string(), "[2,4,6]");
    }
}

use crate::config::CliArgs;
use crossterm::style::Stylize;
use itertools::Itertools;
use std::io::{self, Write};
use tic_tac_toe_rust::core::{
    board::{BOARD_SIDE, CellIndex},
    error::GameError,
    game_state::GameState,
    move_list,
    status::Status,
};
use tic_tac_toe_rust::view_json;

pub struct Session {
    game: GameState,
    order_ascending_at_start: bool,
    use_color: bool,
    should_quit: bool,
}

impl Session {
    pub fn new(args: &CliArgs) -> Self {
        Self {
            game: GameState::with_order(!args.descending),
            order_ascending_at_start: !args.descending,
            use_color: !args.no_color,
            should_quit: false,
        }
    }

    pub fn start(&mut self, script: Option<&str>) {
        self.print_game();
        if let Some(script) = script {
            self.interpret_line(script);
        }
        if !self.should_quit {
            self.interpretation_loop();
        }
    }

    fn interpretation_loop(&mut self) {
        let stdin = io::stdin();

        loop {
            print!("{}", self.user_prompt_text());
            let _ = io::stdout().flush();

            let mut line = String::new();
            match stdin.read_line(&mut line) {
                Ok(0) => return,
                Ok(_) => {
                    self.interpret_line(line.trim_end_matches(['\r', '\n']));
                    if self.should_quit {
                        return;
                    }
                }
                Err(err) => {
                    log::warn!("stdin read failed: {err}");
                    return;
                }
            }
        }
    }

    fn interpret_line(&mut self, line: &str) {
        for directive in line.split(';') {
            self.interpret_directive(directive);
            if self.should_quit {
                return;
            }
        }
    }

    fn interpret_directive(&mut self, directive: &str) {
        const TAG_QUIT: &str = "q";
        const TAG_DISPLAY: &str = "d";
        const TAG_RESET: &str = "r";
        const TAG_REPEAT: &str = "x";
        const TAG_HISTORY: &str = "h";
        const TAG_UNDO: &str = "u";
        const TAG_JUMP: &str = "j";
        const TAG_ORDER: &str = "o";
        const TAG_VIEW: &str = "v";

        let tokens = directive.split_whitespace().collect::<Vec<_>>();
        let Some(first) = tokens.first() else {
            return;
        };
        let directive_tag = first.to_lowercase();

        if directive_tag == TAG_QUIT {
            self.should_quit = true;
        } else if directive_tag == TAG_DISPLAY {
            self.print_game();
        } else if directive_tag == TAG_RESET {
            println!("(RESET)");
            self.game = GameState::with_order(self.order_ascending_at_start);
            self.print_game();
        } else if directive_tag == TAG_UNDO {
            match self.game.undo_target() {
                Some(target) => {
                    println!("(UNDO)");
                    self.jump(target);
                }
                None => println!("  already at game start"),
            }
        } else if directive_tag == TAG_JUMP {
            match tokens.get(1).map(|token| token.parse::<usize>()) {
                Some(Ok(move_number)) => self.jump(move_number),
                _ => println!("  directive {directive_tag} needs a move number"),
            }
        } else if directive_tag == TAG_ORDER {
            self.game = self.game.toggle_order();
            self.print_moves();
        } else if directive_tag == TAG_HISTORY {
            self.print_moves();
        } else if directive_tag == TAG_VIEW {
            match view_json(&self.game) {
                Ok(json) => println!("{json}"),
                Err(err) => println!("  {err}"),
            }
        } else if directive_tag == TAG_REPEAT {
            match tokens.get(1).map(|token| token.parse::<usize>()) {
                Some(Ok(num_repeats)) => {
                    let directive_text = tokens.iter().skip(2).join(" ");
                    println!("(REPEAT {num_repeats}: {directive_text})");
                    for _ in 0..num_repeats {
                        self.interpret_directive(&directive_text);
                    }
                }
                _ => println!(
                    "  directive {directive_tag} needs repetition count and directive to repeat"
                ),
            }
        } else if directive_tag
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_digit())
        {
            match parse_cell_token(first) {
                Ok(cell) => self.play(cell),
                Err(message) => println!("  {message}"),
            }
        } else {
            let mut explanations = vec![
                "d       | display board and status",
                "h       | display move list",
                "j [int] | jump to move",
                "o       | toggle move list order",
                "q       | quit",
                "r       | reset game",
                "u       | step back one move",
                "v       | print view json",
                "x [n] [cmd] | repeat [cmd] n times",
                "[cell] or [row],[col] | play cell 0..8 or 1-indexed row,col",
            ];
            explanations.sort();
            println!("  unrecognized directive '{}'", directive.trim());
            for explanation in explanations {
                println!("  {explanation}");
            }
        }
    }

    fn play(&mut self, cell: CellIndex) {
        let next = self.game.play(cell);
        if next == self.game {
            let status = self.game.status();
            if status.is_over() {
                println!("  {status}.  Moves not accepted.");
            } else {
                println!("  cell {cell} is taken");
            }
            return;
        }

        self.game = next;
        self.print_game();
    }

    fn jump(&mut self, move_number: usize) {
        match self.game.jump_to(move_number) {
            Ok(game) => {
                self.game = game;
                self.print_game();
            }
            Err(err) => println!("  {err}"),
        }
    }

    fn print_game(&self) {
        println!("{}", board_text(&self.game, self.use_color));
        println!("  {}", self.game.status());
        if let Some(note) = rewind_note(&self.game) {
            println!("  {note}");
        }
    }

    fn print_moves(&self) {
        match move_list_text(&self.game) {
            Ok(text) => println!("{text}"),
            Err(err) => println!("  {err}"),
        }
    }

    fn user_prompt_text(&self) -> String {
        match self.game.status() {
            Status::Winner { mark, .. } => format!("{mark} WON> "),
            Status::Draw => "DRAW> ".to_string(),
            Status::InProgress { next } => format!("{next}> "),
        }
    }
}

/// Accepts a cell index `0..=8` or a 1-indexed `row,col` pair.
fn parse_cell_token(token: &str) -> Result<CellIndex, String> {
    let subtokens = token.split(',').collect::<Vec<_>>();
    let parse = |text: &str| {
        text.trim()
            .parse::<usize>()
            .map_err(|_| format!("failed parse for cell from '{token}'"))
    };

    let cell = match subtokens.as_slice() {
        [index] => CellIndex::new(parse(*index)?),
        [row, column] => CellIndex::from_location(parse(*row)?, parse(*column)?),
        _ => return Err(format!("failed parse for cell from '{token}'")),
    };

    cell.map_err(|err| err.to_string())
}

fn board_text(game: &GameState, use_color: bool) -> String {
    let winning_line = game.status().winning_line();
    let board = game.current_board();

    let indices = CellIndex::all().collect::<Vec<_>>();

    indices
        .chunks(BOARD_SIDE)
        .map(|row| {
            row.iter()
                .map(|&index| {
                    let symbol = board.get(index).symbol();
                    let is_winning = winning_line.is_some_and(|line| line.contains(index));
                    if use_color && is_winning {
                        symbol.black().on_cyan().to_string()
                    } else {
                        symbol.to_string()
                    }
                })
                .join(" ")
        })
        .map(|row| format!("  {row}"))
        .join("\n")
}

fn rewind_note(game: &GameState) -> Option<String> {
    (!game.is_at_latest())
        .then(|| format!("(viewing move #{} of {})", game.current_move, game.num_moves()))
}

fn move_list_text(game: &GameState) -> Result<String, GameError> {
    let text = move_list::move_entries(game)?
        .into_iter()
        .map(|entry| {
            let marker = if entry.move_number == game.current_move { "*" } else { " " };
            format!("{marker} {:>2}. {}", entry.move_number, entry.description)
        })
        .join("\n");

    Ok(format!("  ({})\n{text}", game.order_toggle_label()))
}

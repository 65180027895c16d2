pub mod board;
pub mod cell;
pub mod error;
pub mod game_state;
pub mod move_list;
pub mod status;
pub mod win_detector;

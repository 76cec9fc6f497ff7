//! Core Connect Four game logic: board grid, players, win detection and the
//! per-game turn/outcome state.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, DEFAULT_COLS, DEFAULT_ROWS, MAX_CELLS};
pub use player::Player;
pub use state::{Game, GameOutcome, MoveResult};
pub use win::{has_win, winning_line};

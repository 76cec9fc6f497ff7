use tracing::{debug, info};

use super::win::{self, Line};
use super::{Board, Cell, Player};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// Game continues; the next player is up.
    InProgress,
    Win(Player),
    Tie,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

/// What happened on a successful drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub row: usize,
    pub column: usize,
    pub player: Player,
    pub outcome: GameOutcome,
}

/// One game session: the board, whose turn it is, and how it ended.
///
/// Each `Game` is independent; start a new game by constructing a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
}

impl Game {
    /// Create a game on an empty `height × width` board. Player 1 starts.
    pub fn new(height: usize, width: usize) -> Result<Self, GameError> {
        let board = Board::new(height, width)?;
        info!(height, width, "new game");
        Ok(Game {
            board,
            current_player: Player::One,
            outcome: GameOutcome::InProgress,
        })
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Hand the turn to the other player
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.other();
        debug!(player = %self.current_player, "turn");
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Cell contents, bounds-checked
    pub fn cell(&self, row: usize, column: usize) -> Result<Cell, GameError> {
        self.board
            .get(row, column)
            .ok_or(GameError::CellOutOfRange { row, column })
    }

    /// The four cells that won the game, if it was won
    pub fn winning_line(&self) -> Option<Line> {
        match self.outcome {
            GameOutcome::Win(player) => win::winning_line(&self.board, player),
            _ => None,
        }
    }

    /// Drop a piece for the current player into `column`.
    ///
    /// On error the game is left unchanged. The turn only passes when the
    /// game continues, so after a win `current_player` is the winner.
    pub fn drop_piece(&mut self, column: usize) -> Result<MoveResult, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.landing_row(column)?;
        self.board.place(row, column, player);
        debug!(row, column, %player, "piece placed");

        // A win on the last empty cell is a win, not a tie
        self.outcome = if win::has_win(&self.board, player) {
            GameOutcome::Win(player)
        } else if self.board.is_full() {
            GameOutcome::Tie
        } else {
            GameOutcome::InProgress
        };

        match self.outcome {
            GameOutcome::InProgress => self.advance_turn(),
            GameOutcome::Win(winner) => info!(%winner, "game won"),
            GameOutcome::Tie => info!("game tied"),
        }

        Ok(MoveResult {
            row,
            column,
            player,
            outcome: self.outcome,
        })
    }
}

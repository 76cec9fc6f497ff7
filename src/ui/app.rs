use crate::config::BoardConfig;
use crate::error::GameError;
use crate::game::{Game, GameOutcome};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Interactive session. Owns its `Game` for as long as it runs; a restart
/// replaces it with a fresh one of the same size.
pub struct App {
    board_config: BoardConfig,
    game: Game,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(board_config: BoardConfig) -> Result<Self, GameError> {
        let game = board_config.new_game()?;
        Ok(App {
            selected_column: board_config.width / 2, // Start in middle
            board_config,
            game,
            should_quit: false,
            message: None,
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                let open = self.game.board().open_columns();
                if let Some(&col) = open.iter().rev().find(|&&col| col < self.selected_column) {
                    self.selected_column = col;
                }
            }
            KeyCode::Right => {
                let open = self.game.board().open_columns();
                if let Some(&col) = open.iter().find(|&&col| col > self.selected_column) {
                    self.selected_column = col;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < self.game.board().width() {
                    self.selected_column = column;
                    self.drop_piece();
                } else {
                    self.message = Some(format!("There is no column {c}"));
                }
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        match self.board_config.new_game() {
            Ok(game) => {
                self.game = game;
                self.selected_column = self.board_config.width / 2;
                self.message = Some("New game started!".to_string());
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.game.drop_piece(self.selected_column) {
            Ok(result) => {
                self.message = match result.outcome {
                    GameOutcome::InProgress => None,
                    GameOutcome::Win(player) => Some(format!("{player} won!")),
                    GameOutcome::Tie => Some("Tie!".to_string()),
                };
            }
            Err(GameError::ColumnFull { column }) => {
                self.message = Some(format!("Column {} is full!", column + 1));
            }
            Err(GameError::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_column, &self.message);
    }
}

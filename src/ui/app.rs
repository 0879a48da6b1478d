use crate::config::AppConfig;
use crate::error::ConfigError;
use crate::game::{GameEngine, MoveResult, Outcome, RejectReason};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// Interactive game frontend. Owns the engine and reacts only to the
/// results it returns; all rules live behind [`GameEngine`].
pub struct App {
    engine: GameEngine,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, ConfigError> {
        let engine = GameEngine::new(config.board)?;
        Ok(App {
            // Start with the middle column selected
            selected_column: config.board.width / 2,
            engine,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn width(&self) -> usize {
        self.engine.inspect().board().width()
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
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
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = self.width() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.engine.play(self.selected_column) {
            MoveResult::Placed { player, outcome, .. } => match outcome {
                Outcome::Win => {
                    self.message = Some(format!("{} wins!", player.name()));
                }
                Outcome::Tie => {
                    self.message = Some("It's a tie!".to_string());
                }
                Outcome::Continue { .. } => {}
            },
            MoveResult::Rejected(RejectReason::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            MoveResult::Rejected(RejectReason::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            MoveResult::Rejected(RejectReason::GameOver) => {
                self.message = Some("Game over! Press 'r' to restart.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            self.engine.inspect(),
            self.selected_column,
            &self.message,
        );
    }
}

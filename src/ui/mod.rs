//! Terminal front end: an interactive ratatui view for two players at one
//! keyboard, and a headless mode that plays a column script.

mod app;
pub mod board_widget;
mod game_view;
pub mod headless;

pub use app::App;
pub use game_view::status_text;

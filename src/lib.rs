//! # Connect Four
//!
//! A two-player Connect Four game: a gravity board of configurable size,
//! alternating turns, and win/tie detection, with a terminal front end built
//! on Ratatui.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, win detection, game state
//! - [`ui`] — Terminal UI and headless script player
//! - [`config`] — TOML configuration loading and validation
//! - [`logging`] — `tracing` subscriber setup
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;

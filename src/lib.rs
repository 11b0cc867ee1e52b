//! Grid Snake - the classic snake game on a wrap-around grid
//!
//! This library provides:
//! - Core game logic with no I/O (game module)
//! - Key mapping for crossterm events (input module)
//! - TUI rendering with ratatui (render module)
//! - In-memory session statistics (metrics module)
//! - The interactive terminal loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

//! Grid Snake - a terminal Snake game
//!
//! This library provides:
//! - Core game logic, headless and timer-agnostic (game module)
//! - Keyboard, mouse and colour prompt handling (input module)
//! - TUI rendering with ratatui (render module)
//! - Play-time counters (metrics module)
//! - The interactive loop tying them together (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;

//! Snake on a 30x30 wraparound grid with a timed 2x2 bonus food
//!
//! This library provides:
//! - Core game logic as a tick-driven state machine (game module)
//! - Key-event handling (input module)
//! - TUI rendering over read-only snapshots (render module)
//! - The async driver that wires them together (app module)

pub mod app;
pub mod game;
pub mod input;
pub mod render;

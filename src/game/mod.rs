//! Core game logic for toroidal snake
//!
//! Everything in here is synchronous and free of I/O; the driver owns timing
//! and the renderer reads snapshots. The grid is a fixed 30x30 torus.

pub mod config;
pub mod direction;
pub mod engine;
pub mod state;

/// Side length of the square grid
pub const GRID_SIZE: i32 = 30;

// Re-export commonly used types
pub use config::{GameConfig, MAX_SPEED, MIN_SPEED};
pub use direction::Direction;
pub use engine::{FoodKind, GameEngine, TickOutcome};
pub use state::{Cell, Phase, Snake, Snapshot, SpecialFood, SpecialFoodView};

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Slowest speed setting
pub const MIN_SPEED: u8 = 1;
/// Fastest speed setting
pub const MAX_SPEED: u8 = 20;

/// Configuration for the game
///
/// The grid is a fixed 30x30 torus; the only tunable is the speed setting,
/// which the driver turns into a tick interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Game speed, 1 (slow) to 20 (fast)
    pub speed: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { speed: 10 }
    }
}

impl GameConfig {
    /// Create a configuration with the given speed, clamped to the valid range
    pub fn new(speed: u8) -> Self {
        Self {
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
        }
    }

    /// Time between game ticks: 220ms minus 10ms per speed step,
    /// so speed 1 ticks every 210ms and speed 20 every 20ms
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(220 - u64::from(self.speed) * 10)
    }
}

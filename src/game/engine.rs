use super::{
    GRID_SIZE,
    config::GameConfig,
    direction::Direction,
    state::{Cell, Phase, Snake, Snapshot, SpecialFood, SpecialFoodView},
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Points for eating an ordinary food
const ORDINARY_FOOD_POINTS: u32 = 10;
/// Points for eating a special food
const SPECIAL_FOOD_POINTS: u32 = 100;
/// Every Nth ordinary food eaten spawns a special food
const SPECIAL_FOOD_CADENCE: u32 = 5;
/// Random placement attempts before falling back to a grid scan
const SPAWN_ATTEMPTS: usize = 1024;

/// Kind of food eaten during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    Ordinary,
    Special,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Whether the snake moved this tick
    pub advanced: bool,
    /// Food eaten this tick, if any
    pub ate: Option<FoodKind>,
    /// Whether this tick transitioned the game to GameOver
    pub just_ended: bool,
}

/// The game state machine
///
/// Owns the snake, food, score and phase, and advances exactly one step per
/// `tick()` call. Timing lives in the driver; the engine is synchronous and
/// single-threaded. The engine outlives individual games: `start()` begins a
/// fresh session while `high_score` persists for the life of the process.
pub struct GameEngine {
    config: GameConfig,
    rng: SmallRng,
    phase: Phase,
    snake: Snake,
    heading: Option<Direction>,
    food: Cell,
    special: Option<SpecialFood>,
    score: u32,
    high_score: u32,
    food_eaten: u32,
}

impl GameEngine {
    /// Create an engine in the Menu phase
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, SmallRng::from_entropy())
    }

    /// Create an engine with a specific RNG, for deterministic runs
    pub fn with_rng(config: GameConfig, mut rng: SmallRng) -> Self {
        let snake = Snake::new(Cell::center());
        let food = random_free_cell(&mut rng, &snake).unwrap_or(Cell::new(0, 0));

        Self {
            config,
            rng,
            phase: Phase::Menu,
            snake,
            heading: None,
            food,
            special: None,
            score: 0,
            high_score: 0,
            food_eaten: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn speed(&self) -> u8 {
        self.config.speed
    }

    /// Tick interval for the current speed setting
    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    /// Set the speed, clamped to the valid range
    pub fn set_speed(&mut self, speed: u8) {
        self.config = GameConfig::new(speed);
    }

    /// Begin a fresh game from the menu
    ///
    /// Resets the snake to a single segment at the grid center with no
    /// heading, spawns a food, and clears score, special food and the food
    /// counter. A no-op outside the Menu phase.
    pub fn start(&mut self) {
        if self.phase != Phase::Menu {
            return;
        }

        self.snake = Snake::new(Cell::center());
        self.heading = None;
        self.food = random_free_cell(&mut self.rng, &self.snake).unwrap_or(Cell::new(0, 0));
        self.special = None;
        self.score = 0;
        self.food_eaten = 0;
        self.phase = Phase::Running;
    }

    /// Steer the snake
    ///
    /// Accepted while Running or Paused; a paused direction takes effect on
    /// the first tick after unpausing. A 180-degree reversal of the current
    /// heading is ignored, since it would drive the head straight back
    /// through the neck.
    pub fn set_direction(&mut self, direction: Direction) {
        if !matches!(self.phase, Phase::Running | Phase::Paused) {
            return;
        }
        if let Some(heading) = self.heading {
            if heading.is_opposite(direction) {
                return;
            }
        }
        self.heading = Some(direction);
    }

    /// Toggle between Running and Paused; a no-op in other phases
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            other => other,
        };
    }

    /// Abandon the current game and return to the menu
    ///
    /// The next `start()` begins a fresh session. A no-op in the Menu phase.
    pub fn restart(&mut self) {
        if matches!(self.phase, Phase::Running | Phase::Paused | Phase::GameOver) {
            self.phase = Phase::Menu;
        }
    }

    /// Advance the game by one step
    ///
    /// Does nothing unless Running with a heading set. Otherwise: move the
    /// head one cell (wrapping at the edges), end the game on self-collision,
    /// then resolve ordinary food, special food, or plain movement, and
    /// finally count down the special food timer.
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.phase != Phase::Running {
            return outcome;
        }
        let Some(heading) = self.heading else {
            return outcome;
        };

        let new_head = self.snake.head().step(heading);

        // Collision is checked against the pre-move body; the offending head
        // is never committed.
        if self.snake.contains(new_head) {
            outcome.just_ended = true;
            self.game_over();
            return outcome;
        }

        outcome.advanced = true;
        self.snake.push_head(new_head);

        if new_head == self.food {
            self.score += ORDINARY_FOOD_POINTS;
            self.food_eaten += 1;
            outcome.ate = Some(FoodKind::Ordinary);

            match random_free_cell(&mut self.rng, &self.snake) {
                Some(cell) => self.food = cell,
                None => {
                    // Board full: no free cell left for food. Ends the game.
                    outcome.just_ended = true;
                    self.game_over();
                    return outcome;
                }
            }

            if self.food_eaten % SPECIAL_FOOD_CADENCE == 0 {
                self.special = self.spawn_special();
            }
        } else if self.special.is_some_and(|s| s.covers(new_head)) {
            self.score += SPECIAL_FOOD_POINTS;
            self.special = None;
            outcome.ate = Some(FoodKind::Special);
        } else {
            self.snake.pop_tail();
        }

        // The countdown runs on every advancing tick, including the spawn
        // tick itself.
        if let Some(special) = self.special.as_mut() {
            special.timer -= 1;
            if special.timer == 0 {
                self.special = None;
            }
        }

        outcome
    }

    /// Read-only view of the current state for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            snake: self.snake.cells(),
            food: self.food,
            special: self.special.map(|s| SpecialFoodView {
                anchor: s.anchor,
                fraction_remaining: s.fraction_remaining(),
            }),
            score: self.score,
            high_score: self.high_score,
            speed: self.config.speed,
            phase: self.phase,
        }
    }

    fn game_over(&mut self) {
        self.high_score = self.high_score.max(self.score);
        self.phase = Phase::GameOver;
    }

    /// Pick an anchor whose whole 2x2 block avoids the snake
    ///
    /// The anchor range keeps the block inside the grid without wrapping.
    /// Returns None if the board is too crowded to place one; that spawn is
    /// simply skipped.
    fn spawn_special(&mut self) -> Option<SpecialFood> {
        for _ in 0..SPAWN_ATTEMPTS {
            let anchor = Cell::new(
                self.rng.gen_range(0..GRID_SIZE - 1),
                self.rng.gen_range(0..GRID_SIZE - 1),
            );
            let special = SpecialFood::new(anchor);
            if special.cells().iter().all(|c| !self.snake.contains(*c)) {
                return Some(special);
            }
        }
        None
    }
}

/// Pick a uniformly random cell outside the snake
///
/// Rejection sampling with a bounded number of attempts, then a grid scan so
/// a nearly full board still terminates. Returns None only when no free cell
/// exists at all.
fn random_free_cell(rng: &mut SmallRng, snake: &Snake) -> Option<Cell> {
    for _ in 0..SPAWN_ATTEMPTS {
        let cell = Cell::new(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE));
        if !snake.contains(cell) {
            return Some(cell);
        }
    }

    for y in 0..GRID_SIZE {
        for x in 0..GRID_SIZE {
            let cell = Cell::new(x, y);
            if !snake.contains(cell) {
                return Some(cell);
            }
        }
    }

    None
}

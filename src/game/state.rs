use super::GRID_SIZE;
use super::direction::Direction;

/// A cell on the game grid, with both coordinates in 0..GRID_SIZE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell at the center of the grid
    pub fn center() -> Self {
        Self::new(GRID_SIZE / 2, GRID_SIZE / 2)
    }

    /// The adjacent cell in a direction, wrapping at the grid edges
    ///
    /// The grid is a torus: stepping right off column 29 lands on column 0,
    /// stepping up off row 0 lands on row 29.
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: (self.x + dx).rem_euclid(GRID_SIZE),
            y: (self.y + dy).rem_euclid(GRID_SIZE),
        }
    }
}

/// The snake: body cells with the head at index 0
///
/// Never empty. Free of duplicate cells while the game is running; the tick
/// that would introduce a duplicate ends the game instead of committing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    /// Create a single-segment snake at the given cell
    pub fn new(head: Cell) -> Self {
        Self { body: vec![head] }
    }

    /// Create a snake from explicit cells, head first
    ///
    /// The cells must be non-empty and duplicate-free.
    pub fn from_cells(cells: Vec<Cell>) -> Self {
        debug_assert!(!cells.is_empty());
        Self { body: cells }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn push_head(&mut self, head: Cell) {
        self.body.insert(0, head);
    }

    pub fn pop_tail(&mut self) {
        self.body.pop();
    }
}

/// The timed 2x2 bonus food
///
/// Covers the anchor cell plus its +x, +y and +x+y neighbors. The anchor is
/// always chosen so the block fits without wrapping. Expires unscored when
/// the countdown hits zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialFood {
    pub anchor: Cell,
    pub timer: u32,
}

impl SpecialFood {
    /// Ticks a special food stays on the board before expiring
    pub const LIFETIME: u32 = 50;

    pub fn new(anchor: Cell) -> Self {
        Self {
            anchor,
            timer: Self::LIFETIME,
        }
    }

    /// The four cells of the 2x2 block
    pub fn cells(&self) -> [Cell; 4] {
        let Cell { x, y } = self.anchor;
        [
            Cell::new(x, y),
            Cell::new(x + 1, y),
            Cell::new(x, y + 1),
            Cell::new(x + 1, y + 1),
        ]
    }

    /// Whether a cell lies within the 2x2 block
    pub fn covers(&self, cell: Cell) -> bool {
        self.anchor.x <= cell.x
            && cell.x <= self.anchor.x + 1
            && self.anchor.y <= cell.y
            && cell.y <= self.anchor.y + 1
    }

    /// Remaining lifetime as a fraction in (0, 1], for the countdown bar
    pub fn fraction_remaining(&self) -> f64 {
        f64::from(self.timer) / f64::from(Self::LIFETIME)
    }
}

/// Which screen the game is on and which commands it accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Running,
    Paused,
    GameOver,
}

/// Read-only view of the special food for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecialFoodView {
    pub anchor: Cell,
    pub fraction_remaining: f64,
}

/// Read-only view of engine state for rendering
///
/// Borrowed from the engine each frame; the renderer never mutates the game.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    /// Snake cells, head first
    pub snake: &'a [Cell],
    pub food: Cell,
    pub special: Option<SpecialFoodView>,
    pub score: u32,
    pub high_score: u32,
    pub speed: u8,
    pub phase: Phase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_wraps_at_edges() {
        assert_eq!(
            Cell::new(GRID_SIZE - 1, 7).step(Direction::Right),
            Cell::new(0, 7)
        );
        assert_eq!(
            Cell::new(0, 7).step(Direction::Left),
            Cell::new(GRID_SIZE - 1, 7)
        );
        assert_eq!(
            Cell::new(3, 0).step(Direction::Up),
            Cell::new(3, GRID_SIZE - 1)
        );
        assert_eq!(
            Cell::new(3, GRID_SIZE - 1).step(Direction::Down),
            Cell::new(3, 0)
        );
    }

    #[test]
    fn test_step_interior() {
        let cell = Cell::new(5, 5);
        assert_eq!(cell.step(Direction::Up), Cell::new(5, 4));
        assert_eq!(cell.step(Direction::Down), Cell::new(5, 6));
        assert_eq!(cell.step(Direction::Left), Cell::new(4, 5));
        assert_eq!(cell.step(Direction::Right), Cell::new(6, 5));
    }

    #[test]
    fn test_snake_head_and_growth() {
        let mut snake = Snake::new(Cell::new(5, 5));
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(5, 5));

        snake.push_head(Cell::new(6, 5));
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.head(), Cell::new(6, 5));
        assert!(snake.contains(Cell::new(5, 5)));

        snake.pop_tail();
        assert_eq!(snake.len(), 1);
        assert!(!snake.contains(Cell::new(5, 5)));
    }

    #[test]
    fn test_special_food_footprint() {
        let special = SpecialFood::new(Cell::new(10, 10));
        assert_eq!(
            special.cells(),
            [
                Cell::new(10, 10),
                Cell::new(11, 10),
                Cell::new(10, 11),
                Cell::new(11, 11),
            ]
        );

        for cell in special.cells() {
            assert!(special.covers(cell));
        }
        assert!(!special.covers(Cell::new(9, 10)));
        assert!(!special.covers(Cell::new(12, 10)));
        assert!(!special.covers(Cell::new(10, 12)));
    }

    #[test]
    fn test_special_food_fraction() {
        let mut special = SpecialFood::new(Cell::new(0, 0));
        assert_eq!(special.fraction_remaining(), 1.0);

        special.timer = 25;
        assert_eq!(special.fraction_remaining(), 0.5);
    }
}

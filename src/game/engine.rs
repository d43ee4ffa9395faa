use rand::Rng;

use super::{
    config::GameConfig,
    direction::Direction,
    state::{GameOverReason, GameState, Phase, Position, Snake},
};

/// What one call to [`GameEngine::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The game was not running; nothing changed.
    Idle,
    /// The snake moved one cell.
    Moved,
    /// The snake moved onto the food and grew by one cell.
    AteFood,
    /// The move ended the game.
    GameOver(GameOverReason),
}

/// Uniform draws attempted before falling back to enumerating free cells.
const FOOD_SPAWN_RETRIES: u32 = 128;

/// Drives one game session.
///
/// The engine exclusively owns its [`GameState`]; collaborators read it
/// through [`state`](GameEngine::state) and mutate it only through the
/// operations here. Calls made in the wrong phase (double `start`, input or
/// ticks outside `Running`) are silent no-ops.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        let mut rng = rand::thread_rng();
        let state = fresh_state(&config, &mut rng, config.initial_food);
        Self { config, state, rng }
    }

    /// Read-only view for the presentation layer.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Begin the game. Only meaningful while `NotStarted`.
    pub fn start(&mut self) {
        if self.state.phase == Phase::NotStarted {
            self.state.phase = Phase::Running;
        }
    }

    /// Steer the snake. Only cross-axis turns are accepted, which is what
    /// makes an instant reversal impossible; a same-axis repeat would change
    /// nothing anyway. The last accepted turn before a tick wins.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.state.phase != Phase::Running {
            return;
        }
        if self.state.snake.heading.same_axis(direction) {
            return;
        }
        self.state.snake.heading = direction;
    }

    /// Advance the simulation by one step.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state.phase != Phase::Running {
            return TickOutcome::Idle;
        }

        let candidate = self.state.snake.head().step(self.state.snake.heading);

        // A fatal move is never committed: the candidate head is checked
        // against the pre-move snake, tail included.
        if !self.state.in_bounds(candidate) {
            self.state.phase = Phase::Over;
            return TickOutcome::GameOver(GameOverReason::HitWall);
        }
        if self.state.snake.occupies(candidate) {
            self.state.phase = Phase::Over;
            return TickOutcome::GameOver(GameOverReason::HitSelf);
        }

        let ate = candidate == self.state.food;
        self.state.snake.advance(candidate, ate);

        if !ate {
            return TickOutcome::Moved;
        }

        self.state.score += 1;
        match spawn_food(&mut self.rng, self.config.grid_size, &self.state.snake) {
            Some(food) => {
                self.state.food = food;
                TickOutcome::AteFood
            }
            None => {
                self.state.phase = Phase::Over;
                TickOutcome::GameOver(GameOverReason::BoardFull)
            }
        }
    }

    /// Return to the initial snapshot with a freshly drawn food cell.
    /// Valid in any phase, idempotent.
    pub fn reset(&mut self) {
        self.state = fresh_state(&self.config, &mut self.rng, None);
    }
}

#[cfg(test)]
impl GameEngine {
    /// Test seam: an engine wrapped around a hand-built state.
    fn from_state(config: GameConfig, state: GameState) -> Self {
        Self {
            config,
            state,
            rng: rand::thread_rng(),
        }
    }

    fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}

/// Build the starting snapshot: a 3-cell horizontal snake with its head at
/// the grid centre, heading up, score 0, phase `NotStarted`.
fn fresh_state(
    config: &GameConfig,
    rng: &mut rand::rngs::ThreadRng,
    fixed_food: Option<Position>,
) -> GameState {
    let centre = config.grid_size / 2;
    let snake = Snake::horizontal(
        Position::new(centre, centre),
        Direction::Up,
        config.initial_snake_length,
    );

    let in_grid = |p: Position| {
        p.x >= 0 && p.x < config.grid_size && p.y >= 0 && p.y < config.grid_size
    };
    let food = fixed_food
        .filter(|&f| in_grid(f) && !snake.occupies(f))
        .or_else(|| spawn_food(rng, config.grid_size, &snake))
        // Only reachable when the initial snake already fills the grid; the
        // session is unplayable either way.
        .unwrap_or_else(|| Position::new(0, 0));

    GameState::new(snake, food, config.grid_size)
}

/// Draw an unoccupied cell uniformly at random. Rejection sampling first;
/// on a crowded board fall back to enumerating the free cells so placement
/// always terminates. `None` means the snake covers the whole grid.
fn spawn_food<R: Rng>(rng: &mut R, grid_size: i32, snake: &Snake) -> Option<Position> {
    for _ in 0..FOOD_SPAWN_RETRIES {
        let pos = Position::new(rng.gen_range(0..grid_size), rng.gen_range(0..grid_size));
        if !snake.occupies(pos) {
            return Some(pos);
        }
    }

    let free: Vec<Position> = (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Position::new(x, y)))
        .filter(|&pos| !snake.occupies(pos))
        .collect();
    if free.is_empty() {
        None
    } else {
        Some(free[rng.gen_range(0..free.len())])
    }
}

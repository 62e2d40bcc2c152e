use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::cell::{Cell, Direction};
use crate::config::{GameConfig, SettingKind};
use crate::grid::Grid;
use crate::snake::{DeathReason, MoveResult, Snake};

/// Width of the pixel space the grid geometry is centred in.
pub const SCREEN_WIDTH: i32 = 800;
/// Top edge of the grid in pixel space, below the title and score.
pub const GRID_TOP: i32 = 150;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Dead,
}

/// What a single frame of game logic did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Idle,
    Moved(Cell),
    Ate(Cell),
    Died(DeathReason),
    /// Food was eaten and no free cell is left for the next one.
    Won,
}

#[derive(Clone, Debug)]
pub struct GameSession<R = ThreadRng> {
    grid: Grid,
    snake: Snake,
    food: Option<Cell>,
    score: u32,
    state: GameState,
    speed: u32,
    rng: R,
}

impl GameSession<ThreadRng> {
    pub fn new(config: &GameConfig) -> Self {
        GameSession::new_with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> GameSession<R> {
    pub fn new_with_rng(config: &GameConfig, rng: R) -> GameSession<R> {
        let grid = Grid::new(config.width, config.height, config.cell_size, GRID_TOP, SCREEN_WIDTH);
        let speed = config.speed.max(1) as u32;
        let snake = spawn_snake(&grid, speed);

        let mut session = GameSession {
            grid,
            snake,
            food: None,
            score: 0,
            state: GameState::Playing,
            speed,
            rng,
        };
        session.reset_round();
        info!(
            "New game on a {}x{} grid at speed {}",
            session.grid.width(),
            session.grid.height(),
            session.speed
        );
        session
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// The round ended without the snake crashing.
    pub fn has_won(&self) -> bool {
        self.state == GameState::Dead && self.snake.is_alive()
    }

    pub fn steer(&mut self, direction: Direction) {
        self.snake.steer(direction);
    }

    /// Starts a new round. Only acts on the game-over screen.
    pub fn restart(&mut self) -> bool {
        if self.state != GameState::Dead {
            return false;
        }

        self.reset_round();
        info!("Restarted at speed {}", self.speed);
        true
    }

    fn reset_round(&mut self) {
        self.snake = spawn_snake(&self.grid, self.speed);
        self.score = 0;
        self.food = self.grid.free_food_position(&mut self.rng, &self.snake);
        self.state = match self.food {
            Some(_) => GameState::Playing,
            None => {
                let (width, height) = self.grid.dimensions();
                info!("No room for food on a {}x{} grid, round won", width, height);
                GameState::Dead
            }
        };
    }

    /// Advances the game by one frame that took `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u64) -> TickOutcome {
        if self.state != GameState::Playing {
            return TickOutcome::Idle;
        }

        let (width, height) = self.grid.dimensions();
        match self.snake.update(elapsed_ms, width, height) {
            MoveResult::Idle => TickOutcome::Idle,
            MoveResult::Crashed(reason) => {
                self.state = GameState::Dead;
                info!("YOU DIED! ({:?}) Final score: {}", reason, self.score);
                TickOutcome::Died(reason)
            }
            MoveResult::Moved { new_head, .. } if Some(new_head) == self.food => {
                self.snake.on_eat();
                self.score += 1;
                self.food = self.grid.free_food_position(&mut self.rng, &self.snake);

                match self.food {
                    Some(food) => {
                        debug!(
                            "Ate at ({}, {}), score {}, next food at ({}, {})",
                            new_head.x, new_head.y, self.score, food.x, food.y
                        );
                        TickOutcome::Ate(new_head)
                    }
                    None => {
                        self.state = GameState::Dead;
                        info!("No room left for food, won with score {}", self.score);
                        TickOutcome::Won
                    }
                }
            }
            MoveResult::Moved { new_head, .. } => TickOutcome::Moved(new_head),
        }
    }

    /// Applies a settings change. Resizing the grid mid-round starts a new round.
    pub fn apply_setting(&mut self, kind: SettingKind, value: i32) {
        match kind {
            SettingKind::Speed => {
                self.speed = value.max(1) as u32;
                self.snake.set_speed(self.speed);
            }
            SettingKind::Width => self.grid.set_width(value),
            SettingKind::Height => self.grid.set_height(value),
            SettingKind::CellSize => self.grid.set_cell_size(value),
        }
        info!("{} set to {}", kind.label(), value);

        let resized = matches!(kind, SettingKind::Width | SettingKind::Height);
        if resized && self.state == GameState::Playing {
            self.reset_round();
            info!("Grid resized to {}x{}, round reset", self.grid.width(), self.grid.height());
        }
    }

    pub fn debug_set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    pub fn debug_set_food(&mut self, food: Option<Cell>) {
        self.food = food;
    }
}

fn spawn_snake(grid: &Grid, speed: u32) -> Snake {
    Snake::new(Cell::new(0, grid.height() / 2), speed)
}

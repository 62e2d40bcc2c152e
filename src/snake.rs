use std::collections::VecDeque;

use crate::cell::{Cell, Direction::{self, *}};
use MoveResult::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DeathReason {
    Wall,
    SelfCollision,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// Not enough time has accumulated for a step, or the snake is dead.
    Idle,
    Moved { new_head: Cell, old_head: Cell, old_tail: Option<Cell> },
    Crashed(DeathReason),
}

/// Cooldown in milliseconds between two steps at `speed` steps per second.
/// Never below 1 ms, so a zero-length frame cannot step.
pub fn cooldown_for_speed(speed: u32) -> u64 {
    (1000 / speed.max(1) as u64).max(1)
}

#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>, // The head is the first element
    direction: Direction,
    next_direction: Direction,
    since_last_step: u64,
    cooldown: u64,
    grow_next_move: bool,
    alive: bool,
}

impl Snake {
    /// A fresh single-cell snake heading right.
    pub fn new(pos: Cell, speed: u32) -> Self {
        Snake {
            body: VecDeque::from(vec![pos]),
            direction: Right,
            next_direction: Right,
            since_last_step: 0,
            cooldown: cooldown_for_speed(speed),
            grow_next_move: false,
            alive: true,
        }
    }

    /// Builds a snake from an explicit head-first body. Returns `None` for an empty body.
    pub fn from_body(body: &[Cell], direction: Direction, speed: u32) -> Option<Self> {
        if body.is_empty() {
            return None;
        }

        Some(Snake {
            body: body.iter().copied().collect(),
            direction,
            next_direction: direction,
            since_last_step: 0,
            cooldown: cooldown_for_speed(speed),
            grow_next_move: false,
            alive: true,
        })
    }

    pub fn body(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body.contains(cell)
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn get_direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn cooldown(&self) -> u64 {
        self.cooldown
    }

    pub fn set_speed(&mut self, speed: u32) {
        self.cooldown = cooldown_for_speed(speed);
    }

    /// Buffers the direction for the next step. A 180 degree turn relative to the
    /// committed direction is dropped.
    pub fn steer(&mut self, new_direction: Direction) {
        if !new_direction.is_opposite(&self.direction) {
            self.next_direction = new_direction;
        }
    }

    pub fn on_eat(&mut self) {
        self.grow_next_move = true;
    }

    /// Advances the step clock by `elapsed_ms` and takes at most one step.
    pub fn update(&mut self, elapsed_ms: u64, width: i32, height: i32) -> MoveResult {
        if !self.alive {
            return Idle;
        }

        self.since_last_step += elapsed_ms;
        if self.since_last_step < self.cooldown {
            return Idle;
        }
        self.since_last_step -= self.cooldown;

        self.move_step(width, height)
    }

    fn move_step(&mut self, width: i32, height: i32) -> MoveResult {
        self.direction = self.next_direction;

        let old_head = self.head();
        let new_head = old_head + self.direction;

        let old_tail = if self.grow_next_move {
            self.grow_next_move = false;
            None
        } else {
            self.body.pop_back()
        };

        let on_grid = (0..width).contains(&new_head.x) && (0..height).contains(&new_head.y);
        let reason = if !on_grid {
            Some(DeathReason::Wall)
        } else if self.body.contains(&new_head) {
            Some(DeathReason::SelfCollision)
        } else {
            None
        };

        if let Some(reason) = reason {
            // The snake stops where it is instead of visibly shrinking
            if let Some(tail) = old_tail {
                self.body.push_back(tail);
            }
            self.alive = false;
            return Crashed(reason);
        }

        self.body.push_front(new_head);
        Moved { new_head, old_head, old_tail }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn cells(snake: &Snake) -> Vec<Cell> {
        snake.body().copied().collect()
    }

    fn c(x: i32, y: i32) -> Cell {
        Cell::new(x, y)
    }

    #[test]
    fn speed_maps_to_truncated_cooldown() {
        assert_eq!(cooldown_for_speed(10), 100);
        assert_eq!(cooldown_for_speed(3), 333);
        assert_eq!(cooldown_for_speed(40), 25);
        assert_eq!(cooldown_for_speed(0), 1000);
        assert_eq!(cooldown_for_speed(1000), 1);
        assert_eq!(cooldown_for_speed(5000), 1);
    }

    #[test]
    fn extreme_speed_still_needs_elapsed_time() {
        let mut snake = Snake::new(c(0, 0), 2000);
        assert_eq!(snake.cooldown(), 1);

        assert_eq!(snake.update(0, 20, 20), Idle);
        assert_eq!(cells(&snake), vec![c(0, 0)]);

        assert!(matches!(snake.update(1, 20, 20), Moved { .. }));
        assert_eq!(snake.head(), c(1, 0));
    }

    #[test]
    fn single_cell_snake_steps_without_shrinking() {
        let mut snake = Snake::new(c(0, 5), 10);

        let res = snake.update(100, 10, 10);

        assert_eq!(res, Moved { new_head: c(1, 5), old_head: c(0, 5), old_tail: Some(c(0, 5)) });
        assert_eq!(cells(&snake), vec![c(1, 5)]);
        assert!(snake.is_alive());
    }

    #[test]
    fn eating_grows_by_one_on_next_step() {
        let mut snake = Snake::from_body(&[c(3, 5), c(2, 5), c(1, 5)], Right, 10).unwrap();
        snake.on_eat();

        let res = snake.update(150, 10, 10);

        assert!(matches!(res, Moved { old_tail: None, .. }));
        assert_eq!(cells(&snake), vec![c(4, 5), c(3, 5), c(2, 5), c(1, 5)]);
        assert!(snake.is_alive());

        // Growth is consumed by a single step
        snake.update(100, 10, 10);
        assert_eq!(snake.len(), 4);
    }

    #[test]
    fn leaving_the_grid_kills_and_keeps_length() {
        let mut snake = Snake::from_body(&[c(9, 5), c(8, 5), c(7, 5)], Right, 10).unwrap();

        let res = snake.update(100, 10, 10);

        assert_eq!(res, Crashed(DeathReason::Wall));
        assert!(!snake.is_alive());
        assert_eq!(cells(&snake), vec![c(9, 5), c(8, 5), c(7, 5)]);
    }

    #[test]
    fn negative_coordinates_are_off_grid() {
        let mut snake = Snake::from_body(&[c(0, 0)], Up, 10).unwrap();
        assert_eq!(snake.update(100, 10, 10), Crashed(DeathReason::Wall));
    }

    #[test]
    fn running_into_own_body_kills() {
        // A hook shape where turning up bites the body
        let body = [c(2, 2), c(2, 3), c(3, 3), c(3, 2), c(3, 1), c(2, 1), c(1, 1)];
        let mut snake = Snake::from_body(&body, Left, 10).unwrap();
        snake.steer(Up);

        let res = snake.update(100, 10, 10);

        assert_eq!(res, Crashed(DeathReason::SelfCollision));
        assert_eq!(cells(&snake), body.to_vec());
    }

    #[test]
    fn moving_into_the_cell_the_tail_just_left_is_allowed() {
        // A 2x2 loop: the head chases its own tail
        let body = [c(1, 1), c(1, 2), c(2, 2), c(2, 1)];
        let mut snake = Snake::from_body(&body, Right, 10).unwrap();

        let res = snake.update(100, 10, 10);

        assert!(matches!(res, Moved { .. }));
        assert_eq!(snake.head(), c(2, 1));
        assert!(snake.is_alive());
    }

    #[test]
    fn reversal_request_is_dropped() {
        let mut snake = Snake::new(c(3, 3), 10);
        snake.steer(Left);
        assert_eq!(snake.next_direction(), Right);

        snake.update(100, 10, 10);
        assert_eq!(snake.head(), c(4, 3));
    }

    #[test]
    fn reversal_is_checked_against_the_committed_direction() {
        let mut snake = Snake::from_body(&[c(3, 3), c(2, 3)], Right, 10).unwrap();
        snake.steer(Up);
        // Still committed to Right, so Left is rejected even though Up is buffered
        snake.steer(Left);
        assert_eq!(snake.next_direction(), Up);

        snake.update(100, 10, 10);
        assert_eq!(snake.get_direction(), Up);
        assert_eq!(snake.head(), c(3, 2));
    }

    #[test]
    fn two_cell_snake_cannot_turn_back_into_itself() {
        let mut snake = Snake::from_body(&[c(4, 4), c(3, 4)], Right, 10).unwrap();
        snake.steer(Left);

        snake.update(100, 10, 10);

        assert!(snake.is_alive());
        assert_eq!(cells(&snake), vec![c(5, 4), c(4, 4)]);
    }

    #[test]
    fn short_updates_never_change_anything() {
        let mut snake = Snake::from_body(&[c(3, 3), c(2, 3)], Right, 10).unwrap();
        snake.steer(Down);

        for _ in 0..50 {
            assert_eq!(snake.update(0, 10, 10), Idle);
        }
        assert_eq!(snake.update(99, 10, 10), Idle);

        assert_eq!(cells(&snake), vec![c(3, 3), c(2, 3)]);
        assert_eq!(snake.get_direction(), Right);
        assert!(snake.is_alive());
    }

    #[test]
    fn at_most_one_step_per_update() {
        let mut snake = Snake::new(c(0, 0), 10);

        snake.update(1000, 20, 20);
        assert_eq!(snake.head(), c(1, 0));

        // The leftover time produces one step per subsequent call
        snake.update(0, 20, 20);
        assert_eq!(snake.head(), c(2, 0));
    }

    #[test]
    fn remainder_carries_over_between_steps() {
        let mut snake = Snake::new(c(0, 0), 10);

        assert!(matches!(snake.update(130, 20, 20), Moved { .. }));
        assert_eq!(snake.update(60, 20, 20), Idle);
        // 30 + 60 + 10 reaches the cooldown
        assert!(matches!(snake.update(10, 20, 20), Moved { .. }));
        assert_eq!(snake.head(), c(2, 0));
    }

    #[test]
    fn speed_change_keeps_accumulated_time() {
        let mut snake = Snake::new(c(0, 0), 10);
        assert_eq!(snake.update(60, 20, 20), Idle);

        snake.set_speed(20);
        assert_eq!(snake.cooldown(), 50);
        assert!(matches!(snake.update(0, 20, 20), Moved { .. }));
    }

    #[test]
    fn dead_snake_is_frozen() {
        let mut snake = Snake::from_body(&[c(9, 5), c(8, 5)], Right, 10).unwrap();
        snake.update(100, 10, 10);
        assert!(!snake.is_alive());
        let frozen = cells(&snake);

        snake.steer(Down);
        for _ in 0..10 {
            assert_eq!(snake.update(500, 10, 10), Idle);
        }

        assert_eq!(cells(&snake), frozen);
        assert!(!snake.is_alive());
    }

    #[test]
    fn random_walk_keeps_invariants() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut snake = Snake::new(c(10, 10), 10);
            let mut prev_dir = snake.get_direction();

            while snake.is_alive() {
                if rng.gen_bool(0.3) {
                    snake.on_eat();
                }
                let grows = snake.grow_next_move;
                snake.steer(Direction::ALL[rng.gen_range(0..4)]);

                let len_before = snake.len();
                let head_before = snake.head();

                match snake.update(100, 20, 20) {
                    Moved { new_head, .. } => {
                        assert!(!snake.get_direction().is_opposite(&prev_dir));
                        assert_eq!(new_head.manhattan_distance(&head_before), 1);
                        assert_eq!(snake.len(), len_before + grows as usize);

                        let unique: HashSet<_> = snake.body().collect();
                        assert_eq!(unique.len(), snake.len());
                    }
                    Crashed(_) => assert_eq!(snake.len(), len_before),
                    Idle => panic!("a full cooldown must produce a step"),
                }
                prev_dir = snake.get_direction();
            }
        }
    }
}

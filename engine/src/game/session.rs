use std::collections::VecDeque;

use crate::log;
use crate::save::{SaveError, SavedGame};

use super::board::Board;
use super::direction_queue::DirectionQueue;
use super::session_rng::SessionRng;
use super::settings::GameSettings;
use super::types::{Direction, FruitKind, Point, TickOutcome, TileType};

/// The snake keeps growing until it reaches this length; only beyond it does
/// the tail start shedding on uneventful moves.
pub const MIN_SNAKE_LENGTH: usize = 5;

/// Lowest value the decaying fruit bonus can reach.
const BONUS_FLOOR: u32 = 10;

/// One single-player game: the board, the snake, buffered input and the
/// session counters. The loop that owns the clock calls `update` once per
/// logic tick and reads everything else through accessors.
pub struct GameSession {
    settings: GameSettings,
    board: Board,
    snake: VecDeque<Point>,
    directions: DirectionQueue,
    rng: SessionRng,
    score: u32,
    fruits_eaten: u32,
    next_fruit_bonus: u32,
    is_new_game: bool,
    is_game_over: bool,
    is_paused: bool,
}

impl GameSession {
    pub fn new(settings: GameSettings, seed: u64) -> Self {
        Self {
            settings,
            board: Board::new(settings.field_size),
            snake: VecDeque::new(),
            directions: DirectionQueue::new(),
            rng: SessionRng::new(seed),
            score: 0,
            fruits_eaten: 0,
            next_fruit_bonus: 0,
            is_new_game: true,
            is_game_over: false,
            is_paused: false,
        }
    }

    /// Starts a fresh game: snake head at the center, one fruit of each
    /// edible kind, and a random helping of bad fruits.
    pub fn reset(&mut self) {
        self.score = 0;
        self.fruits_eaten = 0;
        self.is_new_game = false;
        self.is_game_over = false;
        self.is_paused = false;

        let head = self.settings.field_size.center();
        self.snake.clear();
        self.snake.push_back(head);

        self.board.clear();
        self.board.set(head, Some(TileType::SnakeHead));

        self.directions.clear_and_seed(Direction::North);

        self.spawn_fruit(FruitKind::Red);
        self.spawn_fruit(FruitKind::Blue);
        self.spawn_fruit(FruitKind::Green);

        let bad_count = self
            .rng
            .random_range(self.settings.bad_fruit_min..=self.settings.bad_fruit_max);
        for _ in 0..bad_count {
            self.spawn_fruit(FruitKind::Bad);
        }

        log!(
            "New game on a {}x{} field with {} bad fruits",
            self.settings.field_size.width,
            self.settings.field_size.height,
            bad_count
        );
    }

    /// One logic tick: move the snake, then apply the outcome to the session
    /// counters. Moving itself never touches the score.
    pub fn update(&mut self) -> TickOutcome {
        if !self.is_running() || self.is_paused {
            return TickOutcome::None;
        }

        let outcome = self.move_snake();
        match outcome {
            TickOutcome::Ate(kind) if kind.is_edible() => {
                self.fruits_eaten += 1;
                self.score += kind.base_score() + self.next_fruit_bonus;
                self.spawn_fruit(kind);
            }
            TickOutcome::Ate(_) | TickOutcome::Collision => {
                self.is_game_over = true;
                self.is_paused = true;
            }
            TickOutcome::None => {
                if self.next_fruit_bonus > BONUS_FLOOR {
                    self.next_fruit_bonus -= 1;
                }
            }
        }
        outcome
    }

    fn move_snake(&mut self) -> TickOutcome {
        let direction = self.directions.front();
        let head = *self
            .snake
            .front()
            .expect("Snake body is never empty while running");

        // Walls are checked before any board lookup; running off the field
        // is the same terminal outcome as biting the body.
        let Some(new_head) = direction.step(head, self.settings.field_size) else {
            return TickOutcome::Collision;
        };

        let mut hit = self.board.get(new_head);

        // Shed the tail before judging the hit, then re-read: the target
        // cell may have been the tail tip that just vacated it.
        let ate_edible = matches!(hit, Some(TileType::Fruit(kind)) if kind.is_edible());
        if !ate_edible && self.snake.len() > MIN_SNAKE_LENGTH {
            let tail = self
                .snake
                .pop_back()
                .expect("Snake body is never empty while running");
            self.board.set(tail, None);
            hit = self.board.get(new_head);
        }

        if hit == Some(TileType::SnakeBody) {
            return TickOutcome::Collision;
        }

        self.board.set(head, Some(TileType::SnakeBody));
        self.snake.push_front(new_head);
        self.board.set(new_head, Some(TileType::SnakeHead));
        self.directions.advance();

        if let Some(TileType::Fruit(kind)) = hit {
            // Duplicate head coordinates unwind into real length as the
            // snake moves on.
            for _ in 0..kind.extra_segments() {
                self.snake.push_front(new_head);
            }
            return TickOutcome::Ate(kind);
        }

        TickOutcome::None
    }

    /// Places one fruit of `kind` on a uniformly chosen free cell, scanning
    /// the field in a fixed column-major order to the chosen index. Cost is
    /// bounded by the board size no matter how long the snake is.
    pub fn spawn_fruit(&mut self, kind: FruitKind) {
        if kind.is_edible() {
            self.next_fruit_bonus = kind.base_score();
        }

        let field_size = self.settings.field_size;
        let free_cells = field_size.area().saturating_sub(self.snake.len());
        if free_cells == 0 {
            return;
        }
        let index = self.rng.random_range(0..free_cells);

        let mut seen = 0;
        for x in 0..field_size.width {
            for y in 0..field_size.height {
                let point = Point::new(x, y);
                let tile = self.board.get(point);
                if tile.is_none() || tile == Some(TileType::Fruit(kind)) {
                    if seen == index {
                        self.board.set(point, Some(TileType::Fruit(kind)));
                        return;
                    }
                    seen += 1;
                }
            }
        }
    }

    /// Buffers a direction change. Rejected silently while the game is not
    /// actively running, and by the queue's own adjacency rules otherwise.
    pub fn try_enqueue(&mut self, direction: Direction) -> bool {
        if !self.is_running() || self.is_paused {
            return false;
        }
        self.directions.try_enqueue(direction)
    }

    pub fn is_running(&self) -> bool {
        !self.is_new_game && !self.is_game_over
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn is_new_game(&self) -> bool {
        self.is_new_game
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn fruits_eaten(&self) -> u32 {
        self.fruits_eaten
    }

    pub fn next_fruit_bonus(&self) -> u32 {
        self.next_fruit_bonus
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn snake_len(&self) -> usize {
        self.snake.len()
    }

    pub fn head(&self) -> Option<Point> {
        self.snake.front().copied()
    }

    pub fn to_saved(&self) -> SavedGame {
        SavedGame {
            score: self.score,
            directions: self.directions.iter().copied().collect(),
            fruits_eaten: self.fruits_eaten,
            is_game_over: self.is_game_over,
            is_new_game: self.is_new_game,
            is_paused: self.is_paused,
            next_fruit_bonus: self.next_fruit_bonus,
            field_size: self.settings.field_size,
            tiles: self.board.tiles().to_vec(),
            snake: self.snake.iter().copied().collect(),
        }
    }

    /// Replaces the whole session state from a saved record. Nothing is
    /// touched unless the record matches this session's field size; a
    /// restored game always comes back paused.
    pub fn restore(&mut self, saved: SavedGame) -> Result<(), SaveError> {
        if saved.field_size != self.settings.field_size {
            return Err(SaveError::FieldSizeMismatch {
                found: (saved.field_size.width, saved.field_size.height),
                expected: (
                    self.settings.field_size.width,
                    self.settings.field_size.height,
                ),
            });
        }
        if saved.directions.is_empty() && !saved.is_new_game {
            return Err(SaveError::EmptyDirectionQueue);
        }

        self.score = saved.score;
        self.directions.replace(saved.directions);
        self.fruits_eaten = saved.fruits_eaten;
        self.is_game_over = saved.is_game_over;
        self.is_new_game = saved.is_new_game;
        self.next_fruit_bonus = saved.next_fruit_bonus;
        self.board.replace_tiles(saved.tiles);
        self.snake = saved.snake.into();
        self.is_paused = true;
        Ok(())
    }
}

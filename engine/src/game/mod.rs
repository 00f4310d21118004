mod board;
mod clock;
mod direction_queue;
mod session;
mod session_rng;
mod settings;
mod types;

pub use board::Board;
pub use clock::Clock;
pub use direction_queue::{DirectionQueue, MAX_QUEUED_DIRECTIONS};
pub use session::{GameSession, MIN_SNAKE_LENGTH};
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use types::{Direction, FieldSize, FruitKind, Point, TickOutcome, TileType};

use crate::game::{Direction, FieldSize, FruitKind, Point, TileType};

use super::file_io::SaveError;

/// A complete session snapshot as stored on disk: one flat sequential
/// record, fields in write order. Tile markers and directions get stable
/// integer tags here and nowhere else.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedGame {
    pub score: u32,
    pub directions: Vec<Direction>,
    pub fruits_eaten: u32,
    pub is_game_over: bool,
    pub is_new_game: bool,
    pub is_paused: bool,
    pub next_fruit_bonus: u32,
    pub field_size: FieldSize,
    /// Row-major board cells, as the live board stores them.
    pub tiles: Vec<Option<TileType>>,
    /// Head-first body coordinates, duplicates included.
    pub snake: Vec<Point>,
}

impl SavedGame {
    /// Record body without the leading format version byte; `file_io` owns
    /// the version framing.
    pub fn encode_to_vec(&self) -> Vec<u8> {
        let mut out = Vec::new();

        out.extend(self.score.to_le_bytes());

        out.push(self.directions.len() as u8);
        for direction in &self.directions {
            out.push(direction_code(*direction));
        }

        out.extend(self.fruits_eaten.to_le_bytes());
        out.push(self.is_game_over as u8);
        out.push(self.is_new_game as u8);
        out.push(self.is_paused as u8);
        out.extend(self.next_fruit_bonus.to_le_bytes());

        out.extend((self.field_size.width as u16).to_le_bytes());
        out.extend((self.field_size.height as u16).to_le_bytes());
        for x in 0..self.field_size.width {
            for y in 0..self.field_size.height {
                out.push(tile_code(self.tiles[y * self.field_size.width + x]));
            }
        }

        out.extend((self.snake.len() as u32).to_le_bytes());
        for point in &self.snake {
            out.extend((point.x as u16).to_le_bytes());
            out.extend((point.y as u16).to_le_bytes());
        }

        out
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, SaveError> {
        let mut reader = Reader::new(bytes);

        let score = reader.read_u32()?;

        let direction_count = reader.read_u8()?;
        let mut directions = Vec::with_capacity(direction_count as usize);
        for _ in 0..direction_count {
            directions.push(direction_from_code(reader.read_u8()?)?);
        }

        let fruits_eaten = reader.read_u32()?;
        let is_game_over = reader.read_u8()? != 0;
        let is_new_game = reader.read_u8()? != 0;
        let is_paused = reader.read_u8()? != 0;
        let next_fruit_bonus = reader.read_u32()?;

        let width = reader.read_u16()? as usize;
        let height = reader.read_u16()? as usize;
        let field_size = FieldSize::new(width, height);
        // Bail on truncated input before allocating cell storage.
        if reader.remaining() < field_size.area() {
            return Err(SaveError::UnexpectedEof);
        }
        let mut tiles = vec![None; field_size.area()];
        for x in 0..width {
            for y in 0..height {
                tiles[y * width + x] = tile_from_code(reader.read_u8()?)?;
            }
        }

        let snake_len = reader.read_u32()?;
        if reader.remaining() / 4 < snake_len as usize {
            return Err(SaveError::UnexpectedEof);
        }
        let mut snake = Vec::with_capacity(snake_len as usize);
        for _ in 0..snake_len {
            let x = reader.read_u16()? as usize;
            let y = reader.read_u16()? as usize;
            snake.push(Point::new(x, y));
        }

        Ok(Self {
            score,
            directions,
            fruits_eaten,
            is_game_over,
            is_new_game,
            is_paused,
            next_fruit_bonus,
            field_size,
            tiles,
            snake,
        })
    }
}

fn direction_code(direction: Direction) -> u8 {
    match direction {
        Direction::North => 0,
        Direction::East => 1,
        Direction::South => 2,
        Direction::West => 3,
    }
}

fn direction_from_code(code: u8) -> Result<Direction, SaveError> {
    match code {
        0 => Ok(Direction::North),
        1 => Ok(Direction::East),
        2 => Ok(Direction::South),
        3 => Ok(Direction::West),
        _ => Err(SaveError::InvalidDirection(code)),
    }
}

fn tile_code(tile: Option<TileType>) -> u8 {
    match tile {
        None => 0,
        Some(TileType::SnakeHead) => 1,
        Some(TileType::SnakeBody) => 2,
        Some(TileType::Fruit(FruitKind::Red)) => 3,
        Some(TileType::Fruit(FruitKind::Blue)) => 4,
        Some(TileType::Fruit(FruitKind::Green)) => 5,
        Some(TileType::Fruit(FruitKind::Bad)) => 6,
    }
}

fn tile_from_code(code: u8) -> Result<Option<TileType>, SaveError> {
    match code {
        0 => Ok(None),
        1 => Ok(Some(TileType::SnakeHead)),
        2 => Ok(Some(TileType::SnakeBody)),
        3 => Ok(Some(TileType::Fruit(FruitKind::Red))),
        4 => Ok(Some(TileType::Fruit(FruitKind::Blue))),
        5 => Ok(Some(TileType::Fruit(FruitKind::Green))),
        6 => Ok(Some(TileType::Fruit(FruitKind::Bad))),
        _ => Err(SaveError::InvalidTile(code)),
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, count: usize) -> Result<&'a [u8], SaveError> {
        if self.pos + count > self.bytes.len() {
            return Err(SaveError::UnexpectedEof);
        }
        let slice = &self.bytes[self.pos..self.pos + count];
        self.pos += count;
        Ok(slice)
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn read_u8(&mut self) -> Result<u8, SaveError> {
        Ok(self.take(1)?[0])
    }

    fn read_u16(&mut self) -> Result<u16, SaveError> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn read_u32(&mut self) -> Result<u32, SaveError> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_game() -> SavedGame {
        let field_size = FieldSize::new(11, 11);
        let mut tiles = vec![None; field_size.area()];
        tiles[5 * 11 + 5] = Some(TileType::SnakeHead);
        tiles[6 * 11 + 5] = Some(TileType::SnakeBody);
        tiles[2 * 11 + 8] = Some(TileType::Fruit(FruitKind::Red));
        tiles[9 * 11 + 1] = Some(TileType::Fruit(FruitKind::Bad));

        SavedGame {
            score: 350,
            directions: vec![Direction::North, Direction::East],
            fruits_eaten: 4,
            is_game_over: false,
            is_new_game: false,
            is_paused: true,
            next_fruit_bonus: 42,
            field_size,
            tiles,
            snake: vec![Point::new(5, 5), Point::new(5, 6)],
        }
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let game = sample_game();
        let bytes = game.encode_to_vec();
        let decoded = SavedGame::decode(&bytes).unwrap();
        assert_eq!(game, decoded);
    }

    #[test]
    fn test_decode_truncated_record() {
        let bytes = sample_game().encode_to_vec();
        for cut in [0, 3, 10, bytes.len() - 1] {
            let result = SavedGame::decode(&bytes[..cut]);
            assert!(
                matches!(result, Err(SaveError::UnexpectedEof)),
                "cut at {} did not fail",
                cut
            );
        }
    }

    #[test]
    fn test_decode_invalid_tile_code() {
        let game = sample_game();
        let mut bytes = game.encode_to_vec();
        // First tile byte sits right after the fixed-width header fields.
        let tiles_start = 4 + 1 + game.directions.len() + 4 + 3 + 4 + 4;
        bytes[tiles_start] = 99;
        assert!(matches!(
            SavedGame::decode(&bytes),
            Err(SaveError::InvalidTile(99))
        ));
    }

    #[test]
    fn test_decode_invalid_direction_code() {
        let mut bytes = sample_game().encode_to_vec();
        // Direction codes follow the score and the count byte.
        bytes[5] = 7;
        assert!(matches!(
            SavedGame::decode(&bytes),
            Err(SaveError::InvalidDirection(7))
        ));
    }
}

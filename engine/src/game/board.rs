use super::types::{FieldSize, Point, TileType};

/// The tile grid. One marker per cell, `None` meaning empty. Callers are
/// expected to bounds-check coordinates before touching the board; wall
/// collisions are decided before any lookup happens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    field_size: FieldSize,
    tiles: Vec<Option<TileType>>,
}

impl Board {
    pub fn new(field_size: FieldSize) -> Self {
        Self {
            field_size,
            tiles: vec![None; field_size.area()],
        }
    }

    pub fn field_size(&self) -> FieldSize {
        self.field_size
    }

    pub fn get(&self, point: Point) -> Option<TileType> {
        self.tiles[point.y * self.field_size.width + point.x]
    }

    pub fn set(&mut self, point: Point, tile: Option<TileType>) {
        self.tiles[point.y * self.field_size.width + point.x] = tile;
    }

    pub fn clear(&mut self) {
        self.tiles.fill(None);
    }

    /// Row-major cell storage, for rendering and persistence.
    pub fn tiles(&self) -> &[Option<TileType>] {
        &self.tiles
    }

    pub fn count(&self, tile: TileType) -> usize {
        self.tiles.iter().filter(|t| **t == Some(tile)).count()
    }

    pub(crate) fn replace_tiles(&mut self, tiles: Vec<Option<TileType>>) {
        debug_assert_eq!(tiles.len(), self.field_size.area());
        self.tiles = tiles;
    }
}

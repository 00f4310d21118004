#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSize {
    pub width: usize,
    pub height: usize,
}

impl FieldSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x < self.width && point.y < self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2, self.height / 2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn is_opposite(&self, other: &Direction) -> bool {
        matches!(
            (self, other),
            (Direction::North, Direction::South)
                | (Direction::South, Direction::North)
                | (Direction::East, Direction::West)
                | (Direction::West, Direction::East)
        )
    }

    /// The cell one step ahead, or `None` when the step leaves the field.
    pub fn step(&self, from: Point, field_size: FieldSize) -> Option<Point> {
        match self {
            Direction::North => {
                if from.y == 0 {
                    return None;
                }
                Some(Point::new(from.x, from.y - 1))
            }
            Direction::South => {
                if from.y >= field_size.height - 1 {
                    return None;
                }
                Some(Point::new(from.x, from.y + 1))
            }
            Direction::West => {
                if from.x == 0 {
                    return None;
                }
                Some(Point::new(from.x - 1, from.y))
            }
            Direction::East => {
                if from.x >= field_size.width - 1 {
                    return None;
                }
                Some(Point::new(from.x + 1, from.y))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FruitKind {
    Red,
    Blue,
    Green,
    Bad,
}

impl FruitKind {
    pub fn base_score(&self) -> u32 {
        match self {
            FruitKind::Red => 50,
            FruitKind::Blue => 100,
            FruitKind::Green => 200,
            FruitKind::Bad => 0,
        }
    }

    /// Duplicate head segments pushed beyond the normal eat growth.
    /// Net length change is this plus one.
    pub fn extra_segments(&self) -> usize {
        match self {
            FruitKind::Red => 0,
            FruitKind::Blue => 1,
            FruitKind::Green => 2,
            FruitKind::Bad => 0,
        }
    }

    pub fn is_edible(&self) -> bool {
        !matches!(self, FruitKind::Bad)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileType {
    SnakeHead,
    SnakeBody,
    Fruit(FruitKind),
}

/// Result of one logic tick. Wall hits and self-collisions are reported as
/// the same variant and handled identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    None,
    Ate(FruitKind),
    Collision,
}

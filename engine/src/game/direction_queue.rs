use std::collections::VecDeque;

use super::types::Direction;

/// Bounds how far ahead key presses can queue up.
pub const MAX_QUEUED_DIRECTIONS: usize = 3;

/// Buffered movement input. The front entry is the direction currently being
/// applied; the queue is seeded with one entry on reset and `advance` never
/// drains it below one, so a direction is always available to the tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectionQueue {
    queue: VecDeque<Direction>,
}

impl DirectionQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::with_capacity(MAX_QUEUED_DIRECTIONS),
        }
    }

    pub fn clear_and_seed(&mut self, initial: Direction) {
        self.queue.clear();
        self.queue.push_back(initial);
    }

    /// Rejects the enqueue when the queue is full, or when the direction
    /// repeats or reverses the most recently enqueued one. A reversal would
    /// drive the head straight into the neck.
    pub fn try_enqueue(&mut self, direction: Direction) -> bool {
        if self.queue.len() >= MAX_QUEUED_DIRECTIONS {
            return false;
        }
        if let Some(last) = self.queue.back()
            && (*last == direction || last.is_opposite(&direction))
        {
            return false;
        }
        self.queue.push_back(direction);
        true
    }

    pub fn front(&self) -> Direction {
        *self
            .queue
            .front()
            .expect("Direction queue is seeded on reset and never drained")
    }

    /// Drops the consumed front entry, keeping at least one direction queued.
    pub fn advance(&mut self) {
        if self.queue.len() > 1 {
            self.queue.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Direction> {
        self.queue.iter()
    }

    pub(crate) fn replace(&mut self, directions: Vec<Direction>) {
        self.queue = directions.into();
    }
}

impl Default for DirectionQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(initial: Direction) -> DirectionQueue {
        let mut queue = DirectionQueue::new();
        queue.clear_and_seed(initial);
        queue
    }

    #[test]
    fn test_reversal_of_active_direction_rejected() {
        let mut queue = seeded(Direction::North);
        assert!(!queue.try_enqueue(Direction::South));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.front(), Direction::North);
    }

    #[test]
    fn test_repeat_of_last_direction_rejected() {
        let mut queue = seeded(Direction::North);
        assert!(!queue.try_enqueue(Direction::North));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_perpendicular_direction_accepted() {
        let mut queue = seeded(Direction::North);
        assert!(queue.try_enqueue(Direction::East));
        assert!(queue.try_enqueue(Direction::South));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_full_queue_rejects() {
        let mut queue = seeded(Direction::North);
        assert!(queue.try_enqueue(Direction::East));
        assert!(queue.try_enqueue(Direction::North));
        assert!(!queue.try_enqueue(Direction::West));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_rejection_checks_last_enqueued_not_front() {
        let mut queue = seeded(Direction::North);
        assert!(queue.try_enqueue(Direction::East));
        // South reverses the active North but is valid after the queued East.
        assert!(queue.try_enqueue(Direction::South));
    }

    #[test]
    fn test_advance_keeps_last_direction() {
        let mut queue = seeded(Direction::North);
        queue.try_enqueue(Direction::East);
        queue.advance();
        assert_eq!(queue.front(), Direction::East);
        queue.advance();
        assert_eq!(queue.front(), Direction::East);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = seeded(Direction::North);
        queue.try_enqueue(Direction::East);
        queue.try_enqueue(Direction::South);
        assert_eq!(queue.front(), Direction::North);
        queue.advance();
        assert_eq!(queue.front(), Direction::East);
        queue.advance();
        assert_eq!(queue.front(), Direction::South);
    }
}

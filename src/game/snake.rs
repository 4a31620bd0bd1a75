use super::direction::Direction;
use crate::util::Bounds;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// Snake state.  Snate.
///
/// All positions are relative to the top-left corner of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The position of the snake's head
    pub(super) head: Position,

    /// The positions of the rest of the snake, starting with the cell just
    /// behind the head and ending with the tip of the tail
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake moved on the last tick
    pub(super) direction: Direction,

    /// The direction in which the snake will move on the next tick
    pub(super) pending: Direction,
}

impl Snake {
    /// Create a new one-cell snake at `head` facing in `direction`
    pub(super) fn new(head: Position, direction: Direction) -> Snake {
        Snake {
            head,
            body: VecDeque::new(),
            direction,
            pending: direction,
        }
    }

    pub(super) fn head(&self) -> Position {
        self.head
    }

    /// Return all cells of the snake, head first
    pub(super) fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        std::iter::once(self.head).chain(self.body.iter().copied())
    }

    pub(super) fn len(&self) -> usize {
        self.body.len() + 1
    }

    pub(super) fn occupies(&self, pos: Position) -> bool {
        self.head == pos || self.body.contains(&pos)
    }

    /// Request that the snake move in `direction` starting on the next tick.
    /// Requests to turn straight back on itself are ignored.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.pending = direction;
        }
    }

    /// Commit to the pending direction and return the cell the head would move
    /// into, or `None` if that would leave `bounds`
    pub(super) fn next_head(&mut self, bounds: Bounds) -> Option<Position> {
        self.direction = self.pending;
        self.direction.advance(self.head, bounds)
    }

    /// Move the head to `pos`.  Unless `grow` is true, the end of the tail is
    /// dropped so that the length stays the same.
    pub(super) fn slither(&mut self, pos: Position, grow: bool) {
        self.body.push_front(self.head);
        self.head = pos;
        if !grow {
            let _ = self.body.pop_back();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Size;

    fn bounds() -> Bounds {
        Bounds::from(Size::new(40, 30))
    }

    #[test]
    fn turn_rejects_reversal() {
        let mut snake = Snake::new(Position::new(20, 15), Direction::East);
        snake.turn(Direction::West);
        assert_eq!(snake.pending, Direction::East);
        snake.turn(Direction::North);
        assert_eq!(snake.pending, Direction::North);
        // Compared against the committed direction, not the pending one
        snake.turn(Direction::South);
        assert_eq!(snake.pending, Direction::South);
        assert_eq!(snake.next_head(bounds()), Some(Position::new(20, 16)));
        assert_eq!(snake.direction, Direction::South);
    }

    #[test]
    fn slither_without_growing() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::East);
        snake.body = VecDeque::from([Position::new(4, 5), Position::new(3, 5)]);
        let next = snake.next_head(bounds()).unwrap();
        snake.slither(next, false);
        assert_eq!(snake.len(), 3);
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            [Position::new(6, 5), Position::new(5, 5), Position::new(4, 5)]
        );
    }

    #[test]
    fn slither_and_grow() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::East);
        let next = snake.next_head(bounds()).unwrap();
        snake.slither(next, true);
        assert_eq!(snake.len(), 2);
        assert_eq!(
            snake.cells().collect::<Vec<_>>(),
            [Position::new(6, 5), Position::new(5, 5)]
        );
        assert!(snake.occupies(Position::new(5, 5)));
        assert!(!snake.occupies(Position::new(4, 5)));
    }

    #[test]
    fn next_head_at_edge() {
        let mut snake = Snake::new(Position::new(39, 15), Direction::East);
        assert_eq!(snake.next_head(bounds()), None);
    }
}

use crate::util::Bounds;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Return the cell one step from `pos` in this direction, or `None` if
    /// that would leave `bounds`
    pub(super) fn advance(self, pos: Position, bounds: Bounds) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => y = y.checked_sub(1)?,
            Direction::East => x = x.checked_add(1)?,
            Direction::South => y = y.checked_add(1)?,
            Direction::West => x = x.checked_sub(1)?,
        }
        let pos = Position { x, y };
        bounds.contains(pos).then_some(pos)
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

use super::grid::Grid;
use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Return the cell one step from `pos` in this direction, or `None` if
    /// that step would leave `grid`.
    pub(crate) fn advance(self, pos: Position, grid: Grid) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::Left => x = x.checked_sub(1)?,
            Direction::Right => x = x.checked_add(1).filter(|&x2| x2 < grid.side())?,
            Direction::Up => y = y.checked_sub(1)?,
            Direction::Down => y = y.checked_add(1).filter(|&y2| y2 < grid.side())?,
        }
        Some(Position { x, y })
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Return the direction a snake is facing given the positions of its head
    /// & the segment just behind it.  Horizontal offsets take precedence.
    /// Returns `None` if the two positions are the same.
    pub(crate) fn heading(head: Position, neck: Position) -> Option<Direction> {
        use std::cmp::Ordering;
        match (head.x.cmp(&neck.x), head.y.cmp(&neck.y)) {
            (Ordering::Greater, _) => Some(Direction::Right),
            (Ordering::Less, _) => Some(Direction::Left),
            (Ordering::Equal, Ordering::Greater) => Some(Direction::Down),
            (Ordering::Equal, Ordering::Less) => Some(Direction::Up),
            (Ordering::Equal, Ordering::Equal) => None,
        }
    }
}

use super::direction::Direction;
use super::grid::Grid;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake: an unbroken chain of grid cells
///
/// All positions are relative to the top-left corner of the grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The cells occupied by the snake, head first.  Never empty.
    pub(super) cells: VecDeque<Position>,
}

impl Snake {
    /// Create a snake of `length` cells lying horizontally across the middle
    /// row of `grid`, with its head at the left end.
    pub(super) fn new(grid: Grid, length: u16) -> Snake {
        let y = grid.side() / 2;
        let x0 = (grid.side() / 2).saturating_sub(length / 2);
        Snake::from_cells((0..length.max(1)).map(|i| Position::new(x0 + i, y)))
    }

    /// Create a snake occupying the given cells, head first.
    ///
    /// # Panics
    ///
    /// Panics if `cells` is empty.
    pub(super) fn from_cells<I: IntoIterator<Item = Position>>(cells: I) -> Snake {
        let cells = VecDeque::from_iter(cells);
        assert!(!cells.is_empty(), "a snake must have at least one cell");
        Snake { cells }
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> Position {
        *self
            .cells
            .front()
            .expect("snake should always have at least one cell")
    }

    /// Return the position of the cell just behind the head, if any
    pub(crate) fn neck(&self) -> Option<Position> {
        self.cells.get(1).copied()
    }

    /// Return the positions of the cells behind the head
    pub(crate) fn body(&self) -> impl Iterator<Item = &Position> {
        self.cells.iter().skip(1)
    }

    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Return the direction in which the head points away from the neck, or
    /// `None` for a one-cell snake.
    pub(crate) fn heading(&self) -> Option<Direction> {
        Direction::heading(self.head(), self.neck()?)
    }

    /// Shift every segment one place toward the head, putting the head at
    /// `head`.  Returns the cell vacated by the tail.
    pub(super) fn slither(&mut self, head: Position) -> Position {
        self.cells.push_front(head);
        self.cells
            .pop_back()
            .expect("snake should always have at least one cell")
    }

    /// Lengthen the snake by re-attaching the cell that was vacated by the
    /// tail on the last move
    pub(super) fn grow(&mut self, tail: Position) {
        self.cells.push_back(tail);
    }

    /// Drop the snake's last segment unless that would leave it with fewer
    /// than `min_len` cells.  Returns `true` if the snake shrank.
    pub(super) fn shrink(&mut self, min_len: usize) -> bool {
        if self.cells.len() > min_len.max(1) {
            let _ = self.cells.pop_back();
            true
        } else {
            false
        }
    }

    /// Returns `true` if the head overlaps any other segment
    pub(crate) fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body().any(|&p| p == head)
    }
}

use crate::consts;
use ratatui::layout::{Position, Positions, Rect, Size};

/// The square lattice of cells that the snake & food occupy
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Grid {
    /// Number of cells along each side
    side: u16,
}

impl Grid {
    pub(crate) fn new(side: u16) -> Grid {
        Grid { side }
    }

    pub(crate) fn side(self) -> u16 {
        self.side
    }

    /// Return the size of the grid in cells
    pub(crate) fn size(self) -> Size {
        Size {
            width: self.side,
            height: self.side,
        }
    }

    /// Return the size of the grid in terminal cells, not counting any border
    pub(crate) fn display_size(self) -> Size {
        Size {
            width: self.side.saturating_mul(consts::CELL_WIDTH),
            height: self.side,
        }
    }

    /// Iterate over every cell of the grid, row by row
    pub(crate) fn positions(self) -> Positions {
        Rect::from((Position::ORIGIN, self.size())).positions()
    }

    pub(crate) fn contains(self, pos: Position) -> bool {
        pos.x < self.side && pos.y < self.side
    }
}

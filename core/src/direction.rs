//! Carving directions and their lookahead geometry

/// One of the four grid directions the carve can step in.
///
/// The discriminants match the order the directions are listed in before
/// shuffling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// Canonical (unshuffled) ordering
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Row/column step for one move in this direction
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    /// Cell one step away from `(row, col)`, or `None` if it would fall
    /// below index 0.
    pub fn step(self, row: usize, col: usize) -> Option<(usize, usize)> {
        offset_cell(row, col, self.offset())
    }

    /// The four cells that must be clear before stepping this way:
    /// the immediate neighbour, the cell two steps out, and the two cells
    /// flanking the immediate neighbour.
    ///
    /// Positions that would fall below index 0 are `None`.
    pub fn lookahead(self, row: usize, col: usize) -> [Option<(usize, usize)>; 4] {
        let (dr, dc) = self.offset();
        // Perpendicular axis: swap the step components
        let (pr, pc) = (dc, dr);
        [
            offset_cell(row, col, (dr, dc)),
            offset_cell(row, col, (2 * dr, 2 * dc)),
            offset_cell(row, col, (dr - pr, dc - pc)),
            offset_cell(row, col, (dr + pr, dc + pc)),
        ]
    }
}

fn offset_cell(row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<(usize, usize)> {
    Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
}

//! Knight move offsets.

use crate::Square;

/// A knight displacement in (row, col) steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KnightMove {
    pub d_row: i8,
    pub d_col: i8,
}

impl KnightMove {
    /// The eight knight displacements.
    pub const ALL: [KnightMove; 8] = [
        KnightMove::new(2, 1),
        KnightMove::new(1, 2),
        KnightMove::new(-1, 2),
        KnightMove::new(-2, 1),
        KnightMove::new(-2, -1),
        KnightMove::new(-1, -2),
        KnightMove::new(1, -2),
        KnightMove::new(2, -1),
    ];

    #[inline]
    const fn new(d_row: i8, d_col: i8) -> Self {
        KnightMove { d_row, d_col }
    }

    /// Applies this move to `from`, returning `None` if it leaves the board.
    #[inline]
    pub const fn apply(self, from: Square) -> Option<Square> {
        Square::from_coords(from.row() as i8 + self.d_row, from.col() as i8 + self.d_col)
    }

    /// Returns the move that takes `from` to `to`, if they are a knight's
    /// move apart.
    pub fn between(from: Square, to: Square) -> Option<Self> {
        let d_row = to.row() as i8 - from.row() as i8;
        let d_col = to.col() as i8 - from.col() as i8;
        Self::ALL
            .into_iter()
            .find(|m| m.d_row == d_row && m.d_col == d_col)
    }

    /// Iterates over the on-board knight neighbours of `from`.
    pub fn neighbors(from: Square) -> impl Iterator<Item = Square> {
        Self::ALL.into_iter().filter_map(move |m| m.apply(from))
    }
}

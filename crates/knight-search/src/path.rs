//! Knight path representation.

use knight_core::{KnightMove, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when building a [`Path`] from raw squares.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("a path needs at least one square")]
    Empty,

    #[error("{from} -> {to} at step {step} is not a knight move")]
    NotAKnightMove { step: usize, from: Square, to: Square },
}

/// An ordered sequence of squares, each one knight move from the last.
///
/// A path always holds at least one square. Its length is the number of
/// squares, so a path with `n` squares makes `n - 1` moves.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Path {
    squares: Vec<Square>,
}

impl Path {
    /// Builds a path, checking that every step is a knight move.
    pub fn new(squares: Vec<Square>) -> Result<Self, PathError> {
        if squares.is_empty() {
            return Err(PathError::Empty);
        }
        for (step, pair) in squares.windows(2).enumerate() {
            if KnightMove::between(pair[0], pair[1]).is_none() {
                return Err(PathError::NotAKnightMove {
                    step: step + 1,
                    from: pair[0],
                    to: pair[1],
                });
            }
        }
        Ok(Path { squares })
    }

    /// Wraps squares the search has already connected by knight moves.
    pub(crate) fn from_search(squares: Vec<Square>) -> Self {
        debug_assert!(!squares.is_empty());
        Path { squares }
    }

    /// Returns the squares in order.
    #[inline]
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns the number of squares, including the start.
    #[inline]
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// Always false; a path contains at least its start square.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Returns the number of moves (edges).
    #[inline]
    pub fn move_count(&self) -> usize {
        self.squares.len().saturating_sub(1)
    }

    /// Returns the first square.
    #[inline]
    pub fn start(&self) -> Square {
        self.squares[0]
    }

    /// Returns the last square.
    #[inline]
    pub fn end(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }

    /// Iterates over consecutive `(from, to)` pairs.
    pub fn steps(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.squares.windows(2).map(|w| (w[0], w[1]))
    }

    /// Iterates over the knight moves made along the path.
    pub fn moves(&self) -> impl Iterator<Item = KnightMove> + '_ {
        self.steps()
            .filter_map(|(from, to)| KnightMove::between(from, to))
    }

    /// Returns true if every step is a legal knight move.
    pub fn is_knight_path(&self) -> bool {
        self.steps()
            .all(|(from, to)| KnightMove::between(from, to).is_some())
    }

    /// Returns the squares in algebraic notation.
    pub fn to_algebraic(&self) -> Vec<String> {
        self.squares.iter().map(|sq| sq.to_algebraic()).collect()
    }
}

impl AsRef<[Square]> for Path {
    fn as_ref(&self) -> &[Square] {
        &self.squares
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.squares.iter()
    }
}

impl TryFrom<Vec<Square>> for Path {
    type Error = PathError;

    fn try_from(squares: Vec<Square>) -> Result<Self, Self::Error> {
        Path::new(squares)
    }
}

impl fmt::Debug for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Path({self})")
    }
}

impl fmt::Display for Path {
    /// Formats as `a1 -> b3 -> c5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, sq) in self.squares.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{sq}")?;
        }
        Ok(())
    }
}

//! Algebraic notation parsing and formatting.

use crate::square::{File, Rank, Square};
use std::str::FromStr;
use thiserror::Error;

/// Why a token is not a valid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatIssue {
    #[error("expected a file letter followed by a rank digit")]
    WrongLength,

    #[error("'{0}' is not a file between a and h")]
    BadFile(char),

    #[error("'{0}' is not a rank number")]
    NonNumericRank(char),

    #[error("rank {0} is outside 1-8")]
    RankOutOfRange(u32),
}

/// Errors that can occur when parsing algebraic notation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid square '{token}': {issue}")]
    InvalidFormat { token: String, issue: FormatIssue },
}

impl NotationError {
    fn invalid(token: &str, issue: FormatIssue) -> Self {
        NotationError::InvalidFormat {
            token: token.to_string(),
            issue,
        }
    }

    /// Returns the specific problem with the token.
    pub fn issue(&self) -> FormatIssue {
        match self {
            NotationError::InvalidFormat { issue, .. } => *issue,
        }
    }
}

/// Parses a square from algebraic notation (e.g., "e4").
///
/// The token must be exactly a file letter followed by a single rank digit.
/// Surrounding whitespace is ignored.
pub fn from_algebraic(text: &str) -> Result<Square, NotationError> {
    let token = text.trim();
    let mut chars = token.chars();
    let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
    else {
        return Err(NotationError::invalid(token, FormatIssue::WrongLength));
    };

    let file = File::from_char(file_char)
        .ok_or_else(|| NotationError::invalid(token, FormatIssue::BadFile(file_char)))?;
    let number = rank_char
        .to_digit(10)
        .ok_or_else(|| NotationError::invalid(token, FormatIssue::NonNumericRank(rank_char)))?;
    let rank = Rank::from_number(number)
        .ok_or_else(|| NotationError::invalid(token, FormatIssue::RankOutOfRange(number)))?;

    Ok(Square::from_file_rank(file, rank))
}

/// Formats zero-based `(row, col)` as algebraic notation.
///
/// Returns `None` when the coordinates are off the board.
pub fn to_algebraic(row: u8, col: u8) -> Option<String> {
    Square::new(row, col).map(Square::to_algebraic)
}

impl FromStr for Square {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_algebraic(s)
    }
}

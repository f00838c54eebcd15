//! Core types for knight path finding.
//!
//! This crate provides the coordinate layer shared by the search engine and
//! the renderers:
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`is_valid`] for bounds checks on raw (row, col) pairs
//! - [`from_algebraic`] and [`to_algebraic`] for notation conversion
//! - [`KnightMove`] for the eight knight displacements

mod knight;
mod notation;
mod square;

pub use knight::KnightMove;
pub use notation::{from_algebraic, to_algebraic, FormatIssue, NotationError};
pub use square::{is_valid, File, Rank, Square, BOARD_SIZE};

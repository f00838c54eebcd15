//! Shortest knight paths on an 8x8 board.
//!
//! This crate provides:
//! - [`find_shortest_paths`] - every minimum-length knight route between two squares
//! - [`PathFinder`] - the same search with options, statistics, and an observer
//! - [`Path`] - an immutable sequence of squares joined by knight moves
//! - [`SquareSet`] and [`KnightGraph`] - the knight-move graph as 64-bit sets
//!
//! # Architecture
//!
//! The search is a breadth-first search that carries the full path with each
//! queue entry. A square may be queued again when it is reached by another
//! route of the same length, which is what lets every shortest path survive
//! instead of only the first one discovered. Strictly longer partial paths
//! are dropped.
//!
//! # Example
//!
//! ```
//! use knight_core::Square;
//! use knight_search::find_shortest_paths;
//!
//! let paths = find_shortest_paths(Square::A1, Square::H8);
//! assert!(paths.iter().all(|p| p.move_count() == 6));
//! println!("{}", paths[0]);
//! ```

mod graph;
mod observer;
mod path;
mod search;
mod square_set;

pub use graph::{distances_from, knight_targets, KnightGraph, MoveGraph};
pub use observer::{NoopObserver, SearchObserver, TargetEvent};
pub use path::{Path, PathError};
pub use search::{
    find_shortest_paths, knight_distance, PathFinder, Revisit, SearchOptions, SearchOutcome,
    SearchStats,
};
pub use square_set::SquareSet;

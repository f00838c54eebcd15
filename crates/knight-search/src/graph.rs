//! The knight-move graph.

use crate::SquareSet;
use knight_core::{KnightMove, Square};
use std::collections::VecDeque;

/// Precomputed knight targets for every square.
const KNIGHT_TARGETS: [SquareSet; Square::COUNT] = compute_knight_targets();

/// Returns the squares a knight on `sq` can reach in one move.
#[inline]
pub fn knight_targets(sq: Square) -> SquareSet {
    KNIGHT_TARGETS[sq.index() as usize]
}

/// Computes knight targets for all squares at compile time.
const fn compute_knight_targets() -> [SquareSet; Square::COUNT] {
    let mut targets = [SquareSet::EMPTY; Square::COUNT];
    let mut index = 0u8;

    while (index as usize) < Square::COUNT {
        let from = match Square::from_index(index) {
            Some(sq) => sq,
            None => unreachable!(),
        };
        let mut bits = 0u64;
        let mut i = 0;
        while i < KnightMove::ALL.len() {
            if let Some(to) = KnightMove::ALL[i].apply(from) {
                bits |= 1u64 << to.index();
            }
            i += 1;
        }
        targets[index as usize] = SquareSet(bits);
        index += 1;
    }

    targets
}

/// Adjacency for the search.
///
/// The search only ever asks for the neighbours of a square, so any board
/// topology can be plugged in. [`KnightGraph`] is the standard 8x8 board.
pub trait MoveGraph {
    /// Returns the squares reachable from `from` in one move.
    fn neighbors(&self, from: Square) -> SquareSet;
}

/// The knight-move graph of the standard 8x8 board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KnightGraph;

impl MoveGraph for KnightGraph {
    #[inline]
    fn neighbors(&self, from: Square) -> SquareSet {
        knight_targets(from)
    }
}

impl<G: MoveGraph + ?Sized> MoveGraph for &G {
    #[inline]
    fn neighbors(&self, from: Square) -> SquareSet {
        (**self).neighbors(from)
    }
}

/// Returns the number of moves from `start` to every square, or `None` for
/// squares that cannot be reached.
pub fn distances_from<G: MoveGraph + ?Sized>(
    graph: &G,
    start: Square,
) -> [Option<usize>; Square::COUNT] {
    let mut distances = [None; Square::COUNT];
    let mut queue = VecDeque::with_capacity(Square::COUNT);

    distances[start.index() as usize] = Some(0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let next = distances[current.index() as usize].map_or(0, |d| d + 1);
        for neighbor in graph.neighbors(current) {
            let slot = &mut distances[neighbor.index() as usize];
            if slot.is_none() {
                *slot = Some(next);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}

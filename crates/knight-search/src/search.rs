//! Multi-path breadth-first search.

use crate::graph::{distances_from, KnightGraph, MoveGraph};
use crate::observer::{NoopObserver, SearchObserver, TargetEvent};
use crate::Path;
use knight_core::Square;
use std::cmp::Ordering;
use std::collections::VecDeque;

/// When a square that has already been queued may be queued again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Revisit {
    /// Re-queue when the new path is no longer than the best one recorded.
    /// Every shortest path is found.
    #[default]
    SameLength,
    /// Re-queue only when the new path is strictly shorter. Finds a single
    /// shortest path.
    Never,
}

impl Revisit {
    #[inline]
    fn admits(self, candidate: usize, best: usize) -> bool {
        match self {
            Revisit::SameLength => candidate <= best,
            Revisit::Never => candidate < best,
        }
    }
}

/// Search configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub revisit: Revisit,
}

/// Counters collected during a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Squares whose neighbours were examined.
    pub expanded: usize,
    /// Paths pushed onto the queue, including the seed.
    pub enqueued: usize,
    /// Queued paths dropped for being longer than the best result.
    pub pruned: usize,
}

/// The result of a search: every shortest path plus counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub paths: Vec<Path>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Number of moves in each path, or `None` when the target is unreachable.
    pub fn distance(&self) -> Option<usize> {
        self.paths.first().map(Path::move_count)
    }

    /// Returns true when no path was found.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Finds shortest paths over a [`MoveGraph`].
///
/// Each call builds its own queue and length table, so a `PathFinder` can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct PathFinder<G = KnightGraph> {
    graph: G,
    options: SearchOptions,
}

impl PathFinder<KnightGraph> {
    /// Creates a finder for the standard 8x8 knight graph.
    pub fn new() -> Self {
        Self::with_graph(KnightGraph)
    }
}

impl Default for PathFinder<KnightGraph> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: MoveGraph> PathFinder<G> {
    /// Creates a finder over a custom graph.
    pub fn with_graph(graph: G) -> Self {
        PathFinder {
            graph,
            options: SearchOptions::default(),
        }
    }

    /// Replaces the search options.
    #[must_use]
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns every shortest path from `start` to `end`.
    ///
    /// All returned paths have the same length. `start == end` yields the
    /// single one-square path; an unreachable target yields an empty vector.
    pub fn find_shortest_paths(&self, start: Square, end: Square) -> Vec<Path> {
        self.search(start, end, &mut NoopObserver).paths
    }

    /// Runs the search, reporting progress to `observer`.
    pub fn search<O: SearchObserver + ?Sized>(
        &self,
        start: Square,
        end: Square,
        observer: &mut O,
    ) -> SearchOutcome {
        let mut stats = SearchStats::default();
        let mut queue: VecDeque<(Square, Vec<Square>)> = VecDeque::new();
        // Length of the shortest path seen so far when each square was queued.
        let mut best = [usize::MAX; Square::COUNT];
        let mut min_length = usize::MAX;
        let mut results: Vec<Path> = Vec::new();

        queue.push_back((start, vec![start]));
        stats.enqueued += 1;

        while let Some((current, path)) = queue.pop_front() {
            let length = path.len();

            if length > min_length {
                stats.pruned += 1;
                observer.on_prune(current, length, min_length);
                continue;
            }

            if current == end {
                let path = Path::from_search(path);
                match length.cmp(&min_length) {
                    Ordering::Less => {
                        min_length = length;
                        results.clear();
                        observer.on_target(&path, TargetEvent::NewShortest);
                        results.push(path);
                    }
                    Ordering::Equal => {
                        observer.on_target(&path, TargetEvent::Tied);
                        results.push(path);
                    }
                    Ordering::Greater => {}
                }
                continue;
            }

            stats.expanded += 1;
            observer.on_expand(current, length);

            let next_length = length + 1;
            for neighbor in self.graph.neighbors(current) {
                let slot = &mut best[neighbor.index() as usize];
                if !self.options.revisit.admits(next_length, *slot) {
                    continue;
                }
                *slot = next_length;

                let mut next = Vec::with_capacity(next_length);
                next.extend_from_slice(&path);
                next.push(neighbor);
                queue.push_back((neighbor, next));
                stats.enqueued += 1;
                observer.on_enqueue(neighbor, next_length);
            }
        }

        SearchOutcome {
            paths: results,
            stats,
        }
    }

    /// Number of moves on a shortest path, or `None` when unreachable.
    pub fn distance(&self, start: Square, end: Square) -> Option<usize> {
        distances_from(&self.graph, start)[end.index() as usize]
    }
}

/// Returns every shortest knight path from `start` to `end` on the 8x8 board.
pub fn find_shortest_paths(start: Square, end: Square) -> Vec<Path> {
    PathFinder::new().find_shortest_paths(start, end)
}

/// Returns the knight distance between two squares on the 8x8 board.
pub fn knight_distance(start: Square, end: Square) -> Option<usize> {
    PathFinder::new().distance(start, end)
}

//! Hooks for watching a search as it runs.
//!
//! The search itself never logs. Callers that want progress reporting pass
//! an observer; the default methods do nothing.

use crate::Path;
use knight_core::Square;

/// What happened when a path reached the target square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetEvent {
    /// Shorter than anything seen before; earlier results were dropped.
    NewShortest,
    /// Same length as the current results; appended.
    Tied,
}

/// Receives search events.
pub trait SearchObserver {
    /// A square is about to be expanded with a path of `length` squares.
    fn on_expand(&mut self, _square: Square, _length: usize) {}

    /// A neighbour was queued with a path of `length` squares.
    fn on_enqueue(&mut self, _square: Square, _length: usize) {}

    /// A queued path was dropped because it is longer than the best result.
    fn on_prune(&mut self, _square: Square, _length: usize, _best: usize) {}

    /// A path reached the target square and was kept.
    fn on_target(&mut self, _path: &Path, _event: TargetEvent) {}
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_expand(&mut self, square: Square, length: usize) {
        (**self).on_expand(square, length);
    }

    fn on_enqueue(&mut self, square: Square, length: usize) {
        (**self).on_enqueue(square, length);
    }

    fn on_prune(&mut self, square: Square, length: usize, best: usize) {
        (**self).on_prune(square, length, best);
    }

    fn on_target(&mut self, path: &Path, event: TargetEvent) {
        (**self).on_target(path, event);
    }
}

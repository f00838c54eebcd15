//! Log setup and the search observer that reports through `tracing`.

use knight_core::Square;
use knight_search::{Path, SearchObserver, TargetEvent};
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr so stdout only carries
/// the path report.
///
/// `RUST_LOG` takes precedence; otherwise the level is `info`, or `debug`
/// when `verbose` is set.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

/// Forwards search events to `tracing` at trace and debug level.
#[derive(Debug, Default)]
pub struct TracingObserver {
    targets: usize,
}

impl TracingObserver {
    /// Number of paths that reached the target and were kept, including
    /// ones later replaced by a shorter path.
    pub fn targets(&self) -> usize {
        self.targets
    }
}

impl SearchObserver for TracingObserver {
    fn on_expand(&mut self, square: Square, length: usize) {
        tracing::trace!(%square, length, "expanding");
    }

    fn on_prune(&mut self, square: Square, length: usize, best: usize) {
        tracing::trace!(%square, length, best, "pruned longer path");
    }

    fn on_target(&mut self, path: &Path, event: TargetEvent) {
        self.targets += 1;
        match event {
            TargetEvent::NewShortest => {
                tracing::debug!(moves = path.move_count(), %path, "new shortest path")
            }
            TargetEvent::Tied => tracing::debug!(%path, "another shortest path"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_search::PathFinder;

    #[test]
    fn observer_counts_targets() {
        let mut observer = TracingObserver::default();
        let outcome = PathFinder::new().search(Square::A1, "c3".parse().unwrap(), &mut observer);
        assert_eq!(observer.targets(), outcome.paths.len());
    }
}

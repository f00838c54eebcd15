//! Errors raised while writing rendered artifacts.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur when rendering or saving an artifact.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Failed to write an output file.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The board template could not be rendered.
    #[error("failed to render board template: {0}")]
    Template(#[from] askama::Error),
    /// The Graphviz `dot` executable could not be started.
    #[error("graphviz `dot` could not be started: {0}")]
    GraphvizUnavailable(#[source] std::io::Error),
    /// Graphviz ran but reported a failure.
    #[error("graphviz `dot` exited with {0}")]
    GraphvizFailed(ExitStatus),
}

impl RenderError {
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RenderError::Write {
            path: path.into(),
            source,
        }
    }
}

//! Renderers for knight path search results.
//!
//! Every renderer takes the paths by shared reference and never changes
//! them:
//! - [`report`] - one `Path: a1 -> c2 -> ...` line per path
//! - [`dot`] - a Graphviz digraph with all 64 squares and every step as an edge
//! - [`board`] - an SVG checkerboard with step numbers and arrows

pub mod board;
pub mod dot;
mod error;
pub mod report;

pub use board::BoardOverlay;
pub use dot::{render_png, GraphExport};
pub use error::RenderError;
pub use report::{format_path, write_report};

//! Graphviz export of knight paths.
//!
//! The graph has one circular node per board square, labelled in algebraic
//! notation, and one directed edge for every step of every path. Steps shared
//! by several paths appear once per path.

use crate::RenderError;
use knight_core::Square;
use knight_search::Path;
use std::fmt::Write as _;
use std::path::Path as FsPath;
use std::process::Command;

/// Name of the generated digraph.
pub const GRAPH_NAME: &str = "KnightPaths_Combined";

/// A directed graph of every step in a set of paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphExport {
    edges: Vec<(Square, Square)>,
}

impl GraphExport {
    /// Collects the steps of every path, in path order.
    pub fn from_paths(paths: &[Path]) -> Self {
        let edges = paths.iter().flat_map(|p| p.steps()).collect();
        GraphExport { edges }
    }

    /// Returns the edges in the order they will be written.
    pub fn edges(&self) -> &[(Square, Square)] {
        &self.edges
    }

    /// Returns the graph in Graphviz DOT syntax.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "digraph {GRAPH_NAME} {{");
        for sq in Square::all() {
            let _ = writeln!(
                out,
                "\t{} [label={} shape=circle]",
                node_id(sq),
                sq.to_algebraic()
            );
        }
        for (from, to) in &self.edges {
            let _ = writeln!(out, "\t{} -> {}", node_id(*from), node_id(*to));
        }
        out.push_str("}\n");
        out
    }

    /// Writes the DOT source to `path`.
    pub fn write_dot(&self, path: impl AsRef<FsPath>) -> Result<(), RenderError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_dot()).map_err(|e| RenderError::write(path, e))?;
        tracing::debug!(path = %path.display(), edges = self.edges.len(), "wrote DOT graph");
        Ok(())
    }
}

/// Renders a DOT file to PNG with the Graphviz `dot` executable.
pub fn render_png(dot_path: &FsPath, png_path: &FsPath) -> Result<(), RenderError> {
    let status = Command::new("dot")
        .arg("-Tpng")
        .arg(dot_path)
        .arg("-o")
        .arg(png_path)
        .status()
        .map_err(RenderError::GraphvizUnavailable)?;
    if !status.success() {
        return Err(RenderError::GraphvizFailed(status));
    }
    tracing::debug!(path = %png_path.display(), "rendered PNG graph");
    Ok(())
}

/// Node identifiers are the quoted `row,col` pair.
fn node_id(sq: Square) -> String {
    format!("\"{},{}\"", sq.row(), sq.col())
}

#[cfg(test)]
mod tests {
    use super::*;
    use knight_search::find_shortest_paths;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn empty_graph_still_has_every_square() {
        let dot = GraphExport::from_paths(&[]).to_dot();
        assert!(dot.starts_with("digraph KnightPaths_Combined {\n"));
        assert!(dot.ends_with("}\n"));
        assert_eq!(dot.matches("shape=circle").count(), 64);
        assert!(!dot.contains("->"));
    }

    #[test]
    fn nodes_are_labelled_algebraically() {
        let dot = GraphExport::from_paths(&[]).to_dot();
        assert!(dot.contains("\t\"0,0\" [label=a1 shape=circle]\n"));
        assert!(dot.contains("\t\"7,7\" [label=h8 shape=circle]\n"));
        assert!(dot.contains("\t\"2,1\" [label=b3 shape=circle]\n"));
    }

    #[test]
    fn one_edge_per_step() {
        let paths = find_shortest_paths(sq("a1"), sq("c3"));
        let export = GraphExport::from_paths(&paths);
        assert_eq!(export.edges().len(), 16 * 4);

        let dot = export.to_dot();
        assert_eq!(dot.matches(" -> ").count(), 64);
        assert!(dot.contains("\t\"0,0\" -> \"2,1\"\n") || dot.contains("\t\"0,0\" -> \"1,2\"\n"));
    }

    #[test]
    fn trivial_path_has_no_edges() {
        let paths = find_shortest_paths(sq("e4"), sq("e4"));
        assert!(GraphExport::from_paths(&paths).edges().is_empty());
    }

    #[test]
    fn write_dot_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("paths.dot");
        let paths = find_shortest_paths(sq("a1"), sq("b3"));

        GraphExport::from_paths(&paths).write_dot(&file).unwrap();

        let written = std::fs::read_to_string(&file).unwrap();
        assert!(written.contains("\t\"0,0\" -> \"2,1\"\n"));
    }

    #[test]
    fn write_dot_reports_bad_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("missing").join("paths.dot");
        let err = GraphExport::from_paths(&[]).write_dot(&file).unwrap_err();
        assert!(matches!(err, RenderError::Write { .. }));
        assert!(err.to_string().contains("paths.dot"));
    }
}

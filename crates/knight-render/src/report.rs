//! Plain text path reports.

use knight_search::Path;
use std::io::Write;

/// Formats a path as `Path: a1 -> c2 -> e3`.
pub fn format_path(path: &Path) -> String {
    format!("Path: {path}")
}

/// Writes one line per path, or a single notice when there are none.
pub fn write_report<W: Write>(mut out: W, paths: &[Path]) -> std::io::Result<()> {
    if paths.is_empty() {
        writeln!(out, "No path found.")?;
        return Ok(());
    }
    for path in paths {
        writeln!(out, "{}", format_path(path))?;
    }
    Ok(())
}

//! Knight Paths
//!
//! Finds every shortest knight route between two squares, prints them, and
//! writes a Graphviz graph and an SVG board overlay of the result.

mod config;
mod input;
mod logging;

use clap::Parser;
use knight_render::{render_png, write_report, BoardOverlay, GraphExport};
use knight_search::{Path, PathFinder};
use logging::TracingObserver;
use std::path::PathBuf;
use std::process::ExitCode;

/// Solve the knight's shortest path problem.
#[derive(Parser, Debug)]
#[command(name = "knight-paths")]
#[command(about = "Solve the knight's shortest path problem")]
struct Cli {
    /// Start position (e.g., a1)
    #[arg(long)]
    start: Option<String>,

    /// End position (e.g., h8)
    #[arg(long)]
    end: Option<String>,

    /// Path to JSON config file with "start" and "end" keys
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base name for the graph output; writes <GRAPH>.dot
    #[arg(long, default_value = "knight_paths")]
    graph: PathBuf,

    /// Board overlay output file
    #[arg(long, default_value = "knight_paths_board.svg")]
    board: PathBuf,

    /// Also render the graph to <GRAPH>.png with Graphviz
    #[arg(long)]
    png: bool,

    /// Print the paths only; write no files
    #[arg(long, conflicts_with = "png")]
    no_render: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let positions = input::gather_positions(
        cli.start.clone(),
        cli.end.clone(),
        cli.config.as_deref(),
        std::io::stdin().lock(),
        std::io::stdout(),
    )?;
    let (start, end) = input::parse_positions(&positions)?;

    tracing::info!("Finding shortest paths from {} to {}...", start, end);

    let mut observer = TracingObserver::default();
    let outcome = PathFinder::new().search(start, end, &mut observer);
    tracing::debug!(
        expanded = outcome.stats.expanded,
        enqueued = outcome.stats.enqueued,
        pruned = outcome.stats.pruned,
        targets = observer.targets(),
        "search finished"
    );
    tracing::info!("Found {} shortest path(s).", outcome.paths.len());

    write_report(std::io::stdout().lock(), &outcome.paths)?;

    if !cli.no_render {
        render_outputs(&cli, &outcome.paths);
    }
    Ok(())
}

/// Writes the graph and board files. Failures are logged and skipped.
fn render_outputs(cli: &Cli, paths: &[Path]) {
    let dot_path = graph_output(&cli.graph, "dot");
    match GraphExport::from_paths(paths).write_dot(&dot_path) {
        Ok(()) => {
            tracing::info!("Combined graph saved as {}", dot_path.display());
            if cli.png {
                let png_path = graph_output(&cli.graph, "png");
                match render_png(&dot_path, &png_path) {
                    Ok(()) => tracing::info!("Graph image saved as {}", png_path.display()),
                    Err(e) => tracing::warn!("Skipping graph image: {}", e),
                }
            }
        }
        Err(e) => tracing::warn!("Skipping graph: {}", e),
    }

    match BoardOverlay::from_paths(paths).write_svg(&cli.board) {
        Ok(()) => tracing::info!("Board overlay saved as {}", cli.board.display()),
        Err(e) => tracing::warn!("Skipping board overlay: {}", e),
    }
}

/// Appends `.{extension}` to the graph base name, keeping any dots it has.
fn graph_output(base: &std::path::Path, extension: &str) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(".");
    name.push(extension);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::ffi::OsString;

    #[test]
    fn test_cli_parses_start_and_end() {
        let cli = Cli::try_parse_from(["knight-paths", "--start", "a1", "--end", "h8"]).unwrap();
        assert_eq!(cli.start.as_deref(), Some("a1"));
        assert_eq!(cli.end.as_deref(), Some("h8"));
        assert!(cli.config.is_none());
        assert!(!cli.png);
        assert!(!cli.no_render);
    }

    #[test]
    fn test_cli_defaults_output_names() {
        let cli = Cli::try_parse_from(["knight-paths"]).unwrap();
        assert_eq!(cli.graph, PathBuf::from("knight_paths"));
        assert_eq!(cli.board, PathBuf::from("knight_paths_board.svg"));
        assert!(cli.start.is_none());
        assert!(cli.end.is_none());
    }

    #[test]
    fn test_cli_parses_config_and_verbose() {
        let cli = Cli::try_parse_from(["knight-paths", "--config", "run.json", "-v"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("run.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_rejects_png_with_no_render() {
        let result = Cli::try_parse_from(["knight-paths", "--png", "--no-render"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_help_mentions_positions() {
        let mut cmd = Cli::command();
        let help = cmd.render_help().to_string();
        assert!(help.contains("--start"));
        assert!(help.contains("--end"));
        assert!(help.contains("--config"));
    }

    #[test]
    fn test_render_outputs_writes_files() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            OsString::from("knight-paths"),
            OsString::from("--graph"),
            dir.path().join("graph").into_os_string(),
            OsString::from("--board"),
            dir.path().join("board.svg").into_os_string(),
        ])
        .unwrap();
        let paths = knight_search::find_shortest_paths(
            "a1".parse().unwrap(),
            "c3".parse().unwrap(),
        );

        render_outputs(&cli, &paths);

        assert!(dir.path().join("graph.dot").exists());
        assert!(dir.path().join("board.svg").exists());
        assert!(!dir.path().join("graph.png").exists());
    }

    #[test]
    fn test_render_outputs_keeps_dotted_graph_name() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            OsString::from("knight-paths"),
            OsString::from("--graph"),
            dir.path().join("run.v2").into_os_string(),
            OsString::from("--board"),
            dir.path().join("b.svg").into_os_string(),
        ])
        .unwrap();
        let paths = knight_search::find_shortest_paths(
            "a1".parse().unwrap(),
            "h8".parse().unwrap(),
        );

        render_outputs(&cli, &paths);

        assert!(dir.path().join("run.v2.dot").exists());
        assert!(!dir.path().join("run.dot").exists());
        assert!(dir.path().join("b.svg").exists());
    }

    #[test]
    fn test_graph_output_appends_extension() {
        assert_eq!(
            graph_output(std::path::Path::new("knight_paths"), "dot"),
            PathBuf::from("knight_paths.dot")
        );
        assert_eq!(
            graph_output(std::path::Path::new("out/knight_paths.final"), "png"),
            PathBuf::from("out/knight_paths.final.png")
        );
    }
}

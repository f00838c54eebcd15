//! SVG board overlay for knight paths.
//!
//! Draws the 8x8 checkerboard with rank 8 at the top, numbers every visited
//! square with its step index, and draws an arrow for every step of every
//! path.

use crate::RenderError;
use askama::Template;
use knight_core::{File, Rank, Square};
use knight_search::Path;
use std::path::Path as FsPath;

/// Side length of one square in SVG units.
pub const CELL: u32 = 60;
/// Space reserved around the board for the title and axis labels.
pub const MARGIN: u32 = 40;

const LIGHT: &str = "#f0d9b5";
const DARK: &str = "#b58863";

/// One board square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareView {
    pub x: u32,
    pub y: u32,
    pub class: &'static str,
    pub fill: &'static str,
}

/// A step number drawn at the centre of a square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepLabel {
    pub square: Square,
    pub x: u32,
    pub y: u32,
    pub step: usize,
}

/// An arrow from one square centre to another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrowView {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

/// A file letter or rank number next to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLabel {
    pub x: u32,
    pub y: u32,
    pub text: String,
}

/// SVG board template.
#[derive(Debug, Template)]
#[template(path = "board.svg")]
pub struct BoardOverlay {
    pub size: u32,
    pub cell: u32,
    pub margin: u32,
    pub title: String,
    pub squares: Vec<SquareView>,
    pub labels: Vec<StepLabel>,
    pub arrows: Vec<ArrowView>,
    pub files: Vec<AxisLabel>,
    pub ranks: Vec<AxisLabel>,
}

impl BoardOverlay {
    /// Builds the overlay for a set of paths.
    ///
    /// When several paths visit the same square, the label from the last
    /// path wins.
    #[must_use]
    pub fn from_paths(paths: &[Path]) -> Self {
        let board = CELL * 8;
        let size = board + 2 * MARGIN;

        let squares = Square::all()
            .map(|sq| {
                let (x, y) = top_left(sq);
                let (class, fill) = if sq.is_dark() {
                    ("dark", DARK)
                } else {
                    ("light", LIGHT)
                };
                SquareView { x, y, class, fill }
            })
            .collect();

        let mut steps: [Option<usize>; Square::COUNT] = [None; Square::COUNT];
        for path in paths {
            for (step, sq) in path.squares().iter().enumerate() {
                steps[sq.index() as usize] = Some(step);
            }
        }
        let labels = Square::all()
            .filter_map(|sq| {
                let step = steps[sq.index() as usize]?;
                let (x, y) = center(sq);
                Some(StepLabel {
                    square: sq,
                    x,
                    y,
                    step,
                })
            })
            .collect();

        let arrows = paths
            .iter()
            .flat_map(|p| p.steps())
            .map(|(from, to)| {
                let (x1, y1) = center(from);
                let (x2, y2) = center(to);
                ArrowView { x1, y1, x2, y2 }
            })
            .collect();

        let files = File::ALL
            .iter()
            .map(|file| AxisLabel {
                x: MARGIN + file.index() as u32 * CELL + CELL / 2,
                y: MARGIN + board + MARGIN / 2,
                text: file.to_string(),
            })
            .collect();
        let ranks = Rank::ALL
            .iter()
            .map(|rank| AxisLabel {
                x: MARGIN / 2,
                y: MARGIN + (7 - rank.index() as u32) * CELL + CELL / 2,
                text: rank.to_string(),
            })
            .collect();

        BoardOverlay {
            size,
            cell: CELL,
            margin: MARGIN,
            title: "Knight's Path".to_string(),
            squares,
            labels,
            arrows,
            files,
            ranks,
        }
    }

    /// Renders and writes the SVG to `path`.
    pub fn write_svg(&self, path: impl AsRef<FsPath>) -> Result<(), RenderError> {
        let path = path.as_ref();
        let svg = self.render()?;
        std::fs::write(path, svg).map_err(|e| RenderError::write(path, e))?;
        tracing::debug!(path = %path.display(), arrows = self.arrows.len(), "wrote board overlay");
        Ok(())
    }
}

/// Top-left corner of a square, rank 8 drawn first.
fn top_left(sq: Square) -> (u32, u32) {
    let x = MARGIN + sq.col() as u32 * CELL;
    let y = MARGIN + (7 - sq.row() as u32) * CELL;
    (x, y)
}

fn center(sq: Square) -> (u32, u32) {
    let (x, y) = top_left(sq);
    (x + CELL / 2, y + CELL / 2)
}

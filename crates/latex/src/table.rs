use confuser_sheet::{CellValue, Grid};
use std::fmt;

use crate::error::Result;

const INDENT: &str = "    ";
const PREDICTED: &str = "Predicted";
const OBSERVED: &str = "Observed";

/// Render `grid` as a LaTeX `table` holding a confusion matrix.
///
/// Each returned string is one source line without a trailing newline.
/// An empty grid renders to no lines at all.
///
/// With `W` the header width and `R` the row count, the output has
/// `14 + 2 * (R - 2)` lines. The bottom rule spans `1-W` while every other
/// full-width rule spans `1-(W+1)`.
#[must_use]
pub fn render_confusion_matrix(grid: &Grid) -> Vec<String> {
    let Some(header) = grid.header().filter(|h| !h.is_empty()) else {
        tracing::warn!("not enough data to render a confusion matrix");
        return Vec::new();
    };

    let w = header.len();
    let mut lines = Vec::with_capacity(14 + 2 * grid.height().saturating_sub(2));

    lines.push("\\begin{table}[H]%".to_string());
    lines.push(format!("{INDENT}\\centering"));
    lines.push(format!(
        "{INDENT}\\begin{{tabular}}{{|cc|{}}}%",
        "c|".repeat(w - 1)
    ));
    lines.push(cline(1, w + 1));
    lines.push(format!(
        "{INDENT}& & \\multicolumn{{{}}}{{c|}}{{{PREDICTED}}} \\\\",
        w - 1
    ));
    lines.push(cline(3, w + 1));
    lines.push(format!("{INDENT}& {}\\\\", cells(&header[1..])));
    lines.push(cline(1, w + 1));

    for (i, row) in grid.body().enumerate() {
        let first_cell = if i == 0 {
            format!(
                "\\multicolumn{{1}}{{|c}}{{\\multirow{{{w}}}{{*}}{{\\begin{{sideways}}{OBSERVED}\\end{{sideways}}}}}}"
            )
        } else {
            lines.push(cline(2, w + 1));
            "\\multicolumn{1}{|c}{}".to_string()
        };

        let (label, counts) = match row.split_first() {
            Some((label, counts)) => (label.to_string(), counts),
            None => (String::new(), &[][..]),
        };

        lines.push(format!(
            "{INDENT}{first_cell} & \\multicolumn{{1}}{{|c|}}{{{label}}}{}\\\\",
            cells(counts)
        ));
    }

    lines.push(cline(1, w));
    lines.push(format!("{INDENT}\\end{{tabular}}%"));
    lines.push(format!("{INDENT}\\caption[Short Caption]{{Long Caption}}%"));
    lines.push(format!("{INDENT}\\label{{tab:Label}}"));
    lines.push("\\end{table}".to_string());

    lines
}

fn cline(from: usize, to: usize) -> String {
    format!("{INDENT}\\cline{{{from}-{to}}}%")
}

/// `" & a & b"` for each cell
fn cells(values: &[CellValue]) -> String {
    values.iter().map(|v| format!(" & {v}")).collect()
}

/// A rendered confusion-matrix table
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LatexTable {
    lines: Vec<String>,
}

impl LatexTable {
    /// Render a grid
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        LatexTable {
            lines: render_confusion_matrix(grid),
        }
    }

    /// Render raw rows, failing if they are not rectangular
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let grid = Grid::new(rows)?;
        Ok(Self::from_grid(&grid))
    }

    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The full LaTeX source, lines joined with `\n`
    #[must_use]
    pub fn to_source(&self) -> String {
        self.lines.join("\n")
    }
}

impl fmt::Display for LatexTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_source())
    }
}

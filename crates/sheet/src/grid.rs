//! Confusion-matrix grid extraction.
//!
//! A [`GridSource`] offers two candidate regions: the current selection and
//! the sheet's populated data range. [`extract_grid`] takes the first one that
//! is at least [`MIN_GRID_SIZE`] cells in both directions.

use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::range::CellRange;
use crate::sheet::Sheet;

/// Smallest usable height and width: one header row/column plus two classes
pub const MIN_GRID_SIZE: usize = 3;

/// A rectangular block of cells laid out as a confusion matrix.
///
/// Row 0 holds the predicted-class labels (its first cell is unused), column 0
/// of every later row holds an observed-class label, and the rest are counts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    rows: Vec<Vec<CellValue>>,
}

impl Grid {
    /// The empty grid, signalling "not enough data"
    #[must_use]
    pub fn empty() -> Self {
        Grid::default()
    }

    /// Build a grid from rows, rejecting rows of differing length
    pub fn new(rows: Vec<Vec<CellValue>>) -> Result<Self> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if let Some((row, bad)) = rows
                .iter()
                .enumerate()
                .find(|(_, r)| r.len() != expected)
            {
                return Err(SheetError::NotRectangular {
                    row,
                    expected,
                    actual: bad.len(),
                });
            }
        }
        Ok(Grid { rows })
    }

    /// Build a grid from plain values (test and library convenience)
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Result<Self> {
        Grid::new(
            data.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }

    /// Number of rows
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns (length of the header row)
    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }

    /// Row 0: the predicted-class header row
    #[must_use]
    pub fn header(&self) -> Option<&[CellValue]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows 1.., each starting with its observed-class label
    pub fn body(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().skip(1).map(Vec::as_slice)
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }
}

impl TryFrom<Sheet> for Grid {
    type Error = SheetError;

    fn try_from(sheet: Sheet) -> Result<Self> {
        Grid::new(sheet.into_data())
    }
}

/// Something a grid can be extracted from
pub trait GridSource {
    /// The currently selected region, if there is one
    fn selection(&self) -> Option<Sheet>;

    /// The full populated region of the sheet
    fn data_range(&self) -> Sheet;
}

/// A sheet plus an optional selected range
#[derive(Debug, Clone, Copy)]
pub struct Selection<'a> {
    sheet: &'a Sheet,
    range: Option<CellRange>,
}

impl<'a> Selection<'a> {
    /// Select the whole sheet (no explicit range)
    #[must_use]
    pub fn whole(sheet: &'a Sheet) -> Self {
        Selection { sheet, range: None }
    }

    /// Select `range` within `sheet`
    #[must_use]
    pub fn range(sheet: &'a Sheet, range: CellRange) -> Self {
        Selection {
            sheet,
            range: Some(range),
        }
    }
}

impl GridSource for Selection<'_> {
    fn selection(&self) -> Option<Sheet> {
        self.range.map(|range| self.sheet.slice(&range))
    }

    fn data_range(&self) -> Sheet {
        match self.sheet.used_range() {
            Some(range) => self.sheet.slice(&range),
            None => Sheet::with_name(self.sheet.name()),
        }
    }
}

fn large_enough(sheet: &Sheet) -> bool {
    sheet.row_count() >= MIN_GRID_SIZE && sheet.col_count() >= MIN_GRID_SIZE
}

/// Pick the region to render: the selection if it is at least 3x3, else the
/// sheet's data range if that is, else an empty grid.
///
/// Undersized input is not an error. `Err` means a source handed back a
/// region whose rows differ in length.
pub fn extract_grid(source: &impl GridSource) -> Result<Grid> {
    let region = match source.selection() {
        Some(selected) if large_enough(&selected) => selected,
        selected => {
            if let Some(small) = selected {
                tracing::debug!(
                    rows = small.row_count(),
                    cols = small.col_count(),
                    "selection too small, falling back to data range"
                );
            }
            let full = source.data_range();
            if !large_enough(&full) {
                tracing::debug!(
                    rows = full.row_count(),
                    cols = full.col_count(),
                    "data range too small"
                );
                return Ok(Grid::empty());
            }
            full
        }
    };

    Grid::try_from(region)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> Sheet {
        Sheet::from_data(vec![
            vec!["", "A", "B"],
            vec!["A", "5", "1"],
            vec!["B", "2", "7"],
        ])
    }

    #[test]
    fn test_grid_rejects_ragged_rows() {
        let err = Grid::from_data(vec![vec![1, 2, 3], vec![1, 2]]).unwrap_err();
        assert!(matches!(
            err,
            SheetError::NotRectangular {
                row: 1,
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn test_grid_shape() {
        let grid = Grid::try_from(matrix()).unwrap();
        assert_eq!((grid.height(), grid.width()), (3, 3));
        assert_eq!(grid.header().unwrap()[1].to_string(), "A");
        assert_eq!(grid.body().count(), 2);
        assert!(Grid::empty().is_empty());
    }

    #[test]
    fn test_whole_sheet_uses_data_range() {
        let sheet = matrix();
        let grid = extract_grid(&Selection::whole(&sheet)).unwrap();
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.rows()[2][2].to_string(), "7");
    }

    #[test]
    fn test_large_selection_is_used_as_is() {
        let sheet = Sheet::from_data(vec![
            vec!["x", "x", "x", "x"],
            vec!["x", "", "P", "Q"],
            vec!["x", "P", "1", "2"],
            vec!["x", "Q", "3", "4"],
        ]);
        let range = CellRange::parse("B2:D4").unwrap();

        let grid = extract_grid(&Selection::range(&sheet, range)).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.rows()[1][0].to_string(), "P");
    }

    #[test]
    fn test_small_selection_falls_back() {
        let sheet = matrix();
        let range = CellRange::parse("A1:E2").unwrap();

        let grid = extract_grid(&Selection::range(&sheet, range)).unwrap();
        assert_eq!((grid.height(), grid.width()), (3, 3));
    }

    #[test]
    fn test_undersized_sheet_yields_empty_grid() {
        let sheet = Sheet::from_data(vec![vec!["", "A"], vec!["A", "1"], vec!["B", "2"]]);
        assert!(extract_grid(&Selection::whole(&sheet)).unwrap().is_empty());
        assert!(extract_grid(&Selection::whole(&Sheet::new()))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_selection_overhanging_sheet_is_kept() {
        let sheet = matrix();
        let range = CellRange::parse("B2:D4").unwrap();

        let grid = extract_grid(&Selection::range(&sheet, range)).unwrap();
        assert_eq!((grid.height(), grid.width()), (3, 3));
        assert_eq!(grid.rows()[0][0].to_string(), "5");
        assert_eq!(grid.rows()[1][1].to_string(), "7");
        assert!(grid.rows()[2].iter().all(CellValue::is_null));
        assert!(grid.rows()[0][2].is_null());
    }

    struct Fixed;

    impl GridSource for Fixed {
        fn selection(&self) -> Option<Sheet> {
            None
        }

        fn data_range(&self) -> Sheet {
            Sheet::from_data(vec![vec![1, 2, 3]; 3])
        }
    }

    #[test]
    fn test_custom_source_without_selection() {
        let grid = extract_grid(&Fixed).unwrap();
        assert_eq!(grid.height(), 3);
        assert!(Grid::try_from(Sheet::new()).unwrap().is_empty());
    }
}

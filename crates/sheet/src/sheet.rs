use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::range::CellRange;

/// A sheet representing a 2D grid of cells (row-major storage)
///
/// Sheets are always rectangular: constructors pad short rows with
/// [`CellValue::Null`] up to the widest row.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let rows = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();
        Self::from_rows("Sheet1", rows)
    }

    /// Create a named sheet from rows of cells, padding ragged rows
    #[must_use]
    pub fn from_rows(name: &str, mut data: Vec<Vec<CellValue>>) -> Self {
        let width = data.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut data {
            row.resize(width, CellValue::Null);
        }
        Sheet {
            name: name.to_string(),
            data,
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data.first().map_or(0, Vec::len)
    }

    /// Check if the sheet is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a cell value by row and column index (0-based)
    pub fn get(&self, row: usize, col: usize) -> Result<&CellValue> {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .ok_or(SheetError::IndexOutOfBounds {
                row,
                col,
                rows: self.row_count(),
                cols: self.col_count(),
            })
    }

    /// Get a cell value using A1-style notation (e.g., "A1", "B2")
    pub fn get_a1(&self, notation: &str) -> Result<&CellValue> {
        let (row, col) = crate::range::parse_a1(notation)?;
        self.get(row, col)
    }

    /// Copy out the cells of `range`.
    ///
    /// The result is always `range.height()` x `range.width()`; cells past the
    /// sheet's edge read as [`CellValue::Null`], like blank cells in a
    /// spreadsheet selection.
    #[must_use]
    pub fn slice(&self, range: &CellRange) -> Sheet {
        let data = (range.start_row..=range.end_row)
            .map(|r| {
                (range.start_col..=range.end_col)
                    .map(|c| {
                        self.data
                            .get(r)
                            .and_then(|row| row.get(c))
                            .cloned()
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();

        Sheet::from_rows(&format!("{} {}", self.name, range), data)
    }

    /// Get a sub-sheet using A1-style range notation (e.g., "A1:C3")
    pub fn get_range(&self, notation: &str) -> Result<Sheet> {
        let range = CellRange::parse(notation)?;
        Ok(self.slice(&range))
    }

    /// The smallest A1-anchored range covering every non-null cell.
    ///
    /// Returns `None` when the sheet holds no values at all.
    #[must_use]
    pub fn used_range(&self) -> Option<CellRange> {
        let mut last_row = None;
        let mut last_col = None;

        for (r, row) in self.data.iter().enumerate() {
            if let Some(c) = row.iter().rposition(|cell| !cell.is_null()) {
                last_row = Some(r);
                last_col = Some(last_col.map_or(c, |prev: usize| prev.max(c)));
            }
        }

        CellRange::anchored(last_row? + 1, last_col? + 1)
    }

    /// Take ownership of the raw cell data
    #[must_use]
    pub fn into_data(self) -> Vec<Vec<CellValue>> {
        self.data
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::new()
    }
}

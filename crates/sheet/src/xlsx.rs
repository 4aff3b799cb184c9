use crate::book::Book;
use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Options for reading spreadsheet workbooks
#[derive(Debug, Clone, Default)]
pub struct XlsxReadOptions {
    /// Sheet to load; `None` loads the first sheet
    pub sheet_name: Option<String>,
}

impl XlsxReadOptions {
    /// Select the sheet to load by name
    #[must_use]
    pub fn with_sheet(mut self, name: &str) -> Self {
        self.sheet_name = Some(name.to_string());
        self
    }
}

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        // Counts come back from most writers as floats
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 9.0e15 => CellValue::Int(*f as i64),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

/// Expand a calamine range to absolute sheet coordinates.
///
/// calamine trims leading empty rows/columns; the offset is restored so that
/// A1 selections still point at the cells the user sees.
fn range_to_sheet(name: &str, range: &Range<Data>) -> Sheet {
    let (start_row, start_col) = range
        .start()
        .map_or((0, 0), |(r, c)| (r as usize, c as usize));

    let mut data: Vec<Vec<CellValue>> = vec![Vec::new(); start_row];
    for row in range.rows() {
        let mut cells = vec![CellValue::Null; start_col];
        cells.extend(row.iter().map(data_to_cell_value));
        data.push(cells);
    }

    Sheet::from_rows(name, data)
}

fn xlsx_error(err: impl std::fmt::Display) -> SheetError {
    SheetError::Xlsx(err.to_string())
}

impl Sheet {
    /// Load a single sheet from a workbook file
    pub fn from_xlsx_with_options<P: AsRef<Path>>(path: P, options: XlsxReadOptions) -> Result<Self> {
        let mut workbook = open_workbook_auto(path.as_ref()).map_err(xlsx_error)?;

        let name = match options.sheet_name {
            Some(name) => name,
            None => match workbook.sheet_names().first() {
                Some(first) => first.clone(),
                None => return Ok(Sheet::new()),
            },
        };

        let range = workbook.worksheet_range(&name).map_err(|_| SheetError::SheetNotFound {
            name: name.clone(),
        })?;

        Ok(range_to_sheet(&name, &range))
    }
}

impl Book {
    /// Load every sheet of a workbook file, in workbook order
    pub fn from_workbook<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut workbook = open_workbook_auto(path.as_ref()).map_err(xlsx_error)?;
        let mut book = Book::new();

        for (name, range) in workbook.worksheets() {
            tracing::debug!(sheet = %name, rows = range.height(), cols = range.width(), "loaded worksheet");
            book.add_sheet(&name, range_to_sheet(&name, &range))?;
        }

        Ok(book)
    }
}

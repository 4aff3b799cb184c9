use crate::csv::CsvOptions;
use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use indexmap::IndexMap;
use std::path::Path;

/// A workbook containing one or more sheets (preserves insertion order)
///
/// The first sheet added becomes the active sheet unless another one is
/// selected with [`Book::set_active_sheet`].
#[derive(Debug, Clone, Default)]
pub struct Book {
    sheets: IndexMap<String, Sheet>,
    active_sheet: Option<String>,
}

/// Options for [`Book::open`]
#[derive(Debug, Clone, Default)]
pub struct FileLoadOptions {
    /// Field delimiter override for delimited text files.
    /// `None` picks one from the file extension.
    pub delimiter: Option<u8>,
}

impl FileLoadOptions {
    /// Set the delimiter used for CSV-like files
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }
}

impl Book {
    /// Create a new empty book
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the book is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get all sheet names in order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    /// Check if a sheet exists
    #[must_use]
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .get(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Get the active sheet
    pub fn active_sheet(&self) -> Option<&Sheet> {
        self.active_sheet
            .as_ref()
            .and_then(|name| self.sheets.get(name))
    }

    /// Set the active sheet by name
    pub fn set_active_sheet(&mut self, name: &str) -> Result<()> {
        if !self.sheets.contains_key(name) {
            return Err(SheetError::SheetNotFound {
                name: name.to_string(),
            });
        }
        self.active_sheet = Some(name.to_string());
        Ok(())
    }

    /// Add a sheet to the book
    pub fn add_sheet(&mut self, name: &str, mut sheet: Sheet) -> Result<()> {
        if self.sheets.contains_key(name) {
            return Err(SheetError::SheetAlreadyExists {
                name: name.to_string(),
            });
        }
        sheet.set_name(name);
        self.sheets.insert(name.to_string(), sheet);
        if self.active_sheet.is_none() {
            self.active_sheet = Some(name.to_string());
        }
        Ok(())
    }

    /// Open a spreadsheet file, picking the reader from its extension.
    ///
    /// Workbook formats (`xlsx`, `xlsm`, `xlsb`, `xls`, `ods`) load every sheet;
    /// delimited text loads a single sheet named after the file stem.
    /// Anything else is read as CSV.
    pub fn open<P: AsRef<Path>>(path: P, options: &FileLoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if matches!(ext.as_str(), "xlsx" | "xlsm" | "xlsb" | "xls" | "ods") {
            return Book::from_workbook(path);
        }

        let csv_options = match (options.delimiter, ext.as_str()) {
            (Some(delimiter), _) => CsvOptions::default().with_delimiter(delimiter),
            (None, "tsv" | "tab") => CsvOptions::tsv(),
            (None, _) => CsvOptions::default(),
        };

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| SheetError::UnsupportedFormat(path.display().to_string()))?;

        tracing::debug!(path = %path.display(), delimiter = %char::from(csv_options.delimiter), "reading delimited file");
        let sheet = Sheet::from_csv_with_options(path, csv_options)?;

        let mut book = Book::new();
        book.add_sheet(stem, sheet)?;
        Ok(book)
    }
}

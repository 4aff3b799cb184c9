//! Sheet/Book model for confuser
//!
//! Loads spreadsheet files (CSV, TSV and workbook formats) into sheets and
//! extracts the confusion-matrix [`Grid`] to render.
//!
//! # Examples
//!
//! ## Extracting a grid from a sheet
//!
//! ```
//! use confuser_sheet::{extract_grid, Selection, Sheet};
//!
//! let sheet = Sheet::from_csv_str(",cat,dog\ncat,5,1\ndog,2,7").unwrap();
//! let grid = extract_grid(&Selection::whole(&sheet)).unwrap();
//!
//! assert_eq!(grid.height(), 3);
//! assert_eq!(grid.width(), 3);
//! ```
//!
//! ## Using an explicit selection
//!
//! ```
//! use confuser_sheet::{extract_grid, CellRange, Selection, Sheet};
//!
//! let sheet = Sheet::from_data(vec![
//!     vec!["notes", "", "", ""],
//!     vec!["", "", "A", "B"],
//!     vec!["", "A", "3", "0"],
//!     vec!["", "B", "1", "4"],
//! ]);
//! let range: CellRange = "B2:D4".parse().unwrap();
//! let grid = extract_grid(&Selection::range(&sheet, range)).unwrap();
//!
//! assert_eq!(grid.rows()[1][0].to_string(), "A");
//! ```
//!
//! ## Opening a file
//!
//! ```no_run
//! use confuser_sheet::{Book, FileLoadOptions};
//!
//! let book = Book::open("results.xlsx", &FileLoadOptions::default()).unwrap();
//! let sheet = book.active_sheet().unwrap();
//! ```

mod book;
mod cell;
mod csv;
mod error;
mod grid;
mod range;
mod sheet;
mod xlsx;

pub use book::{Book, FileLoadOptions};
pub use cell::CellValue;
pub use csv::CsvOptions;
pub use error::{Result, SheetError};
pub use grid::{extract_grid, Grid, GridSource, Selection, MIN_GRID_SIZE};
pub use range::{column_index_to_letters, parse_a1, to_a1_notation, CellRange};
pub use sheet::Sheet;
pub use xlsx::XlsxReadOptions;

//! LaTeX rendering for confusion matrices.
//!
//! ```
//! use confuser_latex::render_confusion_matrix;
//! use confuser_sheet::{CellValue, Grid};
//!
//! let grid = Grid::from_data(vec![
//!     vec![CellValue::Null, "A".into(), "B".into()],
//!     vec!["A".into(), CellValue::Int(5), CellValue::Int(1)],
//!     vec!["B".into(), CellValue::Int(2), CellValue::Int(7)],
//! ])
//! .unwrap();
//!
//! let lines = render_confusion_matrix(&grid);
//! assert_eq!(lines[6], r"    &  & A & B\\");
//! ```

pub mod error;
mod export;
mod table;

pub use error::{LatexError, Result};
pub use export::{export_tex, tex_file_name};
pub use table::{render_confusion_matrix, LatexTable};

use crate::error::{Result, SheetError};
use std::fmt;
use std::str::FromStr;

/// An inclusive, normalized rectangle of cells (0-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start_row: usize,
    pub start_col: usize,
    pub end_row: usize,
    pub end_col: usize,
}

impl CellRange {
    /// Build a range from two corners in any order
    #[must_use]
    pub fn new(a: (usize, usize), b: (usize, usize)) -> Self {
        CellRange {
            start_row: a.0.min(b.0),
            start_col: a.1.min(b.1),
            end_row: a.0.max(b.0),
            end_col: a.1.max(b.1),
        }
    }

    /// Range covering `rows` x `cols` cells anchored at A1.
    /// Returns `None` for a zero-sized area.
    #[must_use]
    pub fn anchored(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 {
            return None;
        }
        Some(CellRange::new((0, 0), (rows - 1, cols - 1)))
    }

    /// Number of rows covered
    #[must_use]
    pub fn height(&self) -> usize {
        self.end_row - self.start_row + 1
    }

    /// Number of columns covered
    #[must_use]
    pub fn width(&self) -> usize {
        self.end_col - self.start_col + 1
    }

    /// Parse A1-style range notation ("A1:C3", "c3:a1", or a single cell "B2")
    pub fn parse(notation: &str) -> Result<Self> {
        let notation = notation.trim();
        match notation.split_once(':') {
            Some((start, end)) => Ok(CellRange::new(parse_a1(start)?, parse_a1(end)?)),
            None => {
                let cell = parse_a1(notation)?;
                Ok(CellRange::new(cell, cell))
            }
        }
    }
}

impl FromStr for CellRange {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self> {
        CellRange::parse(s)
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}",
            to_a1_notation(self.start_row, self.start_col),
            to_a1_notation(self.end_row, self.end_col)
        )
    }
}

/// Parse A1-style cell notation (e.g., "A1", "Z99", "AA1")
/// Returns (row, column) as 0-based indices
pub fn parse_a1(notation: &str) -> Result<(usize, usize)> {
    let invalid = || SheetError::InvalidCellNotation(notation.to_string());

    let upper = notation.trim().to_ascii_uppercase();
    let split = upper
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(invalid)?;
    let (letters, digits) = upper.split_at(split);

    if letters.is_empty() || !letters.bytes().all(|b| b.is_ascii_uppercase()) {
        return Err(invalid());
    }

    let col = letters
        .bytes()
        .try_fold(0usize, |acc, b| {
            acc.checked_mul(26)?.checked_add(usize::from(b - b'A') + 1)
        })
        .ok_or_else(invalid)?
        - 1;
    let row = digits.parse::<usize>().map_err(|_| invalid())?;

    // Rows are 1-based in A1 notation
    if row == 0 {
        return Err(invalid());
    }

    Ok((row - 1, col))
}

/// Convert 0-based column index to column letters
/// 0=A, 1=B, ... 25=Z, 26=AA, 27=AB, ...
pub fn column_index_to_letters(col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col + 1;

    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }

    letters.iter().rev().map(|&b| char::from(b)).collect()
}

/// Convert (row, col) to A1 notation
pub fn to_a1_notation(row: usize, col: usize) -> String {
    format!("{}{}", column_index_to_letters(col), row + 1)
}

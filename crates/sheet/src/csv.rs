use crate::cell::CellValue;
use crate::error::Result;
use crate::sheet::Sheet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// CSV reader options
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Quote character (default: '"')
    pub quote: u8,
}

impl Default for CsvOptions {
    fn default() -> Self {
        CsvOptions {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl CsvOptions {
    /// Create options for TSV (tab-separated values)
    #[must_use]
    pub fn tsv() -> Self {
        CsvOptions {
            delimiter: b'\t',
            ..Default::default()
        }
    }

    /// Set the delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

impl Sheet {
    /// Load a sheet from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_csv_with_options(path, CsvOptions::default())
    }

    /// Load a sheet from a CSV file with custom options
    pub fn from_csv_with_options<P: AsRef<Path>>(path: P, options: CsvOptions) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_csv_reader(BufReader::new(file), options)
    }

    /// Load a sheet from a CSV string
    pub fn from_csv_str(content: &str) -> Result<Self> {
        Self::from_csv_reader(content.as_bytes(), CsvOptions::default())
    }

    /// Load a sheet from a reader. Ragged records are padded with nulls.
    ///
    /// Blank lines are kept as empty rows so that A1 references match the
    /// line numbers of the file.
    pub fn from_csv_reader<R: Read>(reader: R, options: CsvOptions) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut data: Vec<Vec<CellValue>> = Vec::new();
        // Line the next record would start on if no blank lines came first
        let mut next_line = 1;

        for result in csv_reader.records() {
            let record = result?;
            if let Some(pos) = record.position() {
                for _ in next_line..pos.line() {
                    data.push(Vec::new());
                }
                let embedded = record.iter().map(|f| f.matches('\n').count()).sum::<usize>();
                next_line = pos.line() + embedded as u64 + 1;
            }
            data.push(record.iter().map(CellValue::parse).collect());
        }

        Ok(Sheet::from_rows("Sheet1", data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_csv_str() {
        let csv = ",cat,dog\ncat,5,1\ndog,2,7";
        let sheet = Sheet::from_csv_str(csv).unwrap();

        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.col_count(), 3);
        assert_eq!(sheet.get(0, 0).unwrap(), &CellValue::Null);
        assert_eq!(sheet.get(0, 1).unwrap(), &CellValue::from("cat"));
        assert_eq!(sheet.get(1, 1).unwrap(), &CellValue::Int(5));
    }

    #[test]
    fn test_ragged_records_are_padded() {
        let sheet = Sheet::from_csv_str("a,b,c\n1\n2,3").unwrap();

        assert_eq!(sheet.col_count(), 3);
        assert_eq!(sheet.get(1, 2).unwrap(), &CellValue::Null);
        assert_eq!(sheet.get(2, 1).unwrap(), &CellValue::Int(3));
    }

    #[test]
    fn test_blank_lines_keep_their_rows() {
        let sheet = Sheet::from_csv_str("title\n\n,A,B\nA,5,1\nB,2,7\n").unwrap();

        assert_eq!(sheet.row_count(), 5);
        assert!(sheet.get(1, 0).unwrap().is_null());
        assert!(sheet.get_a1("A3").unwrap().is_null());
        assert_eq!(sheet.get_a1("B3").unwrap().to_string(), "A");
        assert_eq!(sheet.get_a1("C5").unwrap(), &CellValue::Int(7));
    }

    #[test]
    fn test_quoted_newlines_do_not_add_rows() {
        let sheet = Sheet::from_csv_str("\"two\nlines\",x\n\ny,z\n").unwrap();

        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.get(0, 0).unwrap().to_string(), "two\nlines");
        assert!(sheet.get(1, 0).unwrap().is_null());
        assert_eq!(sheet.get_a1("B3").unwrap().to_string(), "z");
    }

    #[test]
    fn test_tsv_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "\tyes\tno\nyes\t3\t4\n").unwrap();

        let sheet = Sheet::from_csv_with_options(file.path(), CsvOptions::tsv()).unwrap();
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.get(0, 1).unwrap().to_string(), "yes");
        assert_eq!(sheet.get(1, 2).unwrap(), &CellValue::Int(4));
    }
}

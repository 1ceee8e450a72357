// ============================================================================
// File Source
// One column of a delimited text file (.csv / .txt)
// ============================================================================

use crate::interfaces::{InputSource, SourceError, TokenStream};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Extensions accepted by [`FileSource`], compared case-insensitively
pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["csv", "txt"];

/// Source backed by a column of a comma-delimited file.
///
/// # Example
/// ```text
/// a,b
/// 1,10      column_index = 1, skip_header = true
/// 2,20      tokens: "10", "20"
/// ```
///
/// Rows missing the column are logged and skipped, as are cells that are
/// empty after trimming and rows the CSV parser rejects. Only I/O failures
/// end the stream early.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    column_index: usize,
    skip_header: bool,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>, column_index: usize, skip_header: bool) -> Self {
        Self {
            path: path.into(),
            column_index,
            skip_header,
        }
    }

    /// First column, header row skipped
    pub fn first_column(path: impl Into<PathBuf>) -> Self {
        Self::new(path, 0, true)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn column_index(&self) -> usize {
        self.column_index
    }

    pub fn skip_header(&self) -> bool {
        self.skip_header
    }

    fn has_supported_extension(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
    }
}

impl InputSource for FileSource {
    fn name(&self) -> &str {
        "FileSource"
    }

    fn validate_source(&self) -> Result<(), String> {
        if !self.path.exists() {
            return Err(format!("File not found: {}", self.path.display()));
        }

        if !self.has_supported_extension() {
            return Err("Only CSV and TXT files supported".to_string());
        }

        let size = fs::metadata(&self.path)
            .map(|meta| meta.len())
            .map_err(|e| format!("Cannot read file metadata: {}", e))?;
        if size == 0 {
            return Err("File is empty".to_string());
        }

        Ok(())
    }

    fn read(&self) -> Result<TokenStream<'_>, SourceError> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(self.skip_header)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| {
                tracing::error!("File read error: {}", e);
                SourceError::from(e)
            })?;

        Ok(Box::new(ColumnTokens {
            records: reader.into_records(),
            column_index: self.column_index,
            row: 0,
            finished: false,
        }))
    }
}

// ============================================================================
// Column iterator
// ============================================================================

/// Streams one column; owns the reader, so the file closes when dropped.
struct ColumnTokens<R> {
    records: csv::StringRecordsIntoIter<R>,
    column_index: usize,
    /// Data row index, counted after the header
    row: usize,
    finished: bool,
}

impl<R: io::Read> Iterator for ColumnTokens<R> {
    type Item = Result<String, SourceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let record = self.records.next()?;
            let row = self.row;
            self.row += 1;

            match record {
                Ok(record) => match record.get(self.column_index) {
                    Some(cell) => {
                        let value = cell.trim();
                        if !value.is_empty() {
                            return Some(Ok(value.to_string()));
                        }
                    }
                    None => {
                        tracing::warn!(
                            "Row {}: Column index {} out of range",
                            row,
                            self.column_index
                        );
                    }
                },
                Err(err) if matches!(err.kind(), csv::ErrorKind::Io(_)) => {
                    tracing::error!("File read error: {}", err);
                    self.finished = true;
                    return Some(Err(SourceError::from(err)));
                }
                Err(err) => {
                    tracing::warn!("Error reading row {}: {}", row, err);
                }
            }
        }
    }
}

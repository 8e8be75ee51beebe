//! Workbook reading with header-anchor detection.
//!
//! The first worksheet is scanned for the header anchor in its top-left
//! corner; instructional text above the header is skipped.

use std::path::{Path, PathBuf};

use calamine::{Data, Range, Reader, open_workbook_auto};
use pgtd_model::RuleVariant;
use pgtd_standards::codelists::HEADER_ANCHOR;

use crate::error::{IngestError, Result};
use crate::source::{RowSource, SheetRows, has_data};

/// Maximum workbook size accepted (100 MB default).
pub const MAX_WORKBOOK_SIZE: u64 = 100 * 1024 * 1024;

/// Extension accepted for submissions.
pub const WORKBOOK_EXTENSION: &str = "xlsx";

/// Workbook reader configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Number of leading rows searched for the header anchor.
    pub header_scan_rows: usize,
    /// Number of leading columns searched for the header anchor.
    pub header_scan_columns: usize,
    pub max_file_size: u64,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            header_scan_rows: 29,
            header_scan_columns: 9,
            max_file_size: MAX_WORKBOOK_SIZE,
        }
    }
}

impl ReaderOptions {
    pub fn with_header_scan(mut self, rows: usize, columns: usize) -> Self {
        self.header_scan_rows = rows;
        self.header_scan_columns = columns;
        self
    }

    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }
}

/// Reject anything but `.xlsx` (case-insensitive).
pub fn check_extension(path: &Path) -> Result<()> {
    let is_xlsx = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(WORKBOOK_EXTENSION));
    if is_xlsx {
        Ok(())
    } else {
        Err(IngestError::UnsupportedFileType {
            path: path.to_path_buf(),
        })
    }
}

/// Check file size against a limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::io(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }
    Ok(())
}

/// Submission workbook on disk.
#[derive(Debug, Clone)]
pub struct WorkbookSource {
    path: PathBuf,
    options: ReaderOptions,
}

impl WorkbookSource {
    pub fn new(path: impl Into<PathBuf>, options: ReaderOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for WorkbookSource {
    fn read_rows(&self, variant: RuleVariant) -> Result<SheetRows> {
        check_file_size_with_limit(&self.path, self.options.max_file_size)?;

        let workbook_error = |e: calamine::Error| IngestError::Workbook {
            path: self.path.clone(),
            message: e.to_string(),
        };

        let mut workbook = open_workbook_auto(&self.path).map_err(workbook_error)?;
        let sheet = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| IngestError::NoWorksheet {
                path: self.path.clone(),
            })?;
        let range = workbook.worksheet_range(&sheet).map_err(workbook_error)?;

        let rows = extract_rows(&range, variant.column_count(), &self.options).ok_or_else(|| {
            IngestError::HeaderNotFound {
                path: self.path.clone(),
                anchor: HEADER_ANCHOR.to_string(),
            }
        })?;

        tracing::debug!(
            path = %self.path.display(),
            sheet = %sheet,
            header_row = rows.header_row,
            data_rows = rows.len(),
            "read workbook rows"
        );
        Ok(rows)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Locate the header row and collect the data rows below it.
///
/// Positions are absolute worksheet coordinates. Returns `None` when no
/// scanned cell contains the header anchor.
pub fn extract_rows(range: &Range<Data>, width: usize, options: &ReaderOptions) -> Option<SheetRows> {
    let end = range.end()?;
    let header = find_header_row(range, end.0, options)?;

    let rows = ((header + 1)..=end.0)
        .map(|row| {
            (0..width)
                .map(|col| {
                    u32::try_from(col)
                        .ok()
                        .and_then(|col| range.get_value((row, col)))
                        .map(cell_string)
                        .unwrap_or_default()
                })
                .collect::<Vec<_>>()
        })
        .filter(|cells| has_data(cells))
        .collect();

    Some(SheetRows {
        header_row: header as usize + 1,
        rows,
    })
}

fn find_header_row(range: &Range<Data>, last_row: u32, options: &ReaderOptions) -> Option<u32> {
    let scan_rows = u32::try_from(options.header_scan_rows).unwrap_or(u32::MAX);
    let scan_columns = u32::try_from(options.header_scan_columns).unwrap_or(u32::MAX);

    (0..scan_rows.min(last_row.saturating_add(1))).find(|&row| {
        (0..scan_columns).any(|col| {
            range
                .get_value((row, col))
                .is_some_and(|cell| cell_string(cell).contains(HEADER_ANCHOR))
        })
    })
}

/// Cell text as the submitter typed it.
///
/// Integral floats (dates or codes stored as numbers) render without a
/// fractional part.
pub fn cell_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(v) => format_float(*v),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        other => other.to_string(),
    }
}

fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(cells: &[(u32, u32, Data)]) -> Range<Data> {
        let end_row = cells.iter().map(|c| c.0).max().unwrap_or(0);
        let end_col = cells.iter().map(|c| c.1).max().unwrap_or(0);
        let mut range = Range::new((0, 0), (end_row, end_col));
        for (row, col, value) in cells {
            range.set_value((*row, *col), value.clone());
        }
        range
    }

    fn text(value: &str) -> Data {
        Data::String(value.to_string())
    }

    #[test]
    fn test_cell_string_numbers() {
        assert_eq!(cell_string(&Data::Float(20250805.0)), "20250805");
        assert_eq!(cell_string(&Data::Float(1000.5)), "1000.5");
        assert_eq!(cell_string(&Data::Int(42)), "42");
        assert_eq!(cell_string(&Data::Empty), "");
    }

    #[test]
    fn test_skips_instructions_above_header() {
        let range = sheet(&[
            (0, 0, text("填报说明")),
            (2, 0, text("联交所参与者名称")),
            (2, 1, text("经纪商代码")),
            (3, 0, text("Alpha")),
            (3, 1, Data::Float(9999.0)),
            (4, 0, text("  ")),
            (5, 1, text("Beta")),
        ]);
        let rows = extract_rows(&range, 3, &ReaderOptions::default()).unwrap();
        assert_eq!(rows.header_row, 3);
        assert_eq!(
            rows.rows,
            vec![
                vec!["Alpha".to_string(), "9999".to_string(), String::new()],
                vec![String::new(), "Beta".to_string(), String::new()],
            ]
        );
    }

    #[test]
    fn test_anchor_in_second_column() {
        let range = sheet(&[
            (0, 0, text("序号")),
            (0, 1, text("联交所参与者名称")),
            (1, 0, Data::Int(1)),
        ]);
        let rows = extract_rows(&range, 38, &ReaderOptions::default()).unwrap();
        assert_eq!(rows.header_row, 1);
        assert_eq!(rows.rows.len(), 1);
        assert_eq!(rows.rows[0].len(), 38);
    }

    #[test]
    fn test_anchor_outside_scan_window() {
        let range = sheet(&[(40, 0, text("联交所参与者名称")), (41, 0, text("x"))]);
        assert!(extract_rows(&range, 42, &ReaderOptions::default()).is_none());

        let wide = ReaderOptions::default().with_header_scan(50, 10);
        assert!(extract_rows(&range, 42, &wide).is_some());
    }

    #[test]
    fn test_scan_window_is_29_rows_by_9_columns() {
        let last_row = sheet(&[(28, 8, text("联交所参与者名称"))]);
        let rows = extract_rows(&last_row, 42, &ReaderOptions::default()).unwrap();
        assert_eq!(rows.header_row, 29);

        let row_30 = sheet(&[(29, 0, text("联交所参与者名称"))]);
        assert!(extract_rows(&row_30, 42, &ReaderOptions::default()).is_none());

        let column_10 = sheet(&[(0, 9, text("联交所参与者名称"))]);
        assert!(extract_rows(&column_10, 42, &ReaderOptions::default()).is_none());
    }

    #[test]
    fn test_cells_beyond_width_ignored() {
        let range = sheet(&[
            (0, 0, text("联交所参与者名称")),
            (1, 5, text("beyond")),
        ]);
        let rows = extract_rows(&range, 3, &ReaderOptions::default()).unwrap();
        assert!(rows.rows.is_empty());
    }

    #[test]
    fn test_extension_check() {
        assert!(check_extension(Path::new("a/SH_PGTDRPT_09999_20250805.XLSX")).is_ok());
        assert!(matches!(
            check_extension(Path::new("report.csv")),
            Err(IngestError::UnsupportedFileType { .. })
        ));
        assert!(check_extension(Path::new("noext")).is_err());
    }
}

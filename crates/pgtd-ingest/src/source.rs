//! Row sources feeding the validator.

use pgtd_model::RuleVariant;

use crate::error::{IngestError, Result};

/// Data rows read from a submission, below its header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRows {
    /// 1-based worksheet row holding the header anchor.
    pub header_row: usize,
    /// Raw cell text, at most `variant.column_count()` cells per row.
    /// Rows without any data are already dropped.
    pub rows: Vec<Vec<String>>,
}

impl SheetRows {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Anything that can produce the data rows of a submission.
pub trait RowSource {
    /// Read the data rows, sized for `variant`.
    fn read_rows(&self, variant: RuleVariant) -> Result<SheetRows>;

    /// Value shown in file-level findings (usually the path).
    fn describe(&self) -> String;
}

/// In-memory rows, for callers that already hold cell text.
#[derive(Debug, Clone, Default)]
pub struct MemoryRows {
    rows: Option<Vec<Vec<String>>>,
}

impl MemoryRows {
    pub fn new<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            rows: Some(
                rows.into_iter()
                    .map(|row| row.into_iter().map(Into::into).collect())
                    .collect(),
            ),
        }
    }

    /// A source whose header row cannot be located.
    pub fn missing_header() -> Self {
        Self { rows: None }
    }
}

impl RowSource for MemoryRows {
    fn read_rows(&self, variant: RuleVariant) -> Result<SheetRows> {
        let Some(rows) = &self.rows else {
            return Err(IngestError::HeaderNotFound {
                path: self.describe().into(),
                anchor: pgtd_standards::codelists::HEADER_ANCHOR.to_string(),
            });
        };

        let width = variant.column_count();
        let rows = rows
            .iter()
            .filter(|row| has_data(row))
            .map(|row| row.iter().take(width).cloned().collect())
            .collect();

        Ok(SheetRows {
            header_row: 1,
            rows,
        })
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

pub(crate) fn has_data(cells: &[String]) -> bool {
    cells.iter().any(|cell| !cell.trim().is_empty())
}

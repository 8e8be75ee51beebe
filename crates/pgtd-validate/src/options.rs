//! Validation options.

use chrono::NaiveDate;
use pgtd_ingest::ReaderOptions;

/// Options for a validation pass.
#[derive(Debug, Clone, Default)]
pub struct ValidationOptions {
    /// Date treated as "today" for the future-submission check; the local
    /// calendar date when unset.
    pub reference_date: Option<NaiveDate>,
    pub reader: ReaderOptions,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn with_reader(mut self, reader: ReaderOptions) -> Self {
        self.reader = reader;
        self
    }

    /// The reference date, defaulting to the local calendar date.
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }
}

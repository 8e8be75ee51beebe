//! Submission intake.
//!
//! - **Filename context**: variant, submission date and issuer id from the
//!   submission filename
//! - **Row sources**: the [`RowSource`] seam, with a workbook implementation
//!   on `calamine` and an in-memory one

mod error;
mod filename;
mod source;
mod xlsx;

// === Error Types ===
pub use error::{IngestError, Result};

// === Filename Context ===
pub use filename::resolve_context;

// === Row Sources ===
pub use source::{MemoryRows, RowSource, SheetRows};
pub use xlsx::{
    MAX_WORKBOOK_SIZE, ReaderOptions, WORKBOOK_EXTENSION, WorkbookSource, cell_string,
    check_extension, check_file_size_with_limit, extract_rows,
};

//! Exchange field catalog, code lists and per-variant field tables.

pub mod catalog;
pub mod codelists;
pub mod error;
pub mod table;

pub use crate::catalog::{CATALOG, Condition, FieldDef, Presence};
pub use crate::error::StandardsError;
pub use crate::table::{FieldTable, field_table};

//! CLI library components for the programmatic-trading report validator.

pub mod commands;
pub mod logging;

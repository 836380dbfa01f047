//! Utility functions for formatting command output.

pub mod format;

pub use format::{format_age, truncate_string};

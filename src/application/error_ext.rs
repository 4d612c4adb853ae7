//! Error conversion helpers for report output
//!
//! Provides an extension trait for attaching context to I/O failures.

use std::io;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// writeln!(out, "Balanced!").io_context("write balance verdict")?;
    /// ```
    fn io_context(self, context: &str) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn io_context(self, context: &str) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::Io {
            context: context.to_string(),
            source,
        })
    }
}

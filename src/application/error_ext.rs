//! Error conversion helpers for common I/O operations
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    ///
    /// # Example
    /// ```ignore
    /// fs.write(&output, &data)
    ///     .with_path_context("write case table", &output)?;
    /// ```
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T>;

    /// Treat an I/O error as a failure to decode the mind map at `path`.
    ///
    /// Used when reading the workbook itself: an unreadable file and an
    /// undecodable file surface as the same kind of error.
    fn or_decode_error(self, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_path_context(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::OperationFailed {
            context: format!("{}: {}", action, path.display()),
            source: Box::new(e),
        })
    }

    fn or_decode_error(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

//! Error types for loading and saving INI documents.
//!
//! Parsing itself never fails: malformed lines are skipped and a missing file
//! yields an empty document. What can fail is everything around it:
//!
//! - **I/O Errors**: the file exists but cannot be read, or cannot be written
//! - **Missing Path**: saving a document that was built in memory
//! - **Invalid Operator**: parsing an [`Operator`](crate::Operator) from text
//!
//! ## Examples
//!
//! ```rust
//! use launcher_ini::{Document, Error};
//!
//! let doc = Document::new();
//! match doc.save() {
//!     Err(Error::NoPath) => {}
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```

use std::path::Path;
use thiserror::Error;

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The document has no backing file to save to
    #[error("document has no backing file; use save_as to choose one")]
    NoPath,

    /// Text that is not one of `=`, `+=` or `-=`
    #[error("invalid operator {0:?}: expected one of '=', '+=', '-='")]
    InvalidOperator(String),
}

impl Error {
    /// Creates an I/O error from a message.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates an I/O error that names the file involved.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use launcher_ini::Error;
    /// use std::io;
    ///
    /// let err = Error::io_at("server.ini", &io::Error::from(io::ErrorKind::PermissionDenied));
    /// assert!(err.to_string().contains("server.ini"));
    /// ```
    pub fn io_at(path: impl AsRef<Path>, err: &std::io::Error) -> Self {
        Error::Io(format!("{}: {}", path.as_ref().display(), err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for record-bench.

use std::{io, path::Path};

use thiserror::Error;

/// Structured error types for record-bench.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error with the path and operation that failed.
    #[error("{message}: {path}")]
    Io {
        /// File path where the error occurred.
        path: String,
        /// Description of the failed operation.
        message: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Record buffer of the wrong length passed to the codec.
    #[error("record buffer is {actual} bytes, expected exactly {expected}")]
    RecordLength {
        /// Required buffer length in bytes.
        expected: usize,
        /// Length of the buffer provided.
        actual: usize,
    },

    /// Description bytes that are not valid UTF-8.
    #[error("invalid UTF-8 in description field at byte {position}")]
    DescriptionEncoding {
        /// Byte position of the first invalid sequence within the field.
        position: usize,
    },

    /// Invalid benchmark configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Creates an [`Error::Io`] carrying the offending path and operation.
    pub(crate) fn io(path: &Path, message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            message: message.into(),
            source,
        }
    }
}

//! # Error Types
//!
//! Failure taxonomy for jsonvet. All errors use `thiserror` for
//! derive-based `Display` and `Error` implementations.
//!
//! Missing-argument failures never reach this crate: the argument
//! parser in the CLI rejects the invocation before any file access.
//! An invalid data document is not an error either — it is a normal
//! outcome carried by [`crate::validate::Outcome`].

use thiserror::Error;

/// Top-level error type for jsonvet.
#[derive(Error, Debug)]
pub enum JsonvetError {
    /// A schema or data file could not be read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// Path of the file that could not be read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// File contents are not syntactically valid JSON.
    #[error("invalid JSON in {path}: {reason}")]
    Parse {
        /// Path of the offending file.
        path: String,
        /// The JSON parser's own message, verbatim.
        reason: String,
    },

    /// The schema itself failed to compile.
    #[error("schema compile error: {reason}")]
    SchemaCompile {
        /// Reason reported by the validation engine.
        reason: String,
    },
}

//! Error types for header generation and document edits.
//!
//! Library crates use `thiserror` for explicit error enums.

use thiserror::Error;

/// Error types for header operations.
///
/// Identity lookup failures are deliberately absent: an unavailable
/// identity resolves to an empty field and the operation proceeds.
#[derive(Error, Debug)]
pub enum HeaderError {
    /// An extended-art entry renders wider than the configured line width.
    ///
    /// Raised by the art-block renderer before any line is emitted, so a
    /// misconfigured art asset never produces a malformed header.
    #[error("art entry {index} renders {rendered} columns, exceeds width {width}")]
    ArtTooWide {
        /// Zero-based index into the extended-art list.
        index: usize,
        /// Visible width of the offending rendered line.
        rendered: usize,
        /// Configured total line width.
        width: usize,
    },

    /// The target document cannot accept edits.
    #[error("document is not writable")]
    NotWritable,

    /// File I/O error surfaced by a document implementation.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

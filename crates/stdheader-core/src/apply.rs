//! Top-level orchestration: insert a header or refresh an existing one.

use tracing::{debug, warn};

use crate::compose::compose_header;
use crate::config::HeaderConfig;
use crate::error::HeaderError;
use crate::header::{AUTHOR_LINE, CREATED_LINE};
use crate::layout::Delimiters;
use crate::matcher::is_header_present;

/// Host capability: line-oriented access to the open document.
///
/// The whole insert-or-update operation runs synchronously against one
/// document snapshot; implementations need no internal locking.
pub trait Document {
    /// Basename shown in the filename line.
    fn filename(&self) -> String;
    /// The document's first line, or the empty string for an empty document.
    fn first_line(&self) -> String;
    /// Up to `n` leading lines.
    fn first_lines(&self, n: usize) -> Vec<String>;
    /// Whether the document accepts edits.
    fn is_writable(&self) -> bool;
    /// Overwrite the first `n` lines with `lines`.
    fn replace_first_lines(&mut self, n: usize, lines: &[String]) -> Result<(), HeaderError>;
    /// Insert `lines` before the current first line.
    fn prepend_lines(&mut self, lines: &[String]) -> Result<(), HeaderError>;
}

/// Which path [`apply_header`] took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// No valid header was present; a fresh one was prepended.
    Inserted,
    /// A valid header was refreshed in place.
    Updated,
}

/// Insert a header into `doc`, or refresh the one already there.
///
/// Two states only: a document either has a valid header (update, refreshing
/// everything except the author and creation lines) or it does not (insert
/// above the existing content). Partial resemblance to a header counts as
/// no header. Any failure leaves the document untouched.
pub fn apply_header(
    doc: &mut dyn Document,
    cfg: &HeaderConfig,
    delims: &Delimiters,
    user: &str,
    email: &str,
    now: &str,
) -> Result<Applied, HeaderError> {
    let mut candidate =
        match compose_header(cfg, delims, &doc.filename(), user, email, now) {
            Ok(header) => header,
            Err(err) => {
                warn!("header generation failed: {err}");
                return Err(err);
            }
        };

    if !doc.is_writable() {
        warn!("document {:?} is not writable, no header applied", doc.filename());
        return Err(HeaderError::NotWritable);
    }

    let current = doc.first_lines(candidate.len());
    if is_header_present(&candidate, &current) {
        // Carry the creation metadata forward verbatim; everything else is
        // taken from the fresh composition.
        for index in [AUTHOR_LINE, CREATED_LINE] {
            if let Some(original) = current.get(index) {
                candidate.set_line(index, original.clone());
            }
        }
        let n = candidate.len();
        doc.replace_first_lines(n, candidate.lines())?;
        debug!("refreshed header in {:?}", doc.filename());
        Ok(Applied::Updated)
    } else {
        if !doc.first_line().is_empty() {
            candidate.push_line(String::new());
        }
        doc.prepend_lines(candidate.lines())?;
        debug!("inserted header into {:?}", doc.filename());
        Ok(Applied::Inserted)
    }
}

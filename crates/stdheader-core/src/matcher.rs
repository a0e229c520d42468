//! Header detection via the structural signature.

use crate::header::Header;

/// Decide whether `first_lines` (the document's leading lines) already form
/// a valid header.
///
/// Only the structural-signature positions are compared: borders and the
/// fixed blanks are byte-identical across any two valid headers under the
/// same configuration, while the filename, identity and timestamp lines
/// legitimately differ run to run. A document shorter than the candidate
/// simply fails the comparison at the missing index.
#[must_use]
pub fn is_header_present(candidate: &Header, first_lines: &[String]) -> bool {
    candidate.signature_indices().all(|i| {
        match (candidate.line(i), first_lines.get(i)) {
            (Some(expected), Some(actual)) => expected == actual,
            _ => false,
        }
    })
}

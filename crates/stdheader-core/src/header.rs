//! The composed header and its fixed line positions.
//!
//! Every position constant the layout depends on lives here. The matcher
//! and the updater both read these; nothing else hard-codes a line number.

/// Zero-based index of the author line (`By: name <email>`). Preserved
/// verbatim across updates.
pub const AUTHOR_LINE: usize = 5;

/// Zero-based index of the creation line (`Created: ts by name`). Preserved
/// verbatim across updates.
pub const CREATED_LINE: usize = 7;

/// Zero-based index of the update line (`Updated: ts by name`). Refreshed
/// on every update.
pub const UPDATED_LINE: usize = 8;

/// Fixed-position structural signature lines: top border, the two leading
/// blanks, and the blank before the extended-art block. The bottom border
/// completes the signature but its position depends on the art count, so it
/// is supplied by [`Header::signature_indices`].
const SIGNATURE_FIXED: [usize; 4] = [0, 1, 2, 9];

/// An ordered line sequence forming one complete header.
///
/// Constructed fresh on every invocation, never cached. Layout (zero-based):
/// 0 border, 1 blank, 2-8 text lines carrying the compact art, 9 blank,
/// 10..10+k extended art, last border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    lines: Vec<String>,
}

impl Header {
    /// Wrap an already-composed line sequence.
    #[must_use]
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Number of lines, including both borders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the header holds no lines (never the case for a composed
    /// header; kept for the conventional pairing with [`Header::len`]).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index`, if present.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// All lines in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Replace the line at `index`. Out-of-range indices are ignored.
    pub fn set_line(&mut self, index: usize, content: String) {
        if let Some(slot) = self.lines.get_mut(index) {
            *slot = content;
        }
    }

    /// Append a raw line (the insert path's blank separator).
    pub fn push_line(&mut self, content: String) {
        self.lines.push(content);
    }

    /// The structural-signature indices for this header: the fixed four
    /// plus the bottom border.
    pub fn signature_indices(&self) -> impl Iterator<Item = usize> + '_ {
        SIGNATURE_FIXED
            .into_iter()
            .chain(std::iter::once(self.lines.len().saturating_sub(1)))
    }

    /// Consume the header, yielding its lines.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_includes_bottom_border() {
        let h = Header::new((0..12).map(|i| format!("l{i}")).collect());
        let idx: Vec<usize> = h.signature_indices().collect();
        assert_eq!(idx, vec![0, 1, 2, 9, 11]);
    }

    #[test]
    fn set_line_ignores_out_of_range() {
        let mut h = Header::new(vec!["a".to_string()]);
        h.set_line(5, "b".to_string());
        assert_eq!(h.len(), 1);
        assert_eq!(h.line(0), Some("a"));
    }
}

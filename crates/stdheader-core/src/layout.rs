//! Layout engine: fixed-width line rendering.
//!
//! All width arithmetic counts Unicode codepoints, not bytes, so art
//! containing multi-byte glyphs lays out correctly. Text that does not fit
//! is silently truncated (defined policy, not an error); art that does not
//! fit is a hard failure, handled by [`render_art_block`].

use crate::config::{HeaderConfig, Justify};
use crate::error::HeaderError;

/// Comment delimiter pair for the current document type.
///
/// Derived per invocation from the host's knowledge of the file type and
/// never cached: the same session may touch documents of different types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    /// Opening delimiter, e.g. `/*` or `#`.
    pub left: String,
    /// Closing delimiter, e.g. `*/` or `#`.
    pub right: String,
}

impl Delimiters {
    /// Delimiter pair from two string slices.
    #[must_use]
    pub fn new(left: &str, right: &str) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}

impl Default for Delimiters {
    /// The fallback pair used when the host has no convention for the
    /// document type.
    fn default() -> Self {
        Self::new("#", "#")
    }
}

fn chars(s: &str) -> usize {
    s.chars().count()
}

/// Spaces between a delimiter and the content area. Saturates at zero when
/// a delimiter is wider than the margin (flagged upstream as undefined; the
/// line then simply grows past `width`).
fn margin_pad(margin: usize, delimiter: &str) -> String {
    " ".repeat(margin.saturating_sub(chars(delimiter)))
}

/// Render one text line: delimiter, margin, text padded or truncated to the
/// content width, art token, margin, delimiter.
///
/// `text` longer than `width - margin*2 - chars(art)` is truncated with no
/// diagnostic. When the configuration invariant holds the output is exactly
/// `width` codepoints wide.
#[must_use]
pub fn render_text_line(
    text: &str,
    art: &str,
    cfg: &HeaderConfig,
    delims: &Delimiters,
) -> String {
    let max_content = cfg
        .width
        .saturating_sub(cfg.margin * 2)
        .saturating_sub(chars(art));
    let shown: String = text.chars().take(max_content).collect();
    let fill = " ".repeat(max_content - chars(&shown));
    format!(
        "{}{}{}{}{}{}{}",
        delims.left,
        margin_pad(cfg.margin, &delims.left),
        shown,
        fill,
        art,
        margin_pad(cfg.margin, &delims.right),
        delims.right,
    )
}

/// Render the extended-art block, one full-width line per entry.
///
/// Fails fast with [`HeaderError::ArtTooWide`] if any entry renders wider
/// than `cfg.width`; no partial output is produced.
pub fn render_art_block(
    art: &[String],
    cfg: &HeaderConfig,
    delims: &Delimiters,
) -> Result<Vec<String>, HeaderError> {
    let mut out = Vec::with_capacity(art.len());
    for (index, entry) in art.iter().enumerate() {
        let pad = " ".repeat(
            cfg.width
                .saturating_sub(chars(entry))
                .saturating_sub(cfg.margin * 2),
        );
        let left = margin_pad(cfg.margin, &delims.left);
        let right = margin_pad(cfg.margin, &delims.right);
        let line = match cfg.extended_justify {
            Justify::Left => format!(
                "{}{}{}{}{}{}",
                delims.left, left, entry, pad, right, delims.right
            ),
            Justify::Right => format!(
                "{}{}{}{}{}{}",
                delims.left, left, pad, entry, right, delims.right
            ),
        };
        let rendered = chars(&line);
        if rendered > cfg.width {
            return Err(HeaderError::ArtTooWide {
                index,
                rendered,
                width: cfg.width,
            });
        }
        out.push(line);
    }
    Ok(out)
}

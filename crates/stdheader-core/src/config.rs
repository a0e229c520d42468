//! Header configuration types.
//!
//! One immutable-per-session record, deserializable from the host settings
//! file. Every field has a default so a missing or partial settings file
//! still yields a working configuration.

use serde::Deserialize;

use crate::identity::Scope;

/// Default total line width.
pub const DEFAULT_WIDTH: usize = 80;
/// Default margin (delimiter plus padding) on each side.
pub const DEFAULT_MARGIN: usize = 5;

/// The classic seven-row glyph placed beside the header text, one row per
/// text line. Trailing spaces are significant: every row is 25 columns so
/// the art forms an aligned block.
const DEFAULT_COMPACT_ART: [&str; 7] = [
    "        :::      ::::::::",
    "      :+:      :+:    :+:",
    "    +:+ +:+         +:+  ",
    "  +#+  +:+       +#+     ",
    "+#+#+#+#+#+   +#+        ",
    "     #+#    #+#          ",
    "    ###   ########.fr    ",
];

/// Justification of extended-art lines within the content area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Justify {
    /// Art flush against the left margin.
    Left,
    /// Art flush against the right margin (default).
    #[default]
    Right,
}

/// Version-control identity lookup options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VcsConfig {
    /// Whether committer identity is consulted at all (default off).
    pub enabled: bool,
    /// Config scope for the committer name lookup.
    pub name_scope: Scope,
    /// Config scope for the committer email lookup.
    pub email_scope: Scope,
}

/// Immutable-per-session header configuration.
///
/// Invariant: `width > margin * 2 + <max art width>` for every art entry,
/// otherwise text lines truncate to nothing and extended-art rendering
/// fails with [`crate::HeaderError::ArtTooWide`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Total rendered line width in columns.
    pub width: usize,
    /// Columns reserved on each side for the delimiter and its padding.
    pub margin: usize,
    /// Per-line decorative tokens, consumed in order by lines 3-9.
    pub compact_art: Vec<String>,
    /// Full-width decorative lines placed between the timestamp block and
    /// the bottom border. Default: none.
    pub extended_art: Vec<String>,
    /// Justification of the extended-art block.
    pub extended_justify: Justify,
    /// Fallback author name when no override and no VCS identity exist.
    pub default_user: Option<String>,
    /// Fallback author email when no override and no VCS identity exist.
    pub default_email: Option<String>,
    /// Version-control identity lookup options.
    pub vcs: VcsConfig,
}

impl Default for HeaderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            margin: DEFAULT_MARGIN,
            compact_art: DEFAULT_COMPACT_ART.iter().map(|s| (*s).to_string()).collect(),
            extended_art: Vec::new(),
            extended_justify: Justify::Right,
            default_user: None,
            default_email: None,
            vcs: VcsConfig::default(),
        }
    }
}

impl HeaderConfig {
    /// Compact-art token for slot `i` (zero-based), or the empty token when
    /// the configured list is shorter than seven entries.
    #[must_use]
    pub fn compact(&self, i: usize) -> &str {
        self.compact_art.get(i).map_or("", String::as_str)
    }
}

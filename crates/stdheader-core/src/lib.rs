#![allow(clippy::doc_markdown)]

//! stdheader-core - Standard file-header generation and maintenance
//!
//! Generates the organization's fixed-width comment-block header, detects
//! whether a document already carries one, and refreshes the mutable fields
//! while preserving creation metadata.
//!
//! # Features
//!
//! - **Fixed-width layout**: configurable width, margin and comment
//!   delimiters; silent truncation of overlong text
//! - **Decorative art**: compact per-line tokens plus an optional
//!   full-width extended block with left/right justification
//! - **Structural detection**: sparse signature comparison that tolerates
//!   differing filenames, identities and timestamps
//! - **Selective update**: creation line and author line survive every
//!   refresh byte for byte
//!
//! # Architecture
//!
//! ```text
//! stdheader-core/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # HeaderError enum (thiserror)
//! ├── config.rs   # HeaderConfig, VcsConfig, Justify
//! ├── layout.rs   # Line rendering: render_text_line, render_art_block
//! ├── header.rs   # Header container + line-position constants
//! ├── compose.rs  # compose_header
//! ├── matcher.rs  # is_header_present
//! ├── identity.rs # Scope, IdentityLookup, resolve_user / resolve_email
//! └── apply.rs    # Document trait + apply_header orchestration
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use stdheader_core::{apply_header, Delimiters, HeaderConfig};
//!
//! let cfg = HeaderConfig::default();
//! let delims = Delimiters::new("//", "//");
//! apply_header(&mut doc, &cfg, &delims, "alice", "alice@example.org", now)?;
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod apply;
mod compose;
mod config;
mod error;
mod header;
mod identity;
mod layout;
mod matcher;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use apply::{apply_header, Applied, Document};
pub use compose::compose_header;
pub use config::{HeaderConfig, Justify, VcsConfig, DEFAULT_MARGIN, DEFAULT_WIDTH};
pub use error::HeaderError;
pub use header::{Header, AUTHOR_LINE, CREATED_LINE, UPDATED_LINE};
pub use identity::{resolve_email, resolve_user, IdentityLookup, NoIdentity, Scope};
pub use layout::{render_art_block, render_text_line, Delimiters};
pub use matcher::is_header_present;

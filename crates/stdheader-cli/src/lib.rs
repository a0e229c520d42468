#![allow(clippy::doc_markdown)]

//! stdheader-cli - Host glue for the standard file-header tool
//!
//! Everything the core treats as an external capability lives here: the
//! file-backed document, the comment-delimiter table, git identity lookup
//! and settings loading. The `stdheader` binary in `main.rs` wires these
//! into the core orchestration.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod doc;
pub mod git;
pub mod lang;
pub mod settings;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use doc::FileDocument;
pub use git::GitIdentity;
pub use lang::delimiters_for;
pub use settings::load_settings;

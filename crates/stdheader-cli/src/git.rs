//! Committer identity from git configuration via libgit2.
//!
//! Global scope reads the user-wide configuration; local scope discovers
//! the repository containing the document and reads its configuration
//! (which itself falls back to the global values, matching git's own
//! resolution). Every failure maps to an absent identity, never an error.

use std::path::{Path, PathBuf};

use tracing::debug;

use stdheader_core::{IdentityLookup, Scope};

/// Identity lookup rooted at the document's location.
pub struct GitIdentity {
    start: PathBuf,
}

impl GitIdentity {
    /// Lookup that discovers repositories upward from `start`. A file path
    /// anchors at its parent directory, since discovery starts from a
    /// directory that exists.
    #[must_use]
    pub fn new(start: PathBuf) -> Self {
        let start = if start.is_dir() {
            start
        } else {
            start
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
        };
        Self { start }
    }

    fn config(&self, scope: Scope) -> Option<git2::Config> {
        match scope {
            Scope::Global => git2::Config::open_default().ok(),
            Scope::Local => {
                let repo = git2::Repository::discover(&self.start)
                    .map_err(|e| debug!("no repository at {}: {e}", self.start.display()))
                    .ok()?;
                repo.config().ok()
            }
        }
    }

    fn get(&self, scope: Scope, key: &str) -> Option<String> {
        self.config(scope)?.get_string(key).ok()
    }
}

impl IdentityLookup for GitIdentity {
    fn committer_name(&self, scope: Scope) -> Option<String> {
        self.get(scope, "user.name")
    }

    fn committer_email(&self, scope: Scope) -> Option<String> {
        self.get(scope, "user.email")
    }
}

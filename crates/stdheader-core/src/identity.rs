//! Identity resolver: who the header says wrote the file.
//!
//! Priority, first present wins: explicit override > version-control
//! committer (when enabled) > configured default. When all three are absent
//! the field renders as the empty string; identity absence is never an
//! error.

use serde::Deserialize;

use crate::config::HeaderConfig;

/// Which version-control configuration to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The user-wide configuration (default).
    #[default]
    Global,
    /// The configuration of the repository containing the document.
    Local,
}

/// Host capability: committer identity from version control.
///
/// Implementations block with no timeout; the lookup is expected to be a
/// sub-second local operation. A failed lookup is `None`, not an error.
pub trait IdentityLookup {
    /// Committer name under `scope`, if configured.
    fn committer_name(&self, scope: Scope) -> Option<String>;
    /// Committer email under `scope`, if configured.
    fn committer_email(&self, scope: Scope) -> Option<String>;
}

/// The null lookup, for hosts without version control available.
pub struct NoIdentity;

impl IdentityLookup for NoIdentity {
    fn committer_name(&self, _scope: Scope) -> Option<String> {
        None
    }

    fn committer_email(&self, _scope: Scope) -> Option<String> {
        None
    }
}

/// Resolve the display name for the header.
#[must_use]
pub fn resolve_user(
    explicit: Option<&str>,
    cfg: &HeaderConfig,
    lookup: &dyn IdentityLookup,
) -> String {
    if let Some(user) = explicit {
        return user.to_string();
    }
    if cfg.vcs.enabled {
        if let Some(user) = lookup.committer_name(cfg.vcs.name_scope) {
            return user;
        }
    }
    cfg.default_user.clone().unwrap_or_default()
}

/// Resolve the email address for the header.
#[must_use]
pub fn resolve_email(
    explicit: Option<&str>,
    cfg: &HeaderConfig,
    lookup: &dyn IdentityLookup,
) -> String {
    if let Some(email) = explicit {
        return email.to_string();
    }
    if cfg.vcs.enabled {
        if let Some(email) = lookup.committer_email(cfg.vcs.email_scope) {
            return email;
        }
    }
    cfg.default_email.clone().unwrap_or_default()
}

//! Tests for git identity lookup against a throwaway repository.

use tempfile::TempDir;

use stdheader_cli::GitIdentity;
use stdheader_core::{IdentityLookup, Scope};

#[test]
fn local_scope_reads_repository_config() {
    let dir = TempDir::new().expect("tempdir");
    let repo = git2::Repository::init(dir.path()).expect("init repo");
    let mut config = repo.config().expect("open config");
    config.set_str("user.name", "repo-user").expect("set name");
    config
        .set_str("user.email", "repo@example.org")
        .expect("set email");

    let lookup = GitIdentity::new(dir.path().join("main.c"));
    assert_eq!(
        lookup.committer_name(Scope::Local).as_deref(),
        Some("repo-user")
    );
    assert_eq!(
        lookup.committer_email(Scope::Local).as_deref(),
        Some("repo@example.org")
    );
}

#[test]
fn missing_repository_resolves_to_absent() {
    let dir = TempDir::new().expect("tempdir");
    let lookup = GitIdentity::new(dir.path().join("orphan.c"));
    assert_eq!(lookup.committer_name(Scope::Local), None);
    assert_eq!(lookup.committer_email(Scope::Local), None);
}

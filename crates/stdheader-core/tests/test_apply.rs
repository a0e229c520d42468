//! Tests for the insert-or-update orchestration over an in-memory document.

use stdheader_core::{
    apply_header, Applied, Delimiters, Document, Header, HeaderConfig, HeaderError,
    AUTHOR_LINE, CREATED_LINE, UPDATED_LINE,
};

/// In-memory document standing in for an editor buffer.
struct MemDoc {
    name: String,
    lines: Vec<String>,
    writable: bool,
}

impl MemDoc {
    fn new(name: &str, lines: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            lines: lines.iter().map(|l| (*l).to_string()).collect(),
            writable: true,
        }
    }
}

impl Document for MemDoc {
    fn filename(&self) -> String {
        self.name.clone()
    }

    fn first_line(&self) -> String {
        self.lines.first().cloned().unwrap_or_default()
    }

    fn first_lines(&self, n: usize) -> Vec<String> {
        self.lines.iter().take(n).cloned().collect()
    }

    fn is_writable(&self) -> bool {
        self.writable
    }

    fn replace_first_lines(&mut self, n: usize, lines: &[String]) -> Result<(), HeaderError> {
        let tail: Vec<String> = self.lines.iter().skip(n).cloned().collect();
        self.lines = lines.to_vec();
        self.lines.extend(tail);
        Ok(())
    }

    fn prepend_lines(&mut self, lines: &[String]) -> Result<(), HeaderError> {
        let mut merged = lines.to_vec();
        merged.append(&mut self.lines);
        self.lines = merged;
        Ok(())
    }
}

const T1: &str = "2026/08/29 09:00:00";
const T2: &str = "2026/08/29 09:05:00";

fn cfg() -> HeaderConfig {
    HeaderConfig::default()
}

fn delims() -> Delimiters {
    Delimiters::default()
}

#[test]
fn insert_separates_from_existing_content() {
    let mut doc = MemDoc::new("a.sh", &["foo"]);
    let applied = apply_header(&mut doc, &cfg(), &delims(), "alice", "a@b", T1)
        .expect("insert");
    assert_eq!(applied, Applied::Inserted);
    // 11 header lines, one blank separator, then the original content.
    assert_eq!(doc.lines.len(), 13);
    assert_eq!(doc.lines[11], "");
    assert_eq!(doc.lines[12], "foo");
}

#[test]
fn insert_into_empty_first_line_adds_no_separator() {
    let mut doc = MemDoc::new("a.sh", &["", "foo"]);
    apply_header(&mut doc, &cfg(), &delims(), "alice", "a@b", T1).expect("insert");
    assert_eq!(doc.lines.len(), 13);
    assert_eq!(doc.lines[11], "");
    assert_eq!(doc.lines[12], "foo");
}

#[test]
fn update_refreshes_only_mutable_fields() {
    let mut doc = MemDoc::new("a.sh", &["foo"]);
    apply_header(&mut doc, &cfg(), &delims(), "alice", "alice@x", T1).expect("insert");
    let created_before = doc.lines[CREATED_LINE].clone();
    let author_before = doc.lines[AUTHOR_LINE].clone();

    let applied = apply_header(&mut doc, &cfg(), &delims(), "bob", "bob@x", T2)
        .expect("update");
    assert_eq!(applied, Applied::Updated);
    assert_eq!(doc.lines[CREATED_LINE], created_before);
    assert_eq!(doc.lines[AUTHOR_LINE], author_before);
    assert!(doc.lines[UPDATED_LINE].contains("Updated: 2026/08/29 09:05:00 by bob"));
    // Content below the header is untouched.
    assert_eq!(doc.lines[12], "foo");
    assert_eq!(doc.lines.len(), 13);
}

#[test]
fn update_is_idempotent_under_a_fixed_clock() {
    let mut doc = MemDoc::new("a.sh", &["foo"]);
    apply_header(&mut doc, &cfg(), &delims(), "alice", "a@b", T1).expect("insert");
    let after_first = doc.lines.clone();
    apply_header(&mut doc, &cfg(), &delims(), "alice", "a@b", T1).expect("update");
    assert_eq!(doc.lines, after_first);
}

#[test]
fn partial_header_resemblance_inserts_fresh() {
    // A lone border line resembles a header but fails the signature.
    let border = {
        let h: Header = stdheader_core::compose_header(
            &cfg(),
            &delims(),
            "a.sh",
            "alice",
            "a@b",
            T1,
        )
        .expect("compose");
        h.line(0).expect("border").to_string()
    };
    let mut doc = MemDoc::new("a.sh", &[&border, "foo"]);
    let applied = apply_header(&mut doc, &cfg(), &delims(), "alice", "a@b", T1)
        .expect("insert");
    assert_eq!(applied, Applied::Inserted);
    // Fresh header above, old pseudo-header pushed down.
    assert_eq!(doc.lines[12], border);
}

#[test]
fn unwritable_document_is_untouched() {
    let mut doc = MemDoc::new("a.sh", &["foo"]);
    doc.writable = false;
    let err = apply_header(&mut doc, &cfg(), &delims(), "alice", "a@b", T1)
        .expect_err("must refuse");
    assert!(matches!(err, HeaderError::NotWritable));
    assert_eq!(doc.lines, vec!["foo".to_string()]);
}

#[test]
fn art_overflow_leaves_document_untouched() {
    let cfg = HeaderConfig {
        extended_art: vec!["#".repeat(120)],
        ..HeaderConfig::default()
    };
    let mut doc = MemDoc::new("a.sh", &["foo"]);
    let err = apply_header(&mut doc, &cfg, &delims(), "alice", "a@b", T1)
        .expect_err("art cannot fit");
    assert!(matches!(err, HeaderError::ArtTooWide { .. }));
    assert_eq!(doc.lines, vec!["foo".to_string()]);
}

#[test]
fn empty_identity_still_produces_a_header() {
    let mut doc = MemDoc::new("a.sh", &["foo"]);
    apply_header(&mut doc, &cfg(), &delims(), "", "", T1).expect("insert");
    assert!(doc.lines[AUTHOR_LINE].contains("By:  <>"));
}

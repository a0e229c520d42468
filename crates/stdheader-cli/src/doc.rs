//! File-backed document implementation.
//!
//! Presents a file on disk as the line vector the core operates on. Writes
//! are atomic: the whole file is rewritten through a temporary file in the
//! same directory and renamed over the original, so an interrupted run
//! never leaves a half-written header.

use std::io::Write;
use std::path::{Path, PathBuf};

use stdheader_core::{Document, HeaderError};

/// A document loaded from a file.
pub struct FileDocument {
    path: PathBuf,
    lines: Vec<String>,
    trailing_newline: bool,
}

impl FileDocument {
    /// Load `path` into memory.
    pub fn load(path: &Path) -> Result<Self, HeaderError> {
        let content = std::fs::read_to_string(path)?;
        let trailing_newline = content.is_empty() || content.ends_with('\n');
        let mut lines: Vec<String> = content.split('\n').map(str::to_string).collect();
        if content.ends_with('\n') {
            // split leaves one empty entry after the final newline
            lines.pop();
        }
        if content.is_empty() {
            lines.clear();
        }
        Ok(Self {
            path: path.to_path_buf(),
            lines,
            trailing_newline,
        })
    }

    /// Current line content (for inspection in tests and `check`).
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn save(&self) -> Result<(), HeaderError> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(self.lines.join("\n").as_bytes())?;
        if self.trailing_newline && !self.lines.is_empty() {
            tmp.write_all(b"\n")?;
        }
        tmp.persist(&self.path).map_err(|e| HeaderError::Io(e.error))?;
        Ok(())
    }
}

impl Document for FileDocument {
    fn filename(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn first_line(&self) -> String {
        self.lines.first().cloned().unwrap_or_default()
    }

    fn first_lines(&self, n: usize) -> Vec<String> {
        self.lines.iter().take(n).cloned().collect()
    }

    fn is_writable(&self) -> bool {
        std::fs::metadata(&self.path)
            .map(|m| !m.permissions().readonly())
            .unwrap_or(false)
    }

    fn replace_first_lines(&mut self, n: usize, lines: &[String]) -> Result<(), HeaderError> {
        let tail: Vec<String> = self.lines.iter().skip(n).cloned().collect();
        self.lines = lines.to_vec();
        self.lines.extend(tail);
        self.save()
    }

    fn prepend_lines(&mut self, lines: &[String]) -> Result<(), HeaderError> {
        let mut merged = lines.to_vec();
        merged.append(&mut self.lines);
        self.lines = merged;
        self.save()
    }
}

//! Comment-delimiter lookup by file extension.
//!
//! The table covers the conventions the header is commonly dropped into;
//! anything unknown falls back to `("#", "#")`. Looked up once per
//! invocation and never cached across documents.

use std::path::Path;

use stdheader_core::Delimiters;

/// Comment delimiter pair for the document at `path`.
#[must_use]
pub fn delimiters_for(path: &Path) -> Delimiters {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("c" | "h" | "cpp" | "cc" | "cxx" | "hpp" | "hh" | "css") => {
            Delimiters::new("/*", "*/")
        }
        Some(
            "rs" | "go" | "js" | "jsx" | "ts" | "tsx" | "java" | "kt" | "swift" | "scala"
            | "cs" | "d" | "zig" | "php",
        ) => Delimiters::new("//", "//"),
        Some("lisp" | "el" | "clj" | "cljs" | "scm" | "rkt" | "asm" | "s") => {
            Delimiters::new(";;", ";;")
        }
        Some("hs" | "lhs" | "lua" | "sql" | "elm" | "vhd" | "vhdl") => {
            Delimiters::new("--", "--")
        }
        Some("html" | "htm" | "xml" | "svg" | "md" | "vue") => Delimiters::new("<!--", "-->"),
        Some("ml" | "mli" | "mll" | "mly") => Delimiters::new("(*", "*)"),
        Some("f90" | "f95" | "f03") => Delimiters::new("!!", "!!"),
        Some("tex" | "sty") => Delimiters::new("%%", "%%"),
        Some("vim" | "vimrc") => Delimiters::new("\"\"", "\"\""),
        _ => Delimiters::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn c_family_uses_block_comments() {
        assert_eq!(
            delimiters_for(Path::new("main.c")),
            Delimiters::new("/*", "*/")
        );
        assert_eq!(
            delimiters_for(Path::new("lib.HPP")),
            Delimiters::new("/*", "*/")
        );
    }

    #[test]
    fn rust_uses_line_comments() {
        assert_eq!(
            delimiters_for(Path::new("src/lib.rs")),
            Delimiters::new("//", "//")
        );
    }

    #[test]
    fn unknown_and_bare_files_fall_back_to_hash() {
        assert_eq!(delimiters_for(Path::new("Makefile")), Delimiters::default());
        assert_eq!(
            delimiters_for(Path::new("script.unknown-ext")),
            Delimiters::default()
        );
    }
}

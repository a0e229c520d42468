use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "stdheader")]
#[command(about = "Insert or refresh the standard comment-block header of a source file.")]
pub(crate) struct Cli {
    /// Settings file (default: $STDHEADER_CONFIG, else ~/.config/stdheader/settings.yaml).
    #[arg(long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Author name override (beats VCS identity and configured default).
    #[arg(long, global = true)]
    pub(crate) user: Option<String>,

    /// Author email override (beats VCS identity and configured default).
    #[arg(long, global = true)]
    pub(crate) email: Option<String>,

    /// Total header line width in columns.
    #[arg(long, global = true)]
    pub(crate) width: Option<usize>,

    /// Margin columns on each side of the content.
    #[arg(long, global = true)]
    pub(crate) margin: Option<usize>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Insert a header, or refresh the existing one in place.
    Apply {
        /// File to edit.
        file: PathBuf,
    },
    /// Report whether the file already carries a valid header. Exit 1 if not.
    Check {
        /// File to inspect.
        file: PathBuf,
    },
    /// Print the header that would be inserted, without touching the file.
    Preview {
        /// File the header would be composed for.
        file: PathBuf,
    },
}

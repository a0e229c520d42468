//! stdheader CLI: apply, check or preview the standard file header.
//!
//! Logging: set `RUST_LOG=stdheader=debug` (or `warn`) to adjust verbosity
//! on stderr.

mod cli;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use stdheader_core::{
    apply_header, compose_header, is_header_present, resolve_email, resolve_user, Applied,
    Document, HeaderConfig,
};
use stdheader_cli::{delimiters_for, load_settings, FileDocument, GitIdentity};

use crate::cli::{Cli, Command};

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stdheader=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut cfg = load_settings(cli.config.as_deref())?;
    if let Some(width) = cli.width {
        cfg.width = width;
    }
    if let Some(margin) = cli.margin {
        cfg.margin = margin;
    }

    match cli.command {
        Command::Apply { file } => run_apply(&file, &cfg, cli.user.as_deref(), cli.email.as_deref()),
        Command::Check { file } => run_check(&file, &cfg),
        Command::Preview { file } => {
            run_preview(&file, &cfg, cli.user.as_deref(), cli.email.as_deref())
        }
    }
}

fn identity(
    file: &Path,
    cfg: &HeaderConfig,
    user: Option<&str>,
    email: Option<&str>,
) -> (String, String) {
    let lookup = GitIdentity::new(file.to_path_buf());
    (
        resolve_user(user, cfg, &lookup),
        resolve_email(email, cfg, &lookup),
    )
}

fn now() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

fn run_apply(
    file: &Path,
    cfg: &HeaderConfig,
    user: Option<&str>,
    email: Option<&str>,
) -> anyhow::Result<ExitCode> {
    let mut doc =
        FileDocument::load(file).with_context(|| format!("loading {}", file.display()))?;
    let delims = delimiters_for(file);
    let (user, email) = identity(file, cfg, user, email);
    let applied = apply_header(&mut doc, cfg, &delims, &user, &email, &now())
        .with_context(|| format!("applying header to {}", file.display()))?;
    match applied {
        Applied::Inserted => println!("{}: header inserted", file.display()),
        Applied::Updated => println!("{}: header updated", file.display()),
    }
    Ok(ExitCode::SUCCESS)
}

fn run_check(file: &Path, cfg: &HeaderConfig) -> anyhow::Result<ExitCode> {
    let doc = FileDocument::load(file).with_context(|| format!("loading {}", file.display()))?;
    let delims = delimiters_for(file);
    let filename = doc.filename();
    // Identity and clock never reach the signature lines; placeholders do.
    let candidate = compose_header(cfg, &delims, &filename, "", "", "")
        .with_context(|| format!("composing reference header for {}", file.display()))?;
    if is_header_present(&candidate, &doc.first_lines(candidate.len())) {
        println!("{}: header present", file.display());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("{}: no header", file.display());
        Ok(ExitCode::FAILURE)
    }
}

fn run_preview(
    file: &Path,
    cfg: &HeaderConfig,
    user: Option<&str>,
    email: Option<&str>,
) -> anyhow::Result<ExitCode> {
    let delims = delimiters_for(file);
    let (user, email) = identity(file, cfg, user, email);
    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let header = compose_header(cfg, &delims, &filename, &user, &email, &now())
        .with_context(|| format!("composing header for {}", file.display()))?;
    for line in header.lines() {
        println!("{line}");
    }
    Ok(ExitCode::SUCCESS)
}

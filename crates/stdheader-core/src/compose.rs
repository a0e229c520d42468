//! Header composer: assembles the full ordered line sequence.

use crate::config::HeaderConfig;
use crate::error::HeaderError;
use crate::header::Header;
use crate::layout::{render_art_block, render_text_line, Delimiters};

/// Compose a complete header for `filename`, stamped with `now`.
///
/// Deterministic given its inputs: `now` must already be formatted as
/// `YYYY/MM/DD HH:MM:SS` and `user`/`email` already resolved (see
/// [`crate::identity`]). Fails without producing a partial header when the
/// extended-art block cannot be rendered.
pub fn compose_header(
    cfg: &HeaderConfig,
    delims: &Delimiters,
    filename: &str,
    user: &str,
    email: &str,
    now: &str,
) -> Result<Header, HeaderError> {
    let border = render_text_line(
        &"*".repeat(cfg.width.saturating_sub(cfg.margin * 2)),
        "",
        cfg,
        delims,
    );
    let blank = render_text_line("", "", cfg, delims);
    let text = |t: &str, slot: usize| render_text_line(t, cfg.compact(slot), cfg, delims);

    let mut lines = Vec::with_capacity(11 + cfg.extended_art.len());
    lines.push(border.clone());
    lines.push(blank.clone());
    lines.push(text("", 0));
    lines.push(text(filename, 1));
    lines.push(text("", 2));
    lines.push(text(&format!("By: {user} <{email}>"), 3));
    lines.push(text("", 4));
    lines.push(text(&format!("Created: {now} by {user}"), 5));
    lines.push(text(&format!("Updated: {now} by {user}"), 6));
    lines.push(blank);
    lines.extend(render_art_block(&cfg.extended_art, cfg, delims)?);
    lines.push(border);

    Ok(Header::new(lines))
}

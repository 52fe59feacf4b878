//! Fetch, extract, print.
//!
//! Each operator is written to the output as soon as it is read; nothing is
//! buffered for atomicity, so lines printed before a later failure stay printed.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::checksum;
use crate::config::OpnameConfig;
use crate::error::ExtractError;
use crate::extract::{self, Operator, Operators};
use crate::fetch::{self, FetchOptions};

/// How each operator is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    /// `"I32Add",` ready to paste into an array literal.
    #[default]
    ListEntry,
    /// `i32.add -- I32Add`
    Pairs,
}

impl OutputStyle {
    pub fn render(self, op: &Operator) -> String {
        match self {
            OutputStyle::ListEntry => format!("\"{}\",", op.name),
            OutputStyle::Pairs => format!("{} -- {}", op.token, op.name),
        }
    }
}

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Fetched over HTTP(S) and spooled to a temporary file.
    Remote(String),
    /// Read in place; no temporary file.
    Local(PathBuf),
}

impl Source {
    /// `--file` wins over `--url`, which wins over the configured URL.
    pub fn select(url: Option<String>, file: Option<PathBuf>, cfg: &OpnameConfig) -> Self {
        match (file, url) {
            (Some(path), _) => Source::Local(path),
            (None, Some(url)) => Source::Remote(url),
            (None, None) => Source::Remote(cfg.source_url.clone()),
        }
    }
}

/// What a run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_scanned: usize,
    pub operators: usize,
    /// SHA-256 of the fetched document; None for local sources.
    pub sha256: Option<String>,
}

/// Writes every operator from `ops` to `out`, one line each, flushing per line.
/// Returns the number of lines written.
pub fn emit<I, W>(ops: I, style: OutputStyle, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = Result<Operator, ExtractError>>,
    W: Write,
{
    let mut written = 0;
    for op in ops {
        let op = op.context("scan document")?;
        writeln!(out, "{}", style.render(&op)).context("write output")?;
        out.flush().context("flush output")?;
        written += 1;
    }
    Ok(written)
}

fn emit_all<R: BufRead, W: Write>(
    mut ops: Operators<R>,
    style: OutputStyle,
    out: &mut W,
) -> Result<RunSummary> {
    let operators = emit(ops.by_ref(), style, out)?;
    Ok(RunSummary {
        lines_scanned: ops.lines_scanned(),
        operators,
        sha256: None,
    })
}

/// Runs the whole pipeline for `source`, writing results to `out`.
///
/// For a remote source the temporary file is removed before this returns,
/// whether it returns Ok or Err.
pub fn run<W: Write>(
    source: &Source,
    cfg: &OpnameConfig,
    style: OutputStyle,
    out: &mut W,
) -> Result<RunSummary> {
    let summary = match source {
        Source::Remote(url) => {
            tracing::info!("fetching {}", url);
            let doc = fetch::fetch_to_tempfile(url, &FetchOptions::from(cfg))
                .with_context(|| format!("fetch {}", url))?;
            let ops = extract::open(doc.path(), cfg.skip_lines)?;
            let mut summary = emit_all(ops, style, out)?;
            summary.sha256 = Some(doc.sha256().to_string());
            summary
        }
        Source::Local(path) => {
            let ops = extract::open(path, cfg.skip_lines)?;
            emit_all(ops, style, out)?
        }
    };

    tracing::info!(
        "scanned {} lines, found {} operators",
        summary.lines_scanned,
        summary.operators
    );
    Ok(summary)
}

/// Fetches `url` and returns the SHA-256 of the document as lowercase hex.
pub fn digest(url: &str, cfg: &OpnameConfig) -> Result<String> {
    let doc = fetch::fetch_to_tempfile(url, &FetchOptions::from(cfg))
        .with_context(|| format!("fetch {}", url))?;
    let digest = checksum::sha256_path(doc.path())?;
    tracing::info!("{} bytes from {}: sha256 {}", doc.len(), url, digest);
    Ok(digest)
}

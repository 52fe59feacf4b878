//! `opname [names|pairs]`: fetch (or open) the document and print operators.

use anyhow::Result;
use opname_core::config::OpnameConfig;
use opname_core::driver::{self, OutputStyle, Source};
use std::io;

use crate::cli::SourceArgs;

pub fn run_extract(cfg: &OpnameConfig, args: SourceArgs, style: OutputStyle) -> Result<()> {
    let source = Source::select(args.url, args.file, cfg);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = driver::run(&source, cfg, style, &mut out)?;
    if let Some(sha) = &summary.sha256 {
        tracing::debug!("source document sha256 {}", sha);
    }
    Ok(())
}

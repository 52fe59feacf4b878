//! `opname digest`: SHA-256 of the current upstream document.

use anyhow::Result;
use opname_core::config::OpnameConfig;
use opname_core::driver;

/// Fetch the document and print `<sha256>  <url>`.
pub fn run_digest(cfg: &OpnameConfig, url: Option<String>) -> Result<()> {
    let url = url.unwrap_or_else(|| cfg.source_url.clone());
    let digest = driver::digest(&url, cfg)?;
    println!("{}  {}", digest, url);
    Ok(())
}

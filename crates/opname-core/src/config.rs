use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Upstream implementation-status document listing the SIMD operators.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/WebAssembly/simd/main/proposals/simd/ImplementationStatus.md";

/// Title and blank line at the top of the status document.
pub const DEFAULT_SKIP_LINES: usize = 2;

/// Global configuration loaded from `~/.config/opname/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpnameConfig {
    /// Document to fetch when no `--url` or `--file` is given.
    pub source_url: String,
    /// Number of leading lines discarded before scanning.
    pub skip_lines: usize,
    /// Optional connect timeout in seconds (None = transport default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Optional total transfer timeout in seconds (None = wait indefinitely).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Maximum number of redirects followed by the fetcher.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
}

fn default_max_redirections() -> u32 {
    10
}

impl Default for OpnameConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            skip_lines: DEFAULT_SKIP_LINES,
            connect_timeout_secs: None,
            timeout_secs: None,
            max_redirections: default_max_redirections(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("opname")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<OpnameConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = OpnameConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: OpnameConfig = toml::from_str(&data)?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

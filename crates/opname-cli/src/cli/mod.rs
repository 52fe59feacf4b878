//! CLI for opname.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use opname_core::config::{self, OpnameConfig};
use opname_core::driver::OutputStyle;
use std::path::PathBuf;

use commands::{run_completions, run_digest, run_extract, run_man};

/// Top-level CLI for opname.
#[derive(Debug, Parser)]
#[command(name = "opname")]
#[command(
    about = "Derive runtime operator names from the WebAssembly SIMD implementation-status document",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

/// Where to read the document from.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Fetch this URL instead of the configured source.
    #[arg(long, value_name = "URL", conflicts_with = "file")]
    pub url: Option<String>,

    /// Scan a local file instead of fetching.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print each operator name as `"Name",` (default).
    Names {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print each operator as `token -- Name`.
    Pairs {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Fetch the document and print its SHA-256.
    Digest {
        /// Fetch this URL instead of the configured source.
        #[arg(long, value_name = "URL")]
        url: Option<String>,
    },

    /// Print a shell completion script.
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl Default for CliCommand {
    fn default() -> Self {
        CliCommand::Names {
            source: SourceArgs::default(),
        }
    }
}

fn load_config() -> Result<OpnameConfig> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command.unwrap_or_default() {
            CliCommand::Names { source } => {
                run_extract(&load_config()?, source, OutputStyle::ListEntry)?
            }
            CliCommand::Pairs { source } => {
                run_extract(&load_config()?, source, OutputStyle::Pairs)?
            }
            CliCommand::Digest { url } => run_digest(&load_config()?, url)?,
            CliCommand::Completions { shell } => run_completions(shell)?,
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

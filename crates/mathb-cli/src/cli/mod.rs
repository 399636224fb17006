//! CLI for inspecting and provisioning a MathB deployment.

mod commands;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use mathb_core::config::{self, FileConfig};
use mathb_core::Configuration;
use std::path::PathBuf;

use commands::{
    run_check_ip, run_completions, run_count_path, run_init, run_post_path, run_post_url, run_show,
};

/// Top-level CLI for MathB.
#[derive(Debug, Parser)]
#[command(name = "mathb")]
#[command(about = "MathB: storage layout, post URLs and IP blacklist of a paste deployment", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub overrides: Overrides,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Settings layered over `config.toml`.
#[derive(Debug, Default, Args)]
pub struct Overrides {
    /// Config file to read instead of ~/.config/mathb/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Web server document root; the content directory defaults to mathb-content/ next to it.
    #[arg(long, global = true, value_name = "PATH")]
    pub document_root: Option<PathBuf>,

    /// Content directory (post files and count.dat).
    #[arg(long, global = true, value_name = "PATH")]
    pub content_dir: Option<String>,

    /// Cache directory for rendered previews.
    #[arg(long, global = true, value_name = "PATH")]
    pub cache_dir: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show the resolved directories, count file and blacklist.
    Show {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Create the content and cache directories (owner-only permissions).
    Init,

    /// Check a client IP against the blacklist (exit code 2 if denied).
    CheckIp {
        /// Client IP address.
        ip: String,
    },

    /// Print the content file path of a post.
    PostPath {
        /// Post identifier.
        id: String,
    },

    /// Print the path of the shared post counter file.
    CountPath,

    /// Print the public URL of a post.
    PostUrl {
        /// Post identifier.
        id: String,

        /// Secret key appended as ?key=...
        #[arg(long)]
        key: Option<String>,

        /// Base URL (defaults to host_url from the config file).
        #[arg(long, value_name = "URL")]
        host_url: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl Overrides {
    fn file_config(&self) -> Result<FileConfig> {
        let mut file = match &self.config {
            Some(path) => FileConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => config::load_or_init()?,
        };
        if let Some(root) = &self.document_root {
            file.document_root = Some(root.clone());
        }
        if let Some(content) = &self.content_dir {
            file.content_directory = Some(content.clone());
        }
        if let Some(cache) = &self.cache_dir {
            file.cache_directory = Some(cache.clone());
        }
        Ok(file)
    }
}

impl CliCommand {
    /// Runs the parsed command and returns the process exit code.
    pub fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();
        match cli.command {
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(0)
            }
            command => {
                let file = cli.overrides.file_config()?;
                tracing::debug!("loaded config: {:?}", file);
                let cfg = file.to_configuration().context("resolving configuration")?;
                command.run(&cfg, &file)
            }
        }
    }

    fn run(self, cfg: &Configuration, file: &FileConfig) -> Result<i32> {
        match self {
            CliCommand::Show { json } => run_show(cfg, json)?,
            CliCommand::Init => run_init(cfg)?,
            CliCommand::CheckIp { ip } => return Ok(run_check_ip(cfg, &ip)),
            CliCommand::PostPath { id } => run_post_path(cfg, &id),
            CliCommand::CountPath => run_count_path(cfg),
            CliCommand::PostUrl { id, key, host_url } => {
                run_post_url(cfg, file, &id, key.as_deref(), host_url.as_deref())?
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests;

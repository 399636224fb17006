//! `mathb init` – create the content and cache directories.

use anyhow::{Context, Result};
use mathb_core::Configuration;

pub fn run_init(cfg: &Configuration) -> Result<()> {
    cfg.create_directories()
        .context("provisioning storage directories")?;
    println!("content: {}", cfg.content_directory_path());
    println!("cache:   {}", cfg.cache_directory_path());
    Ok(())
}

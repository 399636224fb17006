//! `mathb post-path`, `count-path` and `post-url` – derived locations.

use anyhow::{bail, Result};
use mathb_core::config::FileConfig;
use mathb_core::{Configuration, FixedHostUrl};

pub fn run_post_path(cfg: &Configuration, id: &str) {
    println!("{}", cfg.post_file_path(id));
}

pub fn run_count_path(cfg: &Configuration) {
    println!("{}", cfg.count_file_path());
}

pub fn run_post_url(
    cfg: &Configuration,
    file: &FileConfig,
    id: &str,
    key: Option<&str>,
    host_url: Option<&str>,
) -> Result<()> {
    let host = resolve_host_url(file, host_url)?;
    println!("{}", cfg.post_url(&host, id, key));
    Ok(())
}

/// `--host-url` wins over `host_url` in the config file.
fn resolve_host_url(file: &FileConfig, flag: Option<&str>) -> Result<FixedHostUrl> {
    if let Some(raw) = flag {
        return Ok(FixedHostUrl::parse(raw)?);
    }
    match file.host_url()? {
        Some(host) => Ok(host),
        None => bail!("no host URL: pass --host-url or set host_url in config.toml"),
    }
}

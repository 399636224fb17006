//! `mathb show` – print the resolved configuration.

use anyhow::Result;
use mathb_core::Configuration;

pub fn run_show(cfg: &Configuration, json: bool) -> Result<()> {
    if json {
        let mut value = serde_json::to_value(cfg)?;
        value["count_file_path"] = cfg.count_file_path().into();
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{:<10} {}", "CONTENT", cfg.content_directory_path());
    println!("{:<10} {}", "CACHE", cfg.cache_directory_path());
    println!("{:<10} {}", "COUNT", cfg.count_file_path());
    if cfg.ip_blacklist().is_empty() {
        println!("{:<10} -", "BLACKLIST");
    } else {
        for (i, pattern) in cfg.ip_blacklist().patterns().enumerate() {
            let label = if i == 0 { "BLACKLIST" } else { "" };
            println!("{:<10} {}", label, pattern);
        }
    }
    Ok(())
}

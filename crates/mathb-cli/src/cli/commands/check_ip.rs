//! `mathb check-ip` – test a client IP against the blacklist.

use mathb_core::Configuration;

/// Exit code for a blacklisted client.
pub const EXIT_BLACKLISTED: i32 = 2;

/// Prints the verdict and returns the exit code (0 allowed, 2 blacklisted).
pub fn run_check_ip(cfg: &Configuration, ip: &str) -> i32 {
    match cfg.blacklist_match(ip) {
        Some(pattern) => {
            tracing::info!("client {} blacklisted by {}", ip, pattern);
            println!("blacklisted by {pattern}");
            EXIT_BLACKLISTED
        }
        None => {
            println!("allowed");
            0
        }
    }
}

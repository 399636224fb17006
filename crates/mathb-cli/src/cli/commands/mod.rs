//! CLI command handlers.

mod check_ip;
mod completions;
mod init;
mod paths;
mod show;

pub use check_ip::run_check_ip;
pub use completions::run_completions;
pub use init::run_init;
pub use paths::{run_count_path, run_post_path, run_post_url};
pub use show::run_show;

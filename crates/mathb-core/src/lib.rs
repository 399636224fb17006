pub mod blacklist;
pub mod config;
pub mod error;
pub mod host_url;
pub mod logging;

pub use blacklist::IpBlacklist;
pub use config::{Configuration, SharedConfiguration};
pub use error::ConfigError;
pub use host_url::{FixedHostUrl, HostUrl};

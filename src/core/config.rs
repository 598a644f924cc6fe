//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

use std::path::PathBuf;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory served under `/images`
    /// Example: /srv/zera/images
    pub asset_dir: Option<PathBuf>,

    /// Brotli/Gzip response compression
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("ZERA_ASSET_DIR").ok(),
            std::env::var("ZERA_COMPRESSION").ok(),
        )
    }

    fn from_vars(asset_dir: Option<String>, compression: Option<String>) -> Self {
        Self {
            asset_dir: asset_dir
                .map(|dir| dir.trim().to_string())
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
            compression: compression.as_deref().is_none_or(parse_flag),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Anything but `false`/`0`/`off`/`no` enables the flag
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "false" | "0" | "off" | "no"
    )
}

//! Cache location and catalog endpoint resolution

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{BomError, Result};

/// Environment variable overriding the cache directory
pub const CACHE_DIR_VAR: &str = "BOMCOST_CACHE_DIR";

/// Environment variable overriding the catalog base URL
pub const API_URL_VAR: &str = "DIGIKEY_API_URL";

const DEFAULT_API_URL: &str = "https://api.digikey.com";

/// Resolve the on-disk cache directory.
///
/// `BOMCOST_CACHE_DIR` wins when set; otherwise the platform cache dir
/// (e.g. `~/.cache/bomcost` on Linux).
pub fn cache_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CACHE_DIR_VAR) {
        return Ok(PathBuf::from(dir));
    }

    ProjectDirs::from("", "", "bomcost")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .ok_or(BomError::NoCacheDir)
}

/// Resolve the catalog base URL (`DIGIKEY_API_URL` or the production host)
pub fn base_url() -> String {
    std::env::var(API_URL_VAR).unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

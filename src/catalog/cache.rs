//! Disk cache for OAuth tokens and keyword-search responses
//!
//! One JSON file per cached item: `token.json` for the access token,
//! `search/<identifier>.json` for search responses. Both carry absolute
//! timestamps and expire on read; stale or unreadable entries are
//! treated as misses.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use chrono::Utc;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Seconds of slack subtracted from token expiry before reuse
const TOKEN_SLACK_SECS: i64 = 60;

/// Search responses are reused for this long
const SEARCH_TTL_SECS: i64 = 4 * 3600;

/// A cached OAuth access token with absolute expiry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedToken {
    pub access_token: String,

    /// Unix timestamp after which the token is invalid
    pub expires_at: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct CachedSearch {
    cached_at: i64,
    response: Value,
}

/// Counts reported by `bomcost cache status`
#[derive(Debug, Default, Clone, Copy)]
pub struct CacheStats {
    pub has_token: bool,
    pub search_entries: usize,
}

/// File-per-entry JSON cache rooted at one directory
#[derive(Debug)]
pub struct DiskCache {
    root: PathBuf,
}

impl DiskCache {
    /// Open (and create) the cache at `root`
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(root.join("search"))?;
        Ok(Self { root })
    }

    fn token_path(&self) -> PathBuf {
        self.root.join("token.json")
    }

    fn search_path(&self, keyword: &str) -> PathBuf {
        self.root
            .join("search")
            .join(format!("{}.json", normalize_filename(keyword)))
    }

    /// Load the cached token when it is still valid
    pub fn load_token(&self) -> Option<CachedToken> {
        let content = fs::read_to_string(self.token_path()).ok()?;
        let token: CachedToken = serde_json::from_str(&content).ok()?;
        if Utc::now().timestamp() < token.expires_at - TOKEN_SLACK_SECS {
            Some(token)
        } else {
            None
        }
    }

    pub fn store_token(&self, token: &CachedToken) -> Result<()> {
        fs::write(self.token_path(), serde_json::to_string_pretty(token)?)?;
        Ok(())
    }

    /// Load a cached search response when it is within its TTL
    pub fn load_search(&self, keyword: &str) -> Option<Value> {
        let content = fs::read_to_string(self.search_path(keyword)).ok()?;
        let cached: CachedSearch = serde_json::from_str(&content).ok()?;
        if Utc::now().timestamp() < cached.cached_at + SEARCH_TTL_SECS {
            Some(cached.response)
        } else {
            None
        }
    }

    pub fn store_search(&self, keyword: &str, response: &Value) -> Result<()> {
        let cached = CachedSearch {
            cached_at: Utc::now().timestamp(),
            response: response.clone(),
        };
        fs::write(
            self.search_path(keyword),
            serde_json::to_string_pretty(&cached)?,
        )?;
        Ok(())
    }

    /// Delete the token and all search entries
    pub fn clear(&self) -> Result<()> {
        let token = self.token_path();
        if token.exists() {
            fs::remove_file(token)?;
        }
        let search = self.root.join("search");
        if search.exists() {
            fs::remove_dir_all(&search)?;
        }
        fs::create_dir_all(search)?;
        Ok(())
    }

    pub fn stats(&self) -> CacheStats {
        let search_entries = fs::read_dir(self.root.join("search"))
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter(|e| e.path().extension().is_some_and(|ext| ext == "json"))
                    .count()
            })
            .unwrap_or(0);

        CacheStats {
            has_token: self.token_path().exists(),
            search_entries,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

/// Collapse filename-hostile characters in an identifier to underscores
pub fn normalize_filename(keyword: &str) -> String {
    static INVALID: OnceLock<Regex> = OnceLock::new();
    static RUNS: OnceLock<Regex> = OnceLock::new();

    let invalid = INVALID.get_or_init(|| {
        Regex::new(r#"[/<>:"\\|?*,]"#).expect("invalid-char regex")
    });
    let runs = RUNS.get_or_init(|| Regex::new(r"_+").expect("underscore-run regex"));

    let name = invalid.replace_all(keyword, "_");
    let name = runs.replace_all(&name, "_");
    name.trim_matches('_').to_string()
}

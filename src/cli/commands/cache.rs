//! `bomcost cache` - on-disk cache maintenance

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::catalog::DiskCache;
use crate::cli::args::CacheCommands;
use crate::config;

pub fn run(cmd: CacheCommands) -> Result<()> {
    let cache = DiskCache::open(config::cache_dir().into_diagnostic()?).into_diagnostic()?;

    match cmd {
        CacheCommands::Clear => {
            cache.clear().into_diagnostic()?;
            println!("Cache cleared: {}", style(cache.root().display()).cyan());
        }
        CacheCommands::Status => {
            let stats = cache.stats();
            println!("Cache: {}", style(cache.root().display()).cyan());
            println!(
                "Token: {}",
                if stats.has_token { "cached" } else { "none" }
            );
            println!("Search entries: {}", stats.search_entries);
        }
    }

    Ok(())
}

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
pub struct CacheArgs {
    /// Where the last prediction is kept.
    #[clap(long = "cache-path", env = "ECOSYNC_CACHE_PATH", default_value = "ecosync-cache.toml")]
    pub path: PathBuf,
}

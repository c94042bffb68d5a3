pub mod config;
pub mod recommend;
pub mod stats;
pub mod titles;

pub use recommend::run_recommend;
pub use stats::show_stats;
pub use titles::list_titles;

use anyhow::{Context, Result};
use marquee_core::{load_catalog, Catalog, Config};
use marquee_search::{IndexOptions, Recommender};

/// Load the configured catalog.
pub fn open_catalog(config: &Config) -> Result<Catalog> {
    load_catalog(&config.catalog_path, &config.columns()).with_context(|| {
        format!(
            "Failed to load catalog from {}",
            config.catalog_path.display()
        )
    })
}

/// Load the configured catalog and build its similarity index.
pub fn open_recommender(config: &Config) -> Result<Recommender> {
    let catalog = open_catalog(config)?;
    let options = IndexOptions::default()
        .with_max_features(config.max_features)
        .with_stop_words(config.stop_words);
    Ok(Recommender::build(catalog, &options))
}

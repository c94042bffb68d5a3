use anyhow::Result;
use marquee_core::Config;

use super::open_catalog;

pub fn list_titles(config: &Config, filter: Option<&str>) -> Result<()> {
    let catalog = open_catalog(config)?;

    let titles = match filter {
        Some(query) => catalog.search_titles(query),
        None => catalog.sorted_titles(),
    };

    for title in titles {
        println!("{title}");
    }

    Ok(())
}

use anyhow::Result;
use marquee_core::Config;

use super::open_recommender;

pub fn show_stats(config: &Config) -> Result<()> {
    let recommender = open_recommender(config)?;

    println!("\nMarquee Index\n");
    println!("  Catalog: {}", config.catalog_path.display());
    println!("  Entries: {}", recommender.len());
    println!(
        "  Vocabulary: {} terms (max {})",
        recommender.vocabulary_size(),
        config.max_features
    );
    println!(
        "  Stop words: {}",
        if config.stop_words { "english" } else { "none" }
    );

    if recommender.is_empty() {
        println!(
            "\n  No usable rows. Check that the catalog has '{}' and '{}' columns.",
            config.title_column, config.tags_column
        );
    }

    Ok(())
}

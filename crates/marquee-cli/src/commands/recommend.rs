use anyhow::{Context, Result};
use marquee_core::Config;

use super::open_recommender;

pub fn run_recommend(
    config: &Config,
    title: &str,
    top_n: usize,
    scores: bool,
    json: bool,
) -> Result<()> {
    let recommender = open_recommender(config)?;

    if !recommender.contains(title) {
        eprintln!("No catalog entry titled {title:?}.");
        eprintln!("Run `marquee titles <filter>` to search for the exact title.");
        return Ok(());
    }

    let recommendations = recommender.recommend_scored(title, top_n);
    log::debug!(
        "{} recommendations for {:?}",
        recommendations.len(),
        title
    );

    if json {
        let out = serde_json::to_string_pretty(&recommendations)
            .context("Failed to serialize recommendations")?;
        println!("{out}");
        return Ok(());
    }

    for (rank, rec) in recommendations.iter().enumerate() {
        if scores {
            println!("{:>2}. {} ({:.3})", rank + 1, rec.title, rec.score);
        } else {
            println!("{:>2}. {}", rank + 1, rec.title);
        }
    }

    Ok(())
}

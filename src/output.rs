use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;

use crate::rating::Ranking;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Table,
    Json,
}

/// Renders a ranking without terminal styling.
pub fn render_ranking(ranking: &Ranking, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Sorted indices: {:?}\nSorted ratings: {:?}",
            ranking.indices, ranking.ratings
        )),
        OutputFormat::Table => Ok(render_table(ranking)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(ranking).context("Failed to serialize ranking")
        }
    }
}

fn render_table(ranking: &Ranking) -> String {
    let mut lines = vec![format!("{:>4}  {:>5}  {:>12}", "rank", "item", "rating")];
    lines.extend(
        ranking
            .items()
            .enumerate()
            .map(|(pos, item)| format!("{:>4}  {:>5}  {:>12.4}", pos + 1, item.index, item.rating)),
    );
    lines.join("\n")
}

pub fn print_ranking(ranking: &Ranking, format: OutputFormat) -> Result<()> {
    let rendered = render_ranking(ranking, format)?;
    println!("{}", rendered);
    Ok(())
}

pub fn print_value(label: &str, value: f64) {
    println!("{} {}", format!("{}:", label).bold(), value);
}

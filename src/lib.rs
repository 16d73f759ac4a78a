pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod rating;
pub mod services;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::output::OutputFormat;
use crate::rating::UpdateOrder;
use crate::services::ranking::RankingService;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_demo(format: OutputFormat) -> Result<()> {
    let service = RankingService::new(AppConfig::new());
    service.run_demo(format)
}

pub fn handle_process(
    input: &Path,
    initial_rating: Option<f64>,
    k_factor: Option<f64>,
    order: Option<UpdateOrder>,
    format: OutputFormat,
) -> Result<()> {
    let mut config = AppConfig::new();
    config.rating = config
        .rating
        .with_initial_rating(initial_rating)
        .with_k_factor(k_factor)
        .with_order(order);

    let service = RankingService::new(config);
    service.run_file(input, format)
}

pub fn handle_probability(rating1: f64, rating2: f64, k: Option<f64>) -> Result<()> {
    let k = k.unwrap_or(AppConfig::new().rating.probability_divisor);
    let p = rating::probability(rating1, rating2, k)?;
    output::print_value("Win probability", p);
    Ok(())
}

pub fn handle_update(rating: f64, opponent: f64, result: f64, k: Option<f64>) -> Result<()> {
    let k = k.unwrap_or(AppConfig::new().rating.k_factor);
    let updated = rating::update(rating, opponent, result, k)?;
    output::print_value("Updated rating", updated);
    Ok(())
}

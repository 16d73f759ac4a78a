use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use crate::rating::UpdateOrder;

#[derive(Parser, Debug)]
#[command(author, version, about = "Elo rankings from pairwise comparison matrices")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Rank the built-in 4x4 example matrix with default settings
    Demo {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Rank a comparison matrix read as JSON rows (null = no comparison)
    Process {
        /// Input file, or "-" for stdin
        #[arg(short, long, default_value = "-")]
        input: PathBuf,
        /// Starting rating for every item (defaults to 1500)
        #[arg(long, allow_negative_numbers = true)]
        initial_rating: Option<f64>,
        /// K-factor, also used as the probability divisor (defaults to 32)
        #[arg(short, long)]
        k_factor: Option<f64>,
        /// Which rating of the first item the second update reads
        #[arg(long, value_enum)]
        order: Option<UpdateOrder>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Probability that the first rating beats the second
    Probability {
        #[arg(allow_negative_numbers = true)]
        rating1: f64,
        #[arg(allow_negative_numbers = true)]
        rating2: f64,
        /// Scaling divisor (defaults to 10)
        #[arg(short, long, allow_negative_numbers = true)]
        k: Option<f64>,
    },
    /// Rating after a single game result (1 win, 0.5 draw, 0 loss)
    Update {
        #[arg(allow_negative_numbers = true)]
        rating: f64,
        #[arg(allow_negative_numbers = true)]
        opponent: f64,
        #[arg(allow_negative_numbers = true)]
        result: f64,
        /// K-factor (defaults to 32)
        #[arg(short, long, allow_negative_numbers = true)]
        k: Option<f64>,
    },
}

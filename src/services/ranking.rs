use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::config::settings::AppConfig;
use crate::errors::{RatingError, parse_context, read_context};
use crate::output::{self, OutputFormat};
use crate::rating::{ComparisonMatrix, Ranking};

const STDIN_MARKER: &str = "-";

/// The fixed example matrix shown by the `demo` command.
pub fn demo_matrix() -> Result<ComparisonMatrix, RatingError> {
    ComparisonMatrix::from_rows(&[
        vec![None, Some(1.0), Some(0.0), None],
        vec![Some(0.0), None, Some(1.0), Some(1.0)],
        vec![Some(1.0), Some(0.0), None, Some(0.0)],
        vec![None, Some(0.0), Some(1.0), None],
    ])
}

pub struct RankingService {
    config: AppConfig,
}

impl RankingService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn rank(&self, matrix: &ComparisonMatrix) -> Result<Ranking> {
        let ranking = self
            .config
            .rating
            .process(matrix)
            .context("Failed to rank comparison matrix")?;
        info!("Ranked {} items", ranking.len());
        Ok(ranking)
    }

    pub fn run_demo(&self, format: OutputFormat) -> Result<()> {
        let ranking = self.rank(&demo_matrix()?)?;
        output::print_ranking(&ranking, format)
    }

    pub fn run_file(&self, input: &Path, format: OutputFormat) -> Result<()> {
        let matrix = load_matrix(input)?;
        info!("Loaded {0}x{0} comparison matrix from {1}", matrix.size(), input.display());
        let ranking = self.rank(&matrix)?;
        output::print_ranking(&ranking, format)
    }
}

pub fn load_matrix(input: &Path) -> Result<ComparisonMatrix> {
    let source = input.display().to_string();
    let json = if source == STDIN_MARKER {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context(read_context("stdin"))?;
        buffer
    } else {
        std::fs::read_to_string(input).context(read_context(&source))?
    };
    parse_matrix(&json)
}

pub fn parse_matrix(json: &str) -> Result<ComparisonMatrix> {
    serde_json::from_str(json).context(parse_context("comparison matrix"))
}

use anyhow::Result;
use colored::Colorize;

use elo_ranking::cli::Command;
use elo_ranking::{handle_demo, handle_probability, handle_process, handle_update, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("{} {e:#}", "Error:".red().bold());
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Demo { format } => handle_demo(*format),
        Command::Process {
            input,
            initial_rating,
            k_factor,
            order,
            format,
        } => handle_process(input, *initial_rating, *k_factor, *order, *format),
        Command::Probability { rating1, rating2, k } => handle_probability(*rating1, *rating2, *k),
        Command::Update {
            rating,
            opponent,
            result,
            k,
        } => handle_update(*rating, *opponent, *result, *k),
    }
}

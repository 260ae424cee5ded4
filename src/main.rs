mod config;
mod output;
mod passes;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::Config;
use crate::passes::{extract_passes, PassError};

#[derive(Parser)]
#[command(name = "pass-o-mat")]
#[command(about = "Visible satellite passes from Heavens-Above, grouped by date")]
struct Cli {
    /// YAML file overriding satellite, observer and request settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write today's (UTC) passes as a JSON array
    Today {
        #[arg(long, default_value = output::TODAY_FILE)]
        output: PathBuf,
    },
    /// Write every listed date as a JSON object keyed by date
    All {
        #[arg(long, default_value = output::ALL_FILE)]
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => Config::default(),
    };

    let result = match cli.command {
        None => today(&config, Path::new(output::TODAY_FILE)),
        Some(Commands::Today { output }) => today(&config, &output),
        Some(Commands::All { output }) => all(&config, &output),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn today(config: &Config, path: &Path) -> Result<(), PassError> {
    let grouped = extract_passes(config)?;
    let date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    let count = output::write_day(&grouped, &date, path)?;
    println!("{}", output::day_summary(path, count));
    Ok(())
}

fn all(config: &Config, path: &Path) -> Result<(), PassError> {
    let grouped = extract_passes(config)?;
    output::write_json(path, &grouped)?;
    println!("{}", output::all_summary(path, &grouped));
    Ok(())
}

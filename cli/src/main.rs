mod report;
mod tui;

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use clap::Parser;
use energy_dash_core::{
    expand_key, normalize_year, AppConfig, CommitOutcome, ConfigOverrides, KeyError,
    PredictionTable, RegionImages, NOT_FOUND_MESSAGE,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "energy_dash=info,energy_dash_core=info";

#[derive(Parser)]
#[command(name = "energy-dash")]
#[command(about = "Browse pre-computed regional energy consumption predictions", long_about = None)]
struct Cli {
    /// Prediction CSV (Region, Year, Month, AveragePrediction)
    #[arg(long, global = true, env = "ENERGY_DASH_DATA")]
    data: Option<PathBuf>,

    /// Directory holding default_map.png and regions/<key>.<ext> illustrations
    #[arg(long, global = true, env = "ENERGY_DASH_ASSETS")]
    assets: Option<PathBuf>,

    /// Log destination while the dashboard owns the terminal
    #[arg(long, global = true, env = "ENERGY_DASH_LOG")]
    log_file: Option<PathBuf>,

    /// Link shown on the presentation page
    #[arg(long, global = true, env = "ENERGY_DASH_PRESENTATION_URL")]
    presentation_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive dashboard
    Tui,
    /// List regions
    Regions,
    /// List years available for a region
    Years { region: String },
    /// List months available for a region and year
    Months { region: String, year: String },
    /// Show the prediction for a region, year and month (e.g. predict bret 2022 5)
    Predict {
        region: String,
        year: String,
        month: String,
        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the loaded prediction rows
    Table {
        /// Only rows for this region
        #[arg(long)]
        region: Option<String>,
    },
    /// Show the project authors
    Authors,
    /// Show the project introduction and presentation link
    About,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = AppConfig::resolve(ConfigOverrides {
        data_path: cli.data,
        assets_dir: cli.assets,
        log_path: cli.log_file,
        presentation_url: cli.presentation_url,
    });

    let command = cli.command.unwrap_or(Commands::Tui);
    match &command {
        Commands::Tui => init_file_logging(&config)?,
        _ => init_stderr_logging(),
    }
    info!(data = %config.data_path.display(), "energy-dash starting");

    match command {
        Commands::Authors => report::print_authors(),
        Commands::About => report::print_about(config.presentation_url.as_deref()),
        command => run_with_table(command, &config)?,
    }

    Ok(())
}

fn run_with_table(command: Commands, config: &AppConfig) -> Result<()> {
    let table = PredictionTable::from_path(&config.data_path)
        .with_context(|| format!("Failed to load {}", config.data_path.display()))?;

    match command {
        Commands::Tui => {
            let images = RegionImages::new(&config.assets_dir);
            tui::run(Arc::new(table), images, config.presentation_url.clone())?;
        }
        Commands::Regions => {
            report::print_list("Regions", &table.regions());
        }
        Commands::Years { region } => {
            let region = resolve_region(&table, &region)?;
            report::print_list(&format!("Years for {}", region), &table.years_for(region));
        }
        Commands::Months { region, year } => {
            let region = resolve_region(&table, &region)?;
            let year = year_key(&year);
            report::print_list(
                &format!("Months for {} in {}", region, year),
                &table.months_for(region, &year),
            );
        }
        Commands::Predict { region, year, month, json } => {
            let region = region_or_raw(&table, &region)?;
            let outcome = table.lookup(region, &year, &month)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                match &outcome {
                    CommitOutcome::Found(result) => report::print_prediction(result),
                    CommitOutcome::NotFound { .. } => println!("{}", NOT_FOUND_MESSAGE),
                }
            }
        }
        Commands::Table { region } => {
            let region = match region {
                Some(r) => Some(resolve_region(&table, &r)?.to_string()),
                None => None,
            };
            report::print_table(&table, region.as_deref());
        }
        Commands::Authors | Commands::About => {}
    }

    Ok(())
}

fn resolve_region<'a>(table: &'a PredictionTable, input: &str) -> Result<&'a str> {
    let regions = table.regions();
    Ok(expand_key(input, &regions)?)
}

/// Like `resolve_region`, but an unknown region passes through as typed so it
/// is reported as "no data". Ambiguous prefixes are still an error.
fn region_or_raw<'a>(table: &'a PredictionTable, input: &'a str) -> Result<&'a str> {
    match expand_key(input, &table.regions()) {
        Ok(region) => Ok(region),
        Err(KeyError::Unknown(_)) => Ok(input.trim()),
        Err(err) => Err(err.into()),
    }
}

fn year_key(input: &str) -> String {
    normalize_year(input).unwrap_or_else(|_| input.trim().to_string())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into())
}

fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

// The dashboard owns the terminal, so logs go to a file instead.
fn init_file_logging(config: &AppConfig) -> Result<()> {
    if let Some(parent) = config.log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
        .with_context(|| format!("Failed to open log file {}", config.log_path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use energy_dash_core::PredictionRecord;

    fn table() -> PredictionTable {
        PredictionTable::from_records(vec![
            PredictionRecord::new("Bretagne", "2022", "5", 2500.0),
            PredictionRecord::new("Bourgogne", "2022", "6", 3100.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_region_or_raw() {
        let table = table();
        assert_eq!(region_or_raw(&table, "bret").unwrap(), "Bretagne");
        assert_eq!(region_or_raw(&table, " Corse ").unwrap(), "Corse");

        let err = region_or_raw(&table, "b").unwrap_err();
        assert!(matches!(err.downcast_ref::<KeyError>(), Some(KeyError::Ambiguous { .. })));
    }

    #[test]
    fn test_year_key_matches_table_keys() {
        let table = table();
        assert_eq!(table.months_for("Bretagne", &year_key("02022")), vec!["5"]);
        assert_eq!(table.months_for("Bretagne", &year_key(" 2022.0 ")), vec!["5"]);
        assert_eq!(year_key("later"), "later");
    }
}

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use dashboard_core::{
    Config, Dashboard, KeySource, Mode, OpenWeatherClient, SearchOutcome,
};
use inquire::InquireError;

use crate::view::ConsoleView;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "City weather dashboard")]
pub struct Cli {
    /// Verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up one city and exit.
    Show {
        /// City name, e.g. "Paris".
        city: String,
    },

    /// Check the API key configuration and exit.
    Check,
}

/// Map `-v` counts to a tracing filter.
pub fn log_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let config = Config::load()?;
        tracing::debug!(mode = ?config.mode(), source = ?config.key_source, "configuration loaded");

        match self.command {
            Some(Command::Show { city }) => show_once(&config, &city).await,
            Some(Command::Check) => check(&config).await.map(|()| ExitCode::SUCCESS),
            None => interactive(&config).await.map(|()| ExitCode::SUCCESS),
        }
    }
}

fn build_dashboard(config: &Config) -> Dashboard<OpenWeatherClient, ConsoleView> {
    let client = OpenWeatherClient::new(config.clone());
    let view = ConsoleView::new(config.units);
    Dashboard::new(client, view, config)
}

fn demo_banner(mode: Mode) {
    if mode == Mode::Demo {
        println!("Demo mode: no API key configured, showing sample data.");
        println!("Run `weather-dashboard check` for setup instructions.");
        println!();
    }
}

/// Exit status for a one-shot search: nonzero only when the search failed.
fn exit_status(outcome: &SearchOutcome) -> u8 {
    match outcome {
        SearchOutcome::Rendered | SearchOutcome::Suppressed => 0,
        SearchOutcome::Failed(_) => 1,
    }
}

async fn show_once(config: &Config, city: &str) -> anyhow::Result<ExitCode> {
    let mut dashboard = build_dashboard(config);
    demo_banner(dashboard.mode());

    // The view surfaces any failure message; only the status is left.
    let outcome = dashboard.submit(city).await?;
    Ok(ExitCode::from(exit_status(&outcome)))
}

async fn interactive(config: &Config) -> anyhow::Result<()> {
    println!("Weather Dashboard");

    let mut dashboard = build_dashboard(config);
    demo_banner(dashboard.mode());
    dashboard.start().await?;

    loop {
        match inquire::Text::new("City:")
            .with_help_message("Enter a city name; ESC to quit")
            .prompt()
        {
            Ok(input) => {
                dashboard.submit(&input).await?;
            }
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

/// Diagnostic helper: reports where the key came from and, in live mode,
/// issues a single test request. Logging only, no contractual behavior.
async fn check(config: &Config) -> anyhow::Result<()> {
    println!("Weather dashboard configuration check");
    println!("-------------------------------------");

    match config.key_source {
        KeySource::Environment => println!("API key: found in the environment"),
        KeySource::File => println!(
            "API key: found in {}",
            Config::config_file_path()?.display()
        ),
        KeySource::Placeholder => println!("API key: not configured"),
    }
    println!("Base URL: {}", config.base_url);
    println!("Units: {}   Language: {}", config.units.as_str(), config.lang);

    match config.mode() {
        Mode::Demo => {
            println!("Mode: demo (sample data, no live calls)");
            println!();
            println!("To enable live data, get a key from https://openweathermap.org/api");
            println!(
                "and set OPENWEATHER_API_KEY, or put `api_key = \"...\"` in {}",
                Config::config_file_path()?.display()
            );
        }
        Mode::Live => {
            println!("Mode: live");
            println!("Testing the API key with a request for London...");

            let client = OpenWeatherClient::new(config.clone());
            match client.fetch_current("London").await {
                Ok(payload) => {
                    println!(
                        "API key works: {} reports {}{}",
                        payload.name,
                        payload.main.temp,
                        config.units.temperature_suffix()
                    );
                }
                Err(err) => {
                    println!("API key test failed: {err}");
                }
            }
        }
    }

    Ok(())
}

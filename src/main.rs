use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use hourcast::{
    display, logging, storage, ForecastError, ForecastRenderer, ForecastRequest, HourcastConfig,
    WeatherApiClient,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "hourcast", author, version, about = "Localized hourly weather forecast for the terminal")]
struct Cli {
    /// City to get the forecast for (e.g. "Tokyo")
    #[arg(short, long)]
    city: Option<String>,
    /// Language code for labels and conditions (e.g. "fr")
    #[arg(short, long)]
    lang: Option<String>,
    /// Number of forecast days (1-14)
    #[arg(short, long)]
    days: Option<u32>,
    /// Render a previously saved payload instead of fetching
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Where to save the raw payload
    #[arg(long)]
    save: Option<PathBuf>,
    /// Do not save the raw payload
    #[arg(long)]
    no_save: bool,
    /// Disable colored output
    #[arg(long)]
    no_color: bool,
    /// Path to a config file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<ForecastError>() {
                Some(forecast_err) => {
                    debug!(stage = forecast_err.stage(), "{}", forecast_err);
                    eprintln!("Error: {}", forecast_err.user_message());
                }
                None => eprintln!("Error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = HourcastConfig::load_from_path(cli.config.clone())?;
    if let Some(days) = cli.days {
        config.weather.days = days;
        config.validate()?;
    }

    logging::init(&config.logging, cli.verbose)?;

    let request = ForecastRequest::new(
        cli.city.unwrap_or_else(|| config.defaults.location.clone()),
        cli.lang.unwrap_or_else(|| config.defaults.language.clone()),
    )?;
    debug!("Resolved request: {:?}", request);

    let body = match &cli.input {
        Some(path) => {
            debug!("Reading saved forecast from {}", path.display());
            storage::load_raw_payload(path)?
        }
        None => {
            let client = WeatherApiClient::new(config.weather.clone())?;
            let body = client.fetch_forecast(&request)?;
            if config.output.save_raw_payload && !cli.no_save {
                let path = cli
                    .save
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(&config.output.raw_payload_path));
                storage::save_raw_payload_or_warn(path, &body);
            }
            body
        }
    };

    let payload = storage::parse_payload(&body)?;
    let report = ForecastRenderer::new(&request).render(&payload, Utc::now())?;
    display::print_report(&report, config.output.color && !cli.no_color)?;

    Ok(())
}

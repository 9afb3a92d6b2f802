use anyhow::{Context, anyhow};
use clap::Parser;
use log::debug;
use std::path::PathBuf;
use weather_core::{Client, Config, Units, format_daily};

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "weathercli",
    version,
    about = "Current weather conditions from OpenWeatherMap",
    after_help = "The API key is read from the OPENWEATHER_API_KEY environment variable."
)]
pub struct Cli {
    /// Location, e.g. "london", "tampa,us" or "tampa,fl,us".
    pub location: String,

    /// Units to use; defaults to the config file setting, then imperial.
    #[arg(long, value_parser = parse_units)]
    pub units: Option<Units>,

    /// Print the daily forecast instead of current conditions.
    #[arg(long)]
    pub forecast: bool,

    /// Config file to use instead of the platform default.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

fn parse_units(value: &str) -> Result<Units, weather_core::Error> {
    value.parse()
}

impl Cli {
    pub async fn run(self, api_key: Option<String>) -> anyhow::Result<()> {
        for line in self.render(api_key).await? {
            println!("{line}");
        }

        Ok(())
    }

    /// Produce the lines to print. Nothing is fetched unless the API key is present.
    async fn render(&self, api_key: Option<String>) -> anyhow::Result<Vec<String>> {
        let api_key = api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| anyhow!("environment variable {API_KEY_VAR} must be set"))?;

        let config = self.load_config()?;
        let units = self.units.unwrap_or_else(|| config.units());
        debug!("location={} units={units} forecast={}", self.location, self.forecast);

        let client = Client::from_config(config.client_config(api_key)?)?;

        if !self.forecast {
            let summary = client.conditions(&self.location, units.as_str()).await?;
            return Ok(vec![summary]);
        }

        let (place, days) = client.daily_forecast(&self.location, units.as_str()).await?;
        let mut lines = vec![format!("{}, {}", place.name, place.country)];
        lines.extend(days.iter().map(|day| format_daily(day, units)));

        Ok(lines)
    }

    fn load_config(&self) -> anyhow::Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load().context("Failed to load weathercli configuration"),
        }
    }
}

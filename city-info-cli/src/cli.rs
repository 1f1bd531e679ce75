use std::path::{Path, PathBuf};

use anyhow::Context;
use city_info_core::{
    ClientSettings, Config, Credential, CredentialError, LocationClient, LocationSource,
    ReportError, report,
};
use clap::{Parser, Subcommand};
use inquire::{Password, Text};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "city-info",
    version,
    about = "Write a city's summary and current temperature to <city>.txt"
)]
pub struct Cli {
    /// OpenWeather API key; falls back to the key saved by `configure`.
    #[arg(long, env = "OPENWEATHER_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Save an OpenWeather API key to the config file.
    Configure,

    /// Look up a city and write the report (the default).
    Lookup {
        /// City name; prompted for when absent.
        city: Option<String>,

        /// Directory for the report file. Defaults to the working directory.
        #[arg(long)]
        output_dir: Option<PathBuf>,
    },
}

/// Load `KEY=value` pairs from `path` into the environment. Variables already set win.
pub fn load_env_file(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "loaded environment file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!("ignoring unreadable {}: {err}", path.display()),
    }
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Lookup { city, output_dir }) => {
                lookup(self.api_key, city, output_dir).await
            }
            None => lookup(self.api_key, None, None).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;
    let credential = Credential::new(key)?;

    config.set_api_key(&credential);
    let path = config.save()?;
    println!("API key saved to {}", path.display());

    Ok(())
}

async fn lookup(
    api_key: Option<String>,
    city: Option<String>,
    output_dir: Option<PathBuf>,
) -> anyhow::Result<()> {
    // An unreadable file only costs the fallback key and timeout override.
    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!("ignoring unreadable config: {err:#}");
        Config::default()
    });
    let out_dir = output_dir.as_deref().unwrap_or(Path::new(""));

    let read_city = || match city {
        Some(city) => Ok(city),
        None => Text::new("Enter the city name:")
            .prompt()
            .context("Failed to read city name"),
    };
    let build_client = |credential: Credential, config: &Config| {
        LocationClient::new(credential, &ClientSettings::from_config(config))
    };

    let message = lookup_message(
        &config,
        api_key.as_deref(),
        read_city,
        build_client,
        out_dir,
    )
    .await?;
    println!("{message}");

    Ok(())
}

/// Resolve the key, read the city, run the report and return the line to print.
///
/// A missing key short-circuits before the city is read or a client is built.
/// Only a failed file write is an `Err`; lookup failures are returned as their message.
async fn lookup_message<S, R, B>(
    config: &Config,
    api_key: Option<&str>,
    read_city: R,
    build_source: B,
    out_dir: &Path,
) -> anyhow::Result<String>
where
    S: LocationSource,
    R: FnOnce() -> anyhow::Result<String>,
    B: FnOnce(Credential, &Config) -> anyhow::Result<S>,
{
    let credential = match Credential::resolve(api_key, config) {
        Ok(credential) => credential,
        Err(err @ CredentialError::Missing) => return Ok(err.to_string()),
        Err(err) => return Err(err.into()),
    };

    let input = read_city()?;
    let source = build_source(credential, config)?;

    match report::run(&source, &input, out_dir).await {
        Ok(path) => Ok(format!("Data successfully written to {}", path.display())),
        Err(err @ ReportError::Write { .. }) => Err(err.into()),
        Err(err) => Ok(err.to_string()),
    }
}

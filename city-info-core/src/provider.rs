use crate::{
    config::{Config, Credential, DEFAULT_TIMEOUT},
    model::LookupResult,
    provider::{openweather::OpenWeatherProvider, wikipedia::WikipediaProvider},
};
use anyhow::{Context, anyhow};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::{fmt::Debug, time::Duration};

pub mod openweather;
pub mod wikipedia;

pub const SUMMARY_BASE_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";
pub const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
pub const USER_AGENT: &str = concat!("city-info/", env!("CARGO_PKG_VERSION"));

/// The two lookups the report pipeline needs. Each call is one round trip.
#[async_trait]
pub trait LocationSource: Send + Sync + Debug {
    async fn fetch_summary(&self, name: &str) -> LookupResult<String>;

    async fn fetch_temperature(&self, name: &str) -> LookupResult<f64>;
}

/// Endpoints and transport knobs for [`LocationClient`].
#[derive(Debug, Clone)]
pub struct ClientSettings {
    /// Base of the summary endpoint; the city name is appended as a path segment.
    pub summary_base_url: String,
    pub weather_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            summary_base_url: SUMMARY_BASE_URL.to_string(),
            weather_url: WEATHER_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout: config.request_timeout(),
            ..Self::default()
        }
    }
}

/// Looks up city summaries on Wikipedia and temperatures on OpenWeather.
#[derive(Debug, Clone)]
pub struct LocationClient {
    summary: WikipediaProvider,
    weather: OpenWeatherProvider,
}

impl LocationClient {
    pub fn new(credential: Credential, settings: &ClientSettings) -> anyhow::Result<Self> {
        let http = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let summary_base = parse_url(&settings.summary_base_url)?;
        if summary_base.cannot_be_a_base() {
            return Err(anyhow!(
                "Summary endpoint '{}' cannot take a path segment",
                settings.summary_base_url
            ));
        }
        let weather_url = parse_url(&settings.weather_url)?;

        Ok(Self {
            summary: WikipediaProvider::new(http.clone(), summary_base),
            weather: OpenWeatherProvider::new(http, weather_url, credential),
        })
    }

    /// Convenience constructor with default endpoints; fails on an empty key.
    pub fn with_api_key(api_key: &str) -> anyhow::Result<Self> {
        let credential = Credential::new(api_key)?;
        Self::new(credential, &ClientSettings::default())
    }
}

#[async_trait]
impl LocationSource for LocationClient {
    async fn fetch_summary(&self, name: &str) -> LookupResult<String> {
        self.summary.fetch_summary(name).await
    }

    async fn fetch_temperature(&self, name: &str) -> LookupResult<f64> {
        self.weather.fetch_temperature(name).await
    }
}

fn parse_url(raw: &str) -> anyhow::Result<Url> {
    Url::parse(raw).with_context(|| format!("Invalid endpoint URL: {raw}"))
}

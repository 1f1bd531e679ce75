use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::{
    config::Credential,
    model::{LookupError, LookupResult, UNKNOWN_ERROR},
};

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    credential: Credential,
    http: Client,
    url: Url,
}

impl OpenWeatherProvider {
    pub fn new(http: Client, url: Url, credential: Credential) -> Self {
        Self {
            credential,
            http,
            url,
        }
    }

    /// Current temperature in degrees Celsius.
    pub async fn fetch_temperature(&self, name: &str) -> LookupResult<f64> {
        tracing::debug!(url = %self.url, city = name, "requesting current weather");

        let res = self
            .http
            .get(self.url.clone())
            .query(&[
                ("q", name),
                ("appid", self.credential.expose()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| LookupError::WeatherFetch(e.without_url().to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| LookupError::WeatherFetch(e.without_url().to_string()))?;
        tracing::debug!(%status, "weather response received");

        classify_temperature(status, &body, name)
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwSys {
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    main: Option<OwMain>,
    sys: Option<OwSys>,
    message: Option<String>,
}

/// Map a current-weather response to a lookup outcome. `name` is echoed verbatim
/// in the not-found message.
pub fn classify_temperature(status: StatusCode, body: &str, name: &str) -> LookupResult<f64> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(LookupError::InvalidApiKey);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(LookupError::NotRecognized(name.to_string()));
    }

    let parsed: OwCurrentResponse =
        serde_json::from_str(body).map_err(|e| LookupError::WeatherFetch(e.to_string()))?;

    if status != StatusCode::OK {
        return Err(LookupError::WeatherUpstream(
            parsed.message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        ));
    }

    let has_country = parsed
        .sys
        .and_then(|sys| sys.country)
        .is_some_and(|country| !country.is_empty());
    if !has_country {
        return Err(LookupError::NoTemperature);
    }

    parsed
        .main
        .map(|main| main.temp)
        .ok_or_else(|| LookupError::WeatherFetch("response is missing `main.temp`".to_string()))
}

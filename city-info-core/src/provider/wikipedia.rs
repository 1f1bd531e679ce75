use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use crate::model::{LookupError, LookupResult, UNKNOWN_ERROR};

#[derive(Debug, Clone)]
pub struct WikipediaProvider {
    http: Client,
    base_url: Url,
}

impl WikipediaProvider {
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// `name` is used as-is; the service treats underscores as spaces.
    pub async fn fetch_summary(&self, name: &str) -> LookupResult<String> {
        let url = self.summary_url(name)?;
        tracing::debug!(%url, "requesting city summary");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::SummaryFetch(e.to_string()))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| LookupError::SummaryFetch(e.to_string()))?;
        tracing::debug!(%status, "summary response received");

        classify_summary(status, &body)
    }

    fn summary_url(&self, name: &str) -> LookupResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| LookupError::SummaryFetch(format!("cannot extend URL {}", self.base_url)))?
            .pop_if_empty()
            .push(name);
        Ok(url)
    }
}

#[derive(Debug, Deserialize)]
struct WpSummary {
    extract: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    detail: Option<String>,
}

const DISAMBIGUATION: &str = "disambiguation";

/// Map a summary endpoint response to a lookup outcome.
pub fn classify_summary(status: StatusCode, body: &str) -> LookupResult<String> {
    if status == StatusCode::NOT_FOUND {
        return Err(LookupError::CityNotFound);
    }

    let parsed: WpSummary =
        serde_json::from_str(body).map_err(|e| LookupError::SummaryFetch(e.to_string()))?;

    match parsed {
        WpSummary {
            extract: Some(_),
            kind: Some(kind),
            ..
        } if status == StatusCode::OK && kind == DISAMBIGUATION => Err(LookupError::Ambiguous),
        WpSummary {
            extract: Some(extract),
            ..
        } if status == StatusCode::OK => Ok(extract),
        WpSummary { detail, .. } => Err(LookupError::SummaryUpstream(
            detail.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        )),
    }
}

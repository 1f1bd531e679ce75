use thiserror::Error;

/// Outcome of a single remote lookup.
pub type LookupResult<T> = Result<T, LookupError>;

/// Classified lookup failure. The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("City name is ambiguous. Please specify more clearly.")]
    Ambiguous,

    #[error("City not found. Please try again.")]
    CityNotFound,

    /// Any other summary endpoint status; carries the remote `detail` text.
    #[error("Unexpected error: {0}")]
    SummaryUpstream(String),

    #[error("Error fetching city summary: {0}")]
    SummaryFetch(String),

    #[error("No temperature found.")]
    NoTemperature,

    #[error("Invalid API key.")]
    InvalidApiKey,

    #[error("{0} is not recognized as a city.")]
    NotRecognized(String),

    /// Any other weather endpoint status; carries the remote `message` text.
    #[error("Error: {0}")]
    WeatherUpstream(String),

    #[error("Error fetching temperature data: {0}")]
    WeatherFetch(String),
}

/// Fallback text when the remote service gives no explanation.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Everything gathered about a city during one run.
#[derive(Debug, Clone, PartialEq)]
pub struct CityRecord {
    pub summary: String,
    pub temperature_c: f64,
}

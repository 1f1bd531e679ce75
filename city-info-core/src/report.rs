//! The lookup-then-write pipeline behind one CLI invocation.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{
    model::{CityRecord, LookupError},
    normalize::normalize,
    provider::LocationSource,
};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("Failed to retrieve complete city data.")]
    Incomplete,

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The user's city input in the forms the pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery {
    /// Lowercased name sent to both services and used for the file name.
    pub lookup_name: String,
    /// First letter uppercased, the rest lowercased.
    pub display_name: String,
}

impl CityQuery {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        Self {
            lookup_name: trimmed.to_lowercase(),
            display_name: capitalize(trimmed),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.txt", self.lookup_name)
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}

/// Final file contents: the summary, a blank line, then the temperature sentence.
pub fn compose_report(summary: &str, display_name: &str, temperature_c: f64) -> String {
    format!(
        "{summary}\n\nCurrent temperature in {display_name} is {temperature_c:.2} degrees Celsius."
    )
}

/// Run both lookups and write `<lookup_name>.txt` under `out_dir`.
///
/// Temperature is fetched first and gates the summary lookup. Nothing is written
/// unless both succeed. An empty `out_dir` means the working directory.
pub async fn run<S>(source: &S, input: &str, out_dir: &Path) -> Result<PathBuf, ReportError>
where
    S: LocationSource + ?Sized,
{
    let query = CityQuery::parse(input);

    let temperature_c = source.fetch_temperature(&query.lookup_name).await?;
    let summary = source.fetch_summary(&query.lookup_name).await?;
    let record = CityRecord {
        summary,
        temperature_c,
    };

    let styled = normalize(&record.summary);
    if styled.is_empty() || !record.temperature_c.is_finite() {
        return Err(ReportError::Incomplete);
    }

    let path = out_dir.join(query.file_name());
    let text = compose_report(&styled, &query.display_name, record.temperature_c);
    fs::write(&path, text).map_err(|source| ReportError::Write {
        path: path.clone(),
        source,
    })?;
    tracing::info!(path = %path.display(), "city report written");

    Ok(path)
}

//! Core library for the `city-info` CLI.
//!
//! This crate defines:
//! - Configuration & credential handling
//! - The Wikipedia summary and OpenWeather temperature lookups
//! - Summary text normalization
//! - The report pipeline that ties them together
//!
//! It is used by `city-info-cli`, but the pipeline only depends on the
//! [`LocationSource`] trait so other front-ends can drive it too.

pub mod config;
pub mod model;
pub mod normalize;
pub mod provider;
pub mod report;

pub use config::{Config, Credential, CredentialError};
pub use model::{CityRecord, LookupError, LookupResult};
pub use normalize::normalize;
pub use provider::{ClientSettings, LocationClient, LocationSource};
pub use report::{CityQuery, ReportError};

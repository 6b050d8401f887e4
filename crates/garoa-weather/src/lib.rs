//! `garoa-weather`: the condition gateway.
//!
//! Fetches current conditions and the short-range forecast for a free-text
//! place name from the HG Brasil weather API. Anything short of a complete,
//! well-formed payload is surfaced as a [`FetchError`]; a partial response
//! is never folded into "0% chance of rain".

pub mod client;
pub mod error;
pub mod types;

pub use client::HgWeather;
pub use error::FetchError;
pub use types::{DayForecast, WeatherReport};

/// Boundary to the external weather service.
///
/// Implemented by [`HgWeather`] in production and by scripted fakes in the
/// dispatch tests.
#[async_trait::async_trait]
pub trait ConditionGateway: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<WeatherReport, FetchError>;
}

//! reqwest client for the HG Brasil weather API.

use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use garoa_core::config::WeatherConfig;

use crate::error::FetchError;
use crate::types::WeatherReport;
use crate::ConditionGateway;

/// The interesting part of the API response lives under `results`; the
/// field is absent when the city is unknown.
#[derive(Debug, Deserialize)]
struct Envelope {
    results: Option<WeatherReport>,
}

/// Production [`ConditionGateway`] backed by api.hgbrasil.com.
///
/// One request per fetch, bounded by the configured timeout so a stuck
/// upstream can never pin a firing indefinitely. Retries are left to the
/// next scheduled firing.
pub struct HgWeather {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HgWeather {
    pub fn new(config: &WeatherConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait::async_trait]
impl ConditionGateway for HgWeather {
    async fn fetch(&self, location: &str) -> Result<WeatherReport, FetchError> {
        debug!(location, "fetching weather report");
        let body = self
            .http
            .get(&self.base_url)
            .query(&[("key", self.api_key.as_str()), ("city_name", location)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        parse_report(&body)
    }
}

/// Decode a raw response body into a usable report.
fn parse_report(body: &str) -> Result<WeatherReport, FetchError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    let report = envelope.results.ok_or(FetchError::CityNotFound)?;
    if report.forecast.is_empty() {
        return Err(FetchError::Malformed("empty forecast list".to_string()));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "by": "city_name",
        "valid_key": true,
        "results": {
            "temp": 22,
            "date": "30/08/2026",
            "description": "Parcialmente nublado",
            "city_name": "Campinas",
            "humidity": 81,
            "forecast": [
                {"date": "30/08", "weekday": "Sáb", "max": 26, "min": 15,
                 "description": "Chuvas esparsas", "rain_probability": 84},
                {"date": "31/08", "weekday": "Dom", "max": 24, "min": 14,
                 "description": "Tempo limpo"}
            ]
        }
    }"#;

    #[test]
    fn parses_full_payload() {
        let report = parse_report(SAMPLE).unwrap();
        assert_eq!(report.city_name, "Campinas");
        assert_eq!(report.temp, 22);
        assert_eq!(report.humidity, 81);
        assert_eq!(report.rain_probability(), Some(84));
    }

    #[test]
    fn omitted_rain_probability_defaults_to_zero_per_day() {
        let report = parse_report(SAMPLE).unwrap();
        // second day has no rain_probability field
        assert_eq!(report.forecast[1].rain_probability, 0);
    }

    #[test]
    fn missing_results_is_city_not_found() {
        let body = r#"{"by": "city_name", "valid_key": true}"#;
        assert!(matches!(parse_report(body), Err(FetchError::CityNotFound)));
    }

    #[test]
    fn missing_required_field_is_malformed() {
        // no `temp`
        let body = r#"{"results": {"city_name": "X", "description": "d",
                        "humidity": 50, "forecast": []}}"#;
        assert!(matches!(parse_report(body), Err(FetchError::Malformed(_))));
    }

    #[test]
    fn empty_forecast_is_malformed_not_dry() {
        let body = r#"{"results": {"city_name": "X", "temp": 20,
                        "description": "d", "humidity": 50, "forecast": []}}"#;
        assert!(matches!(parse_report(body), Err(FetchError::Malformed(_))));
    }
}

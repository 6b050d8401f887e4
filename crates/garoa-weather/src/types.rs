use serde::{Deserialize, Serialize};

/// Current conditions plus the short-range forecast, as returned inside the
/// HG Brasil `results` object. Fields we render are required; a payload
/// missing any of them fails deserialisation and becomes a fetch error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city_name: String,
    /// Current temperature, °C.
    pub temp: i32,
    /// Short human-readable description of the current condition.
    pub description: String,
    /// Relative humidity, percent.
    pub humidity: u8,
    pub forecast: Vec<DayForecast>,
}

/// One day of forecast; the first entry is "today".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayForecast {
    pub date: String,
    pub weekday: String,
    /// Max temperature, °C.
    pub max: i32,
    /// Min temperature, °C.
    pub min: i32,
    pub description: String,
    /// Precipitation probability 0–100. The API omits it on dry days.
    #[serde(default)]
    pub rain_probability: u8,
}

impl WeatherReport {
    /// Today's forecast entry, if the API sent one.
    pub fn today(&self) -> Option<&DayForecast> {
        self.forecast.first()
    }

    /// Today's precipitation probability. `None` when the forecast list is
    /// empty; callers must treat that as a failed fetch, not as 0%.
    pub fn rain_probability(&self) -> Option<u8> {
        self.today().map(|day| day.rain_probability)
    }
}

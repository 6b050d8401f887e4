use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Top-level config (garoa.toml + GAROA_* env overrides).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GaroaConfig {
    pub telegram: TelegramConfig,
    pub weather: WeatherConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub schedule: ScheduleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramConfig {
    pub bot_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// HG Brasil API key, sent as the `key` query parameter.
    pub api_key: String,
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    /// Hard cap on one forecast fetch, seconds.
    #[serde(default = "default_fetch_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_db_path")]
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// A wall-clock time of day in the configured civil timezone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClockTime {
    pub hour: u8,
    pub minute: u8,
}

/// When the recurring jobs fire.
///
/// `timezone` is an IANA zone name; the digest times are civil wall-clock
/// times in that zone, not UTC.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_morning")]
    pub morning: ClockTime,
    #[serde(default = "default_evening")]
    pub evening: ClockTime,
    #[serde(default = "default_watch_interval_secs")]
    pub watch_interval_secs: u64,
    #[serde(default = "default_watch_initial_delay_secs")]
    pub watch_initial_delay_secs: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            morning: default_morning(),
            evening: default_evening(),
            watch_interval_secs: default_watch_interval_secs(),
            watch_initial_delay_secs: default_watch_initial_delay_secs(),
        }
    }
}

fn default_weather_base_url() -> String {
    "https://api.hgbrasil.com/weather".to_string()
}
fn default_fetch_timeout_secs() -> u64 {
    10
}
fn default_timezone() -> String {
    "America/Sao_Paulo".to_string()
}
fn default_morning() -> ClockTime {
    ClockTime { hour: 6, minute: 30 }
}
fn default_evening() -> ClockTime {
    ClockTime {
        hour: 20,
        minute: 30,
    }
}
fn default_watch_interval_secs() -> u64 {
    3600
}
fn default_watch_initial_delay_secs() -> u64 {
    10
}
fn default_db_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{home}/.garoa/garoa.db")
}

impl GaroaConfig {
    /// Load config from a TOML file with GAROA_* env var overrides.
    ///
    /// Checks in order: explicit path argument, then `~/.garoa/garoa.toml`.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        let config: GaroaConfig = Figment::new()
            .merge(Toml::file(&path))
            .merge(Env::prefixed("GAROA_").split("_"))
            .extract()
            .map_err(|e| crate::error::GaroaError::Config(e.to_string()))?;

        Ok(config)
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{home}/.garoa/garoa.toml")
}

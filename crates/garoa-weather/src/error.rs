use thiserror::Error;

/// A failed or unusable forecast fetch.
///
/// Transient by definition: a firing that hits one of these is skipped
/// silently (no message to the subscriber) and no state is mutated.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("weather API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("weather API returned no results for the requested city")]
    CityNotFound,

    #[error("malformed weather payload: {0}")]
    Malformed(String),
}

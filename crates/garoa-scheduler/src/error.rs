use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchedulerError {
    /// The configured IANA timezone name did not parse.
    #[error("invalid timezone: {0}")]
    InvalidTimezone(String),

    /// Hour/minute outside the civil clock.
    #[error("invalid clock time {hour:02}:{minute:02}")]
    InvalidClockTime { hour: u8, minute: u8 },
}

pub type Result<T> = std::result::Result<T, SchedulerError>;

use serde::{Deserialize, Serialize};

/// Telegram chat id; the stable identity of one subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriberId(pub i64);

impl std::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for SubscriberId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// The three job archetypes a subscriber can hold, at most one each.
///
/// `MorningDigest` and `EveningDigest` are created and removed as a pair
/// whenever the digest subscription toggles; `RainWatch` stands alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    MorningDigest,
    EveningDigest,
    RainWatch,
}

impl JobKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobKind::MorningDigest => "morning_digest",
            JobKind::EveningDigest => "evening_digest",
            JobKind::RainWatch => "rain_watch",
        }
    }

    /// True for both halves of the digest pair.
    pub fn is_digest(&self) -> bool {
        matches!(self, JobKind::MorningDigest | JobKind::EveningDigest)
    }
}

impl std::fmt::Display for JobKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JobKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "morning_digest" => Ok(JobKind::MorningDigest),
            "evening_digest" => Ok(JobKind::EveningDigest),
            "rain_watch" => Ok(JobKind::RainWatch),
            other => Err(format!("unknown job kind: {other}")),
        }
    }
}

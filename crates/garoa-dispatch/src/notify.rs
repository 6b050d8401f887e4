use garoa_core::{JobKind, SubscriberId};
use garoa_weather::WeatherReport;

use crate::error::SendError;

/// Structured payload handed to the messaging channel. Rendering into
/// human-readable text is the channel's business, not ours.
#[derive(Debug, Clone)]
pub struct Notification {
    pub subscriber: SubscriberId,
    pub kind: JobKind,
    pub report: WeatherReport,
}

/// Outbound boundary to the messaging channel (Telegram in production).
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, notification: &Notification) -> Result<(), SendError>;
}

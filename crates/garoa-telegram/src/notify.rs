//! Delivery of scheduled notifications to Telegram chats.

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tracing::debug;

use garoa_core::JobKind;
use garoa_dispatch::{Notification, Notifier, SendError};

use crate::format;
use crate::phrases;

/// Renders a structured [`Notification`] into chat text and sends it.
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, notification: &Notification) -> Result<(), SendError> {
        let text = render(notification);
        debug!(
            subscriber = %notification.subscriber,
            kind = %notification.kind,
            "telegram: delivering notification"
        );
        self.bot
            .send_message(ChatId(notification.subscriber.0), text)
            .parse_mode(ParseMode::Markdown)
            .await
            .map_err(|e| SendError(e.to_string()))?;
        Ok(())
    }
}

fn render(notification: &Notification) -> String {
    let report = &notification.report;
    let city = &report.city_name;
    match notification.kind {
        JobKind::MorningDigest | JobKind::EveningDigest => {
            let greeting = if notification.kind == JobKind::MorningDigest {
                format!("☀️ *Bom dia em {city}!* ☀️")
            } else {
                format!("🌙 *Boa noite em {city}!* 🌙")
            };
            format!(
                "{greeting}\n\n{}\n\n---\n\n👕 *Sugestão de look:*\n_{}_",
                format::format_report(report, true),
                format::outfit_suggestion(report)
            )
        }
        JobKind::RainWatch => {
            let headline = phrases::pick(phrases::RAIN_ALERT).replace("{cidade}", city);
            format!(
                "{headline}\n\n{}",
                format::format_report(report, false)
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use garoa_core::SubscriberId;
    use garoa_weather::{DayForecast, WeatherReport};

    fn notification(kind: JobKind) -> Notification {
        Notification {
            subscriber: SubscriberId(1),
            kind,
            report: WeatherReport {
                city_name: "Campinas".to_string(),
                temp: 18,
                description: "Chuvoso".to_string(),
                humidity: 90,
                forecast: vec![DayForecast {
                    date: "30/08".to_string(),
                    weekday: "Sáb".to_string(),
                    max: 21,
                    min: 13,
                    description: "Chuva".to_string(),
                    rain_probability: 88,
                }],
            },
        }
    }

    #[test]
    fn digests_greet_by_period_and_carry_the_look() {
        let morning = render(&notification(JobKind::MorningDigest));
        assert!(morning.contains("Bom dia em Campinas"));
        assert!(morning.contains("Sugestão de look"));

        let evening = render(&notification(JobKind::EveningDigest));
        assert!(evening.contains("Boa noite em Campinas"));
    }

    #[test]
    fn rain_alert_has_a_headline_but_no_duplicate_advisory() {
        let alert = render(&notification(JobKind::RainWatch));
        assert!(alert.contains("Campinas"));
        // the inline ≥60% advisory is suppressed for alert messages
        assert!(!alert.contains("Alerta de chuva: 88%"));
    }
}

//! The callback body behind every firing.

use std::sync::Arc;

use tracing::{error, info, warn};

use garoa_scheduler::{JobKey, JobRunner, Scheduler};
use garoa_store::{StoreError, SubscriberStore};
use garoa_weather::ConditionGateway;

use crate::evaluate::evaluate_watch;
use crate::notify::{Notification, Notifier};

/// Stateless between firings: everything is re-read from the store when a
/// job fires, so toggles and location changes take effect immediately.
pub struct DispatchCoordinator {
    store: Arc<SubscriberStore>,
    gateway: Arc<dyn ConditionGateway>,
    notifier: Arc<dyn Notifier>,
    scheduler: Arc<Scheduler>,
}

impl DispatchCoordinator {
    pub fn new(
        store: Arc<SubscriberStore>,
        gateway: Arc<dyn ConditionGateway>,
        notifier: Arc<dyn Notifier>,
        scheduler: Arc<Scheduler>,
    ) -> Arc<Self> {
        Arc::new(Self {
            store,
            gateway,
            notifier,
            scheduler,
        })
    }

    async fn fire(&self, key: JobKey) -> Result<(), StoreError> {
        let sub = self.store.get(key.subscriber)?;

        // Self-heal: a job whose subscription was switched off (or whose
        // location vanished) removes itself instead of failing every period.
        let enabled = if key.kind.is_digest() {
            sub.digest_enabled
        } else {
            sub.watch_enabled
        };
        let location = match sub.location {
            Some(ref location) if enabled => location,
            _ => {
                warn!(job = %key, "fired for a stale subscription; removing job");
                self.scheduler.cancel(&key);
                return Ok(());
            }
        };

        // A transient fetch failure skips this occurrence entirely: no
        // message, no state change. Silence over spam.
        let report = match self.gateway.fetch(location).await {
            Ok(report) => report,
            Err(e) => {
                warn!(job = %key, location = %location, error = %e, "forecast fetch failed; firing skipped");
                return Ok(());
            }
        };

        if key.kind.is_digest() {
            // Digests are unconditional: a successful fetch is the message.
            self.send(Notification {
                subscriber: key.subscriber,
                kind: key.kind,
                report,
            })
            .await;
            return Ok(());
        }

        let Some(probability) = report.rain_probability() else {
            // The production gateway rejects empty forecasts already.
            warn!(job = %key, "report carries no forecast; firing skipped");
            return Ok(());
        };

        let decision = evaluate_watch(probability, sub.watch_alert_active);
        info!(
            job = %key,
            probability,
            latched = sub.watch_alert_active,
            notify = decision.notify,
            "rain watch evaluated"
        );

        if decision.notify {
            self.send(Notification {
                subscriber: key.subscriber,
                kind: key.kind,
                report,
            })
            .await;
        }

        // Persisted after the send attempt: a crash in between can repeat
        // one alert for a still-active episode, never lose the episode.
        if decision.alert_active != sub.watch_alert_active {
            self.store
                .set_watch_alert_active(key.subscriber, decision.alert_active)?;
        }
        Ok(())
    }

    async fn send(&self, notification: Notification) {
        if let Err(e) = self.notifier.notify(&notification).await {
            warn!(
                subscriber = %notification.subscriber,
                kind = %notification.kind,
                error = %e,
                "notification send failed; dropped"
            );
        }
    }
}

#[async_trait::async_trait]
impl JobRunner for DispatchCoordinator {
    async fn run(&self, key: JobKey) {
        // Store trouble ends the firing; the job stays registered and the
        // next due time gets a fresh attempt.
        if let Err(e) = self.fire(key).await {
            error!(job = %key, error = %e, "firing aborted on store error");
        }
    }
}

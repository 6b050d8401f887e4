//! Subscription command surface.
//!
//! Each operation mutates the store and the live job set as one logical
//! step, store first: if the durable write fails the command errors out
//! before any scheduler mutation, so the two can never disagree.

use std::sync::Arc;

use tracing::info;

use garoa_core::{JobKind, SubscriberId};
use garoa_scheduler::{JobKey, JobRunner, SchedulePlan, Scheduler};
use garoa_store::{Subscriber, SubscriberStore};

use crate::error::ServiceError;

pub struct SubscriptionService {
    store: Arc<SubscriberStore>,
    scheduler: Arc<Scheduler>,
    plan: SchedulePlan,
    runner: Arc<dyn JobRunner>,
}

impl SubscriptionService {
    pub fn new(
        store: Arc<SubscriberStore>,
        scheduler: Arc<Scheduler>,
        plan: SchedulePlan,
        runner: Arc<dyn JobRunner>,
    ) -> Self {
        Self {
            store,
            scheduler,
            plan,
            runner,
        }
    }

    /// Current record, created on first contact.
    pub fn subscriber(&self, id: SubscriberId) -> Result<Subscriber, ServiceError> {
        Ok(self.store.get(id)?)
    }

    /// Set the location of interest. Existing jobs keep running; they read
    /// the fresh location on their next firing.
    pub fn set_location(&self, id: SubscriberId, location: &str) -> Result<(), ServiceError> {
        self.store.set_location(id, location)?;
        Ok(())
    }

    /// Enable the twice-daily digest: morning and evening jobs as a pair.
    pub fn enable_digest(&self, id: SubscriberId) -> Result<(), ServiceError> {
        self.require_location(id)?;
        self.store.set_digest_enabled(id, true)?;
        self.scheduler.schedule(
            JobKey::new(id, JobKind::MorningDigest),
            self.plan.morning,
            Arc::clone(&self.runner),
        );
        self.scheduler.schedule(
            JobKey::new(id, JobKind::EveningDigest),
            self.plan.evening,
            Arc::clone(&self.runner),
        );
        info!(subscriber = %id, "digest enabled");
        Ok(())
    }

    pub fn disable_digest(&self, id: SubscriberId) -> Result<(), ServiceError> {
        self.store.set_digest_enabled(id, false)?;
        self.scheduler.cancel(&JobKey::new(id, JobKind::MorningDigest));
        self.scheduler.cancel(&JobKey::new(id, JobKind::EveningDigest));
        info!(subscriber = %id, "digest disabled");
        Ok(())
    }

    pub fn enable_watch(&self, id: SubscriberId) -> Result<(), ServiceError> {
        self.require_location(id)?;
        self.store.set_watch_enabled(id, true)?;
        self.scheduler.schedule(
            JobKey::new(id, JobKind::RainWatch),
            self.plan.watch,
            Arc::clone(&self.runner),
        );
        info!(subscriber = %id, "rain watch enabled");
        Ok(())
    }

    /// Disabling also re-arms the dedup latch, so a re-enabled watch treats
    /// whatever comes next as a fresh episode.
    pub fn disable_watch(&self, id: SubscriberId) -> Result<(), ServiceError> {
        self.store.set_watch_enabled(id, false)?;
        self.store.set_watch_alert_active(id, false)?;
        self.scheduler.cancel(&JobKey::new(id, JobKind::RainWatch));
        info!(subscriber = %id, "rain watch disabled");
        Ok(())
    }

    /// Flip the digest subscription; returns the new state.
    pub fn toggle_digest(&self, id: SubscriberId) -> Result<bool, ServiceError> {
        if self.store.get(id)?.digest_enabled {
            self.disable_digest(id)?;
            Ok(false)
        } else {
            self.enable_digest(id)?;
            Ok(true)
        }
    }

    /// Flip the rain watch; returns the new state.
    pub fn toggle_watch(&self, id: SubscriberId) -> Result<bool, ServiceError> {
        if self.store.get(id)?.watch_enabled {
            self.disable_watch(id)?;
            Ok(false)
        } else {
            self.enable_watch(id)?;
            Ok(true)
        }
    }

    fn require_location(&self, id: SubscriberId) -> Result<(), ServiceError> {
        if self.store.get(id)?.location.is_none() {
            return Err(ServiceError::NoLocation);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use garoa_core::config::ScheduleConfig;

    struct NoopRunner;

    #[async_trait::async_trait]
    impl JobRunner for NoopRunner {
        async fn run(&self, _key: JobKey) {}
    }

    struct Fixture {
        store: Arc<SubscriberStore>,
        scheduler: Arc<Scheduler>,
        service: SubscriptionService,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(
            SubscriberStore::new(rusqlite::Connection::open_in_memory().unwrap()).unwrap(),
        );
        let scheduler = Scheduler::new();
        let plan = SchedulePlan::from_config(&ScheduleConfig::default()).unwrap();
        let service = SubscriptionService::new(
            store.clone(),
            scheduler.clone(),
            plan,
            Arc::new(NoopRunner),
        );
        Fixture {
            store,
            scheduler,
            service,
        }
    }

    #[tokio::test]
    async fn enable_without_location_is_rejected_and_schedules_nothing() {
        let f = fixture();
        let id = SubscriberId(1);

        assert!(matches!(
            f.service.enable_digest(id),
            Err(ServiceError::NoLocation)
        ));
        assert!(matches!(
            f.service.enable_watch(id),
            Err(ServiceError::NoLocation)
        ));
        assert!(f.scheduler.is_empty());
        assert!(!f.store.get(id).unwrap().digest_enabled);
    }

    #[tokio::test]
    async fn digest_toggle_round_trip_restores_the_job_set() {
        let f = fixture();
        let id = SubscriberId(1);
        f.service.set_location(id, "Campinas, SP").unwrap();

        let before = f.scheduler.active_jobs();
        assert!(f.service.toggle_digest(id).unwrap());
        assert_eq!(f.scheduler.len(), 2); // morning + evening pair
        assert!(!f.service.toggle_digest(id).unwrap());

        let mut after = f.scheduler.active_jobs();
        after.sort_by_key(|k| k.kind.as_str());
        assert_eq!(after, before);
        assert!(!f.store.get(id).unwrap().digest_enabled);
    }

    #[tokio::test]
    async fn double_enable_does_not_duplicate_jobs() {
        let f = fixture();
        let id = SubscriberId(1);
        f.service.set_location(id, "Campinas, SP").unwrap();

        f.service.enable_watch(id).unwrap();
        f.service.enable_watch(id).unwrap();
        f.service.enable_digest(id).unwrap();
        f.service.enable_digest(id).unwrap();
        assert_eq!(f.scheduler.len(), 3);
    }

    #[tokio::test]
    async fn disable_watch_rearms_the_latch() {
        let f = fixture();
        let id = SubscriberId(1);
        f.service.set_location(id, "Campinas, SP").unwrap();
        f.service.enable_watch(id).unwrap();
        f.store.set_watch_alert_active(id, true).unwrap();

        f.service.disable_watch(id).unwrap();
        let sub = f.store.get(id).unwrap();
        assert!(!sub.watch_enabled);
        assert!(!sub.watch_alert_active);

        f.service.enable_watch(id).unwrap();
        assert!(!f.store.get(id).unwrap().watch_alert_active);
    }

    #[tokio::test]
    async fn store_and_scheduler_stay_consistent_across_toggles() {
        let f = fixture();
        let a = SubscriberId(1);
        let b = SubscriberId(2);
        f.service.set_location(a, "Campinas, SP").unwrap();
        f.service.set_location(b, "Recife, PE").unwrap();

        f.service.enable_digest(a).unwrap();
        f.service.enable_watch(b).unwrap();
        f.service.disable_digest(a).unwrap();

        let jobs = f.scheduler.active_jobs();
        assert_eq!(jobs, vec![JobKey::new(b, JobKind::RainWatch)]);
        assert!(!f.store.get(a).unwrap().digest_enabled);
        assert!(f.store.get(b).unwrap().watch_enabled);
    }
}

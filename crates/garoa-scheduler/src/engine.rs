use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use dashmap::DashMap;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use garoa_core::JobKind;
use garoa_store::Subscriber;

use crate::trigger::{first_fire, next_fire, SchedulePlan, Trigger};
use crate::types::JobKey;

/// The callback invoked on every firing.
///
/// Implementations own their failure handling: a run that goes wrong logs
/// and returns, it never deregisters the job or poisons the scheduler.
#[async_trait::async_trait]
pub trait JobRunner: Send + Sync {
    async fn run(&self, key: JobKey);
}

struct JobHandle {
    cancel: CancellationToken,
}

/// Owner of the live job set.
///
/// `schedule` replaces any prior registration for the same key, so toggling
/// a subscription off and back on can never leave duplicate timers. `cancel`
/// is observed at the sleep point only: future firings stop, an in-flight
/// one completes.
pub struct Scheduler {
    jobs: DashMap<JobKey, JobHandle>,
}

impl Scheduler {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            jobs: DashMap::new(),
        })
    }

    /// Register (or replace) the recurring job for `key`.
    pub fn schedule(&self, key: JobKey, trigger: Trigger, runner: Arc<dyn JobRunner>) {
        let cancel = CancellationToken::new();
        let handle = JobHandle {
            cancel: cancel.clone(),
        };
        if let Some(previous) = self.jobs.insert(key, handle) {
            previous.cancel.cancel();
            debug!(job = %key, "existing registration replaced");
        }
        info!(job = %key, ?trigger, "job scheduled");
        tokio::spawn(run_job(key, trigger, runner, cancel));
    }

    /// Remove the job for `key`. Idempotent; an unknown key is a no-op.
    pub fn cancel(&self, key: &JobKey) {
        if let Some((_, handle)) = self.jobs.remove(key) {
            handle.cancel.cancel();
            info!(job = %key, "job cancelled");
        }
    }

    pub fn contains(&self, key: &JobKey) -> bool {
        self.jobs.contains_key(key)
    }

    /// Snapshot of the registered keys, unordered.
    pub fn active_jobs(&self) -> Vec<JobKey> {
        self.jobs.iter().map(|entry| *entry.key()).collect()
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Rebuild the live set from a durable store snapshot.
    ///
    /// Digest-enabled subscribers get the morning/evening pair, watch-enabled
    /// ones a rain watch. A record with a subscription flag but no location
    /// should not exist; it is skipped with a warning rather than scheduled
    /// into guaranteed failures.
    pub fn reconcile(
        &self,
        snapshot: &[Subscriber],
        plan: &SchedulePlan,
        runner: &Arc<dyn JobRunner>,
    ) {
        for sub in snapshot {
            if sub.location.is_none() {
                if sub.digest_enabled || sub.watch_enabled {
                    warn!(subscriber = %sub.id, "subscription enabled without a location; skipping");
                }
                continue;
            }
            if sub.digest_enabled {
                self.schedule(
                    JobKey::new(sub.id, JobKind::MorningDigest),
                    plan.morning,
                    Arc::clone(runner),
                );
                self.schedule(
                    JobKey::new(sub.id, JobKind::EveningDigest),
                    plan.evening,
                    Arc::clone(runner),
                );
            }
            if sub.watch_enabled {
                self.schedule(
                    JobKey::new(sub.id, JobKind::RainWatch),
                    plan.watch,
                    Arc::clone(runner),
                );
            }
        }
        info!(jobs = self.jobs.len(), "live job set reconciled from store");
    }

    /// Cancel everything. Used on shutdown.
    pub fn shutdown(&self) {
        for entry in self.jobs.iter() {
            entry.value().cancel.cancel();
        }
        self.jobs.clear();
        info!("scheduler shut down");
    }
}

/// One task per job: sleep until due, fire, re-arm from *now*.
///
/// Awaiting the runner before re-arming is what makes same-key firings
/// non-overlapping and drops any firings that came due while the previous
/// one was still running.
async fn run_job(
    key: JobKey,
    trigger: Trigger,
    runner: Arc<dyn JobRunner>,
    cancel: CancellationToken,
) {
    let mut due = first_fire(&trigger, Utc::now());
    loop {
        let wait = (due - Utc::now())
            .to_std()
            .unwrap_or(Duration::ZERO);
        tokio::select! {
            _ = cancel.cancelled() => {
                debug!(job = %key, "job task exiting");
                return;
            }
            _ = tokio::time::sleep(wait) => {}
        }

        debug!(job = %key, "firing");
        runner.run(key).await;

        // Cancelled mid-flight (externally or by the job's own self-heal):
        // the completed firing stands, no further ones are armed.
        if cancel.is_cancelled() {
            debug!(job = %key, "job task exiting after final firing");
            return;
        }
        due = next_fire(&trigger, Utc::now());
    }
}

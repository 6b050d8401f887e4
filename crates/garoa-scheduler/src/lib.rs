//! `garoa-scheduler`: per-subscriber recurring job engine.
//!
//! # Overview
//!
//! The live job set is a map from `(subscriber, kind)` to one tokio task.
//! Each task sleeps until its next fire time, runs the registered callback
//! to completion, then arms the next fire from the current instant. That
//! loop shape gives the two guarantees the rest of the system leans on:
//!
//! - firings of the *same* job never overlap, and late firings are dropped
//!   rather than queued;
//! - firings of *different* jobs run on independent tasks, so one slow
//!   callback never delays another subscriber.
//!
//! Jobs are never persisted. The whole set is derivable from the subscriber
//! store and rebuilt by [`Scheduler::reconcile`] at startup.
//!
//! # Trigger variants
//!
//! | Variant | Behaviour                                                  |
//! |---------|------------------------------------------------------------|
//! | `Daily` | Fire at HH:MM civil time in a named IANA zone, every day   |
//! | `Every` | Fire every N seconds, starting after an initial delay      |

pub mod engine;
pub mod error;
pub mod trigger;
pub mod types;

pub use engine::{JobRunner, Scheduler};
pub use error::{Result, SchedulerError};
pub use trigger::{first_fire, next_fire, SchedulePlan, Trigger};
pub use types::JobKey;

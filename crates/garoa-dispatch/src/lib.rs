//! `garoa-dispatch`: what happens when a job fires, and how subscriptions
//! are toggled.
//!
//! Three pieces:
//!
//! - [`evaluate`]: the pure edge-triggered alert predicate, no I/O;
//! - [`DispatchCoordinator`]: the [`JobRunner`] the scheduler invokes:
//!   re-read state, fetch conditions, evaluate, notify, persist the latch;
//! - [`SubscriptionService`]: the command surface: each toggle mutates the
//!   store and the live job set as one logical step.
//!
//! [`JobRunner`]: garoa_scheduler::JobRunner

pub mod coordinator;
pub mod error;
pub mod evaluate;
pub mod notify;
pub mod service;

pub use coordinator::DispatchCoordinator;
pub use error::{SendError, ServiceError};
pub use notify::{Notification, Notifier};
pub use service::SubscriptionService;

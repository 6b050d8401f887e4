//! `garoa-store`: durable subscriber state.
//!
//! One SQLite row per subscriber: location of interest, the two subscription
//! flags and the rain-watch dedup latch. Rows are created lazily on first
//! contact and never deleted here. Every mutation is committed before the
//! call returns, so a process restart can rebuild the live job set from this
//! store alone.

pub mod db;
pub mod error;
pub mod store;
pub mod types;

pub use error::{Result, StoreError};
pub use store::SubscriberStore;
pub use types::Subscriber;

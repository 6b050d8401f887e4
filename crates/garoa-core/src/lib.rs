//! `garoa-core`: configuration and shared types for the garoa weather
//! assistant.
//!
//! Everything here is leaf-level: ids, the closed set of job kinds, the
//! TOML + env configuration and the top-level error used by the binary.

pub mod config;
pub mod error;
pub mod types;

pub use config::GaroaConfig;
pub use error::{GaroaError, Result};
pub use types::{JobKind, SubscriberId};

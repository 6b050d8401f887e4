//! `garoa-telegram`: the chat-facing layer.
//!
//! Command parsing and routing over teloxide long polling, the Portuguese
//! phrase bank, forecast/outfit rendering, and the [`Notifier`] that
//! delivers scheduled digests and rain alerts.
//!
//! [`Notifier`]: garoa_dispatch::Notifier

pub mod adapter;
pub mod format;
pub mod handler;
pub mod notify;
pub mod phrases;

pub use adapter::run_dispatcher;
pub use handler::BotContext;
pub use notify::TelegramNotifier;

pub use teloxide::Bot;

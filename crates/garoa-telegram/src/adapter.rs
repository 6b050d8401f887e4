//! Telegram long-polling adapter.

use std::sync::Arc;

use teloxide::prelude::*;
use tracing::info;

use crate::handler::{handle_command, BotContext, Command};

/// Drive the teloxide Dispatcher until the process is asked to stop.
///
/// Long polling; no public URL required. The ctrl-c handler lets the
/// caller run shutdown steps (scheduler teardown) after this returns.
pub async fn run_dispatcher(bot: Bot, ctx: Arc<BotContext>) {
    info!("telegram: starting long-polling dispatcher");

    let handler = Update::filter_message()
        .filter_command::<Command>()
        .endpoint(handle_command);

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![ctx])
        .default_handler(|_upd| async {})
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("telegram: dispatcher stopped");
}

//! Command handler registered in the teloxide Dispatcher.

use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use teloxide::utils::command::BotCommands;
use tracing::{error, warn};

use garoa_core::SubscriberId;
use garoa_dispatch::{ServiceError, SubscriptionService};
use garoa_weather::{ConditionGateway, FetchError};

use crate::format;
use crate::phrases;

/// Shared dependencies injected into every command invocation.
pub struct BotContext {
    pub service: SubscriptionService,
    pub gateway: Arc<dyn ConditionGateway>,
}

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "apresentação e lista de comandos")]
    Start,
    #[command(description = "previsão rápida para uma cidade")]
    Clima(String),
    #[command(description = "define a cidade dos seus alertas")]
    Setdaily(String),
    #[command(description = "liga/desliga o resumo diário")]
    Daily,
    #[command(description = "liga/desliga o monitor de chuva")]
    Alertachuva,
    #[command(description = "sugestão de roupa para agora")]
    Lookdodia,
}

pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    ctx: Arc<BotContext>,
) -> ResponseResult<()> {
    let id = SubscriberId(msg.chat.id.0);
    let reply = match cmd {
        Command::Start => phrases::START.to_string(),
        Command::Clima(city) => clima(&ctx, &city).await,
        Command::Setdaily(city) => setdaily(&ctx, id, &city).await,
        Command::Daily => daily(&ctx, id),
        Command::Alertachuva => alertachuva(&ctx, id),
        Command::Lookdodia => lookdodia(&ctx, id).await,
    };

    bot.send_message(msg.chat.id, reply)
        .parse_mode(ParseMode::Markdown)
        .await?;
    Ok(())
}

async fn clima(ctx: &BotContext, city: &str) -> String {
    let city = city.trim();
    if city.is_empty() {
        return phrases::pick(phrases::MISSING_CITY).replace("{comando}", "clima");
    }
    match ctx.gateway.fetch(city).await {
        Ok(report) => phrases::pick(phrases::CLIMA_OK)
            .replace("{cidade}", &report.city_name)
            .replace("{previsao}", &format::format_report(&report, true)),
        Err(e) => fetch_failure_reply(city, e),
    }
}

/// Validates the city against the weather API and stores its canonical name.
async fn setdaily(ctx: &BotContext, id: SubscriberId, city: &str) -> String {
    let city = city.trim();
    if city.is_empty() {
        return phrases::pick(phrases::MISSING_CITY).replace("{comando}", "setdaily");
    }
    let report = match ctx.gateway.fetch(city).await {
        Ok(report) => report,
        Err(e) => return fetch_failure_reply(city, e),
    };
    match ctx.service.set_location(id, &report.city_name) {
        Ok(()) => phrases::pick(phrases::SETDAILY_OK).replace("{cidade}", &report.city_name),
        Err(e) => service_failure_reply(id, e),
    }
}

fn daily(ctx: &BotContext, id: SubscriberId) -> String {
    match ctx.service.toggle_digest(id) {
        Ok(true) => {
            phrases::pick(phrases::DAILY_ENABLED).replace("{cidade}", &location_of(ctx, id))
        }
        Ok(false) => phrases::pick(phrases::DAILY_DISABLED).to_string(),
        Err(e) => service_failure_reply(id, e),
    }
}

fn alertachuva(ctx: &BotContext, id: SubscriberId) -> String {
    match ctx.service.toggle_watch(id) {
        Ok(true) => {
            phrases::pick(phrases::WATCH_ENABLED).replace("{cidade}", &location_of(ctx, id))
        }
        Ok(false) => phrases::pick(phrases::WATCH_DISABLED).to_string(),
        Err(e) => service_failure_reply(id, e),
    }
}

async fn lookdodia(ctx: &BotContext, id: SubscriberId) -> String {
    let city = match ctx.service.subscriber(id) {
        Ok(sub) => match sub.location {
            Some(city) => city,
            None => return phrases::pick(phrases::SET_CITY_FIRST).to_string(),
        },
        Err(e) => return service_failure_reply(id, e),
    };
    match ctx.gateway.fetch(&city).await {
        Ok(report) => phrases::pick(phrases::LOOK)
            .replace("{cidade}", &city)
            .replace("{look}", &format::outfit_suggestion(&report)),
        Err(e) => fetch_failure_reply(&city, e),
    }
}

fn location_of(ctx: &BotContext, id: SubscriberId) -> String {
    ctx.service
        .subscriber(id)
        .ok()
        .and_then(|sub| sub.location)
        .unwrap_or_default()
}

fn fetch_failure_reply(city: &str, e: FetchError) -> String {
    match e {
        FetchError::CityNotFound => phrases::pick(phrases::CITY_ERROR).to_string(),
        other => {
            warn!(city, error = %other, "interactive fetch failed");
            phrases::pick(phrases::GENERIC_ERROR).to_string()
        }
    }
}

fn service_failure_reply(id: SubscriberId, e: ServiceError) -> String {
    match e {
        ServiceError::NoLocation => phrases::pick(phrases::SET_CITY_FIRST).to_string(),
        ServiceError::Store(e) => {
            error!(subscriber = %id, error = %e, "subscription command failed");
            phrases::pick(phrases::GENERIC_ERROR).to_string()
        }
    }
}

use std::sync::Arc;

use tracing::info;

use garoa_core::GaroaConfig;
use garoa_dispatch::{DispatchCoordinator, SubscriptionService};
use garoa_scheduler::{JobRunner, SchedulePlan, Scheduler};
use garoa_store::SubscriberStore;
use garoa_telegram::{Bot, BotContext, TelegramNotifier};
use garoa_weather::{ConditionGateway, HgWeather};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "garoa=info".into()),
        )
        .init();

    // config: explicit GAROA_CONFIG path > ~/.garoa/garoa.toml > env vars
    let config_path = std::env::var("GAROA_CONFIG").ok();
    let config = GaroaConfig::load(config_path.as_deref())?;

    let db_path = &config.database.path;
    ensure_parent_dir(db_path);
    info!(path = %db_path, "opening SQLite database");
    let conn = rusqlite::Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    let store = Arc::new(SubscriberStore::new(conn)?);

    let plan = SchedulePlan::from_config(&config.schedule)?;
    let gateway: Arc<dyn ConditionGateway> = Arc::new(HgWeather::new(&config.weather)?);
    let scheduler = Scheduler::new();

    let bot = Bot::new(&config.telegram.bot_token);
    let notifier = Arc::new(TelegramNotifier::new(bot.clone()));
    let runner: Arc<dyn JobRunner> = DispatchCoordinator::new(
        Arc::clone(&store),
        Arc::clone(&gateway),
        notifier,
        Arc::clone(&scheduler),
    );

    // the live job set is never persisted; rebuild it from subscriber flags
    scheduler.reconcile(&store.all()?, &plan, &runner);

    let service = SubscriptionService::new(
        Arc::clone(&store),
        Arc::clone(&scheduler),
        plan,
        runner,
    );
    let ctx = Arc::new(BotContext { service, gateway });

    garoa_telegram::run_dispatcher(bot, ctx).await;

    scheduler.shutdown();
    info!("garoa stopped");
    Ok(())
}

fn ensure_parent_dir(path: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        let _ = std::fs::create_dir_all(parent);
    }
}

//! CourseBuddy Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;
use teloxide::{prelude::*, types::Update};
use teloxide::dispatching::UpdateHandler;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn, error};

use CourseBuddy::{
    config::Settings,
    utils::logging,
    models::ModuleCatalog,
    router::{Command, Router},
    services::NotificationService,
    state::SessionStore,
    handlers::handle_message,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;
    
    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;
    
    info!("Starting {}...", CourseBuddy::info());
    
    // Initialize bot
    let bot = Bot::new(&settings.bot.token);
    let me = bot.get_me().await?;
    let bot_username = me.username.clone().unwrap_or_default();
    info!(bot_username = %bot_username, "Authorized with Telegram");

    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }
    
    // Initialize state and services
    let catalog = ModuleCatalog::new(settings.course.modules.clone());
    info!(modules = catalog.len(), admin_id = settings.bot.admin_id, "Course loaded");

    let router = Arc::new(Router::new(catalog, bot_username, settings.bot.support_contact.clone()));
    let sessions = Arc::new(SessionStore::new());
    let notifier = Arc::new(NotificationService::new(bot.clone(), settings.bot.admin_id));
    
    // Create dispatcher with dependencies registered
    let mut dispatcher = Dispatcher::builder(bot, create_handler())
        .dependencies(dptree::deps![
            router,
            sessions.clone(),
            notifier.clone()
        ])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();
    
    info!("Starting bot with polling mode...");
    dispatcher.dispatch().await;
    
    let storage_stats = sessions.get_stats().await;
    let notification_stats = notifier.get_stats();
    info!(
        sessions = storage_stats.total_sessions,
        sessions_in_form = storage_stats.sessions_in_form,
        replies_sent = notification_stats.replies_sent,
        leads_sent = notification_stats.leads_sent,
        failed = notification_stats.total_failed,
        "CourseBuddy bot has been shut down."
    );
    
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;
    
    dptree::entry()
        .branch(Update::filter_message().endpoint(handle_messages))
}

/// Handle every private message, commands included
async fn handle_messages(
    msg: Message,
    router: Arc<Router>,
    sessions: Arc<SessionStore>,
    notifier: Arc<NotificationService>,
) -> HandlerResult {
    if let Err(e) = handle_message(msg, router, sessions, notifier).await {
        error!(error = %e, severity = %e.severity(), "Error handling message");
        return Err(e.into());
    }
    
    Ok(())
}

//! Logging configuration and setup
//! 
//! This module provides logging initialization and structured logging utilities
//! for the CourseBuddy application.

use tracing::{info, warn, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::models::LeadSubmission;
use crate::utils::errors::{CourseBuddyError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the file writer on drop and must be kept
/// alive for as long as the bot runs.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| CourseBuddyError::Config(format!("Invalid log filter: {}", e)))?;

    let (file_writer, guard) = match &config.file_dir {
        Some(dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "coursebuddy.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (Some(non_blocking), Some(guard))
        }
        None => (None, None),
    };

    let stdout_json = config.json.then(|| {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout)
    });
    let stdout_plain = (!config.json).then(|| {
        tracing_subscriber::fmt::layer().with_writer(std::io::stdout)
    });
    let file_layer = file_writer.map(|writer| {
        tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_json)
        .with(stdout_plain)
        .with(file_layer)
        .try_init()
        .map_err(|e| CourseBuddyError::Config(format!("Logging already initialized: {}", e)))?;
        
    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log user actions with structured data
pub fn log_user_action(user_id: i64, action: &str, details: Option<&str>) {
    info!(
        user_id = user_id,
        action = action,
        details = details,
        "User action performed"
    );
}

/// Log a rejected form input
pub fn log_invalid_input(user_id: i64, field: &str, input: &str) {
    debug!(
        user_id = user_id,
        field = field,
        input = input,
        "Form input rejected"
    );
}

/// Log a completed contact request
pub fn log_lead_submitted(lead: &LeadSubmission) {
    info!(
        lead_id = %lead.id,
        user_id = lead.user_id,
        handle = lead.telegram_handle.as_deref(),
        "Lead submitted"
    );
}

/// Log a contact request that could not be delivered to the administrator
///
/// Carries the full record.
pub fn log_lead_undelivered(lead: &LeadSubmission, error: &str) {
    warn!(
        lead_id = %lead.id,
        user_id = lead.user_id,
        name = %lead.name,
        phone = %lead.phone,
        handle = lead.telegram_handle.as_deref(),
        error = error,
        "Lead notification was not delivered"
    );
}

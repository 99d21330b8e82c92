//! CourseBuddy Telegram Bot
//!
//! A Telegram bot that walks learners through a fixed set of course
//! modules, remembers which ones they finished and forwards contact
//! requests to an administrator.

#![allow(non_snake_case)]

pub mod config;
pub mod content;
pub mod handlers;
pub mod services;
pub mod models;
pub mod router;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CourseBuddyError, Result};

// Re-export main components for easy access
pub use router::Router;
pub use services::NotificationService;
pub use state::SessionStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

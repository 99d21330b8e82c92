//! Services module
//!
//! This module contains services that talk to the Telegram Bot API

pub mod notification;

// Re-export commonly used services
pub use notification::{NotificationService, NotificationStats};

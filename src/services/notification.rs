//! Notification service implementation
//! 
//! This service owns every outbound message: replies to users, rendered
//! with their reply keyboards, and contact request notifications for the
//! administrator.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use teloxide::{Bot, types::{ChatId, Message, ParseMode}, requests::Requester, prelude::Request, payloads::SendMessageSetters};
use serde::Serialize;
use tracing::{info, error, debug};
use crate::handlers::keyboards;
use crate::models::{LeadSubmission, ModuleCatalog};
use crate::router::{Reply, TextFormat};
use crate::utils::errors::{CourseBuddyError, Result};

/// Notification statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationStats {
    pub replies_sent: u64,
    pub leads_sent: u64,
    pub total_failed: u64,
}

#[derive(Debug, Default)]
struct Counters {
    replies_sent: AtomicU64,
    leads_sent: AtomicU64,
    total_failed: AtomicU64,
}

/// Notification service for message handling
#[derive(Clone)]
pub struct NotificationService {
    bot: Bot,
    admin_chat: ChatId,
    counters: Arc<Counters>,
}

impl NotificationService {
    /// Create a new NotificationService instance
    pub fn new(bot: Bot, admin_id: i64) -> Self {
        Self {
            bot,
            admin_chat: ChatId(admin_id),
            counters: Arc::new(Counters::default()),
        }
    }

    /// Send a router reply to a user chat
    pub async fn send_reply(&self, chat_id: ChatId, reply: &Reply, catalog: &ModuleCatalog) -> Result<Message> {
        debug!(chat_id = ?chat_id, format = ?reply.format, keyboard = ?reply.keyboard, "Sending reply");

        let mut request = self.bot.send_message(chat_id, reply.text.as_str());

        if reply.format == TextFormat::Html {
            request = request.parse_mode(ParseMode::Html);
        }

        if let Some(keyboard) = &reply.keyboard {
            request = request.reply_markup(keyboards::render(keyboard, catalog));
        }

        match request.send().await {
            Ok(message) => {
                self.counters.replies_sent.fetch_add(1, Ordering::Relaxed);
                Ok(message)
            }
            Err(e) => {
                self.counters.total_failed.fetch_add(1, Ordering::Relaxed);
                error!(chat_id = ?chat_id, error = %e, "Failed to send reply");
                Err(CourseBuddyError::Telegram(e))
            }
        }
    }

    /// Forward a contact request to the administrator
    ///
    /// Sent as plain text so user supplied names cannot break formatting.
    pub async fn notify_lead(&self, lead: &LeadSubmission) -> Result<Message> {
        debug!(lead_id = %lead.id, admin_chat = ?self.admin_chat, "Sending lead notification");

        match self.bot.send_message(self.admin_chat, lead.admin_message()).send().await {
            Ok(message) => {
                self.counters.leads_sent.fetch_add(1, Ordering::Relaxed);
                info!(lead_id = %lead.id, user_id = lead.user_id, "Lead notification sent successfully");
                Ok(message)
            }
            Err(e) => {
                self.counters.total_failed.fetch_add(1, Ordering::Relaxed);
                error!(lead_id = %lead.id, error = %e, "Failed to send lead notification");
                Err(CourseBuddyError::Telegram(e))
            }
        }
    }

    /// Get notification statistics
    pub fn get_stats(&self) -> NotificationStats {
        NotificationStats {
            replies_sent: self.counters.replies_sent.load(Ordering::Relaxed),
            leads_sent: self.counters.leads_sent.load(Ordering::Relaxed),
            total_failed: self.counters.total_failed.load(Ordering::Relaxed),
        }
    }

    pub fn admin_chat(&self) -> ChatId {
        self.admin_chat
    }
}

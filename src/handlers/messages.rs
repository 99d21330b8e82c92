//! Message handlers module
//!
//! Handles incoming private text messages and commands

use std::sync::Arc;
use teloxide::types::{Message, MediaKind, MessageKind};
use tracing::debug;
use crate::router::{Inbound, Router};
use crate::services::NotificationService;
use crate::state::SessionStore;
use crate::utils::errors::{CourseBuddyError, Result};
use crate::utils::helpers::truncate_text;
use crate::utils::logging::{log_lead_submitted, log_lead_undelivered};

/// Handle an incoming message
///
/// A completed form is forwarded to the administrator before the user is
/// answered. The session is reset only after that delivery succeeds. On
/// failure no confirmation is sent and the user stays on the phone step,
/// so sending the number again retries the request.
pub async fn handle_message(
    msg: Message,
    router: Arc<Router>,
    sessions: Arc<SessionStore>,
    notifier: Arc<NotificationService>,
) -> Result<()> {
    if !msg.chat.is_private() {
        debug!(chat_id = ?msg.chat.id, "Ignoring message outside a private chat");
        return Ok(());
    }

    let user = msg.from.as_ref().ok_or_else(|| {
        CourseBuddyError::InvalidInput("No user in message".to_string())
    })?;

    let inbound = Inbound {
        user_id: user.id.0 as i64,
        handle: user.username.as_deref(),
        text: msg.text(),
    };

    debug!(
        user_id = inbound.user_id,
        message_id = msg.id.0,
        kind = message_kind(&msg),
        text = inbound.text.map(|t| truncate_text(t, 64)),
        "Processing message"
    );

    let outcome = sessions
        .update(inbound.user_id, |session| router.route(session, &inbound))
        .await;

    if let Some(lead) = &outcome.lead {
        log_lead_submitted(lead);
        if let Err(e) = notifier.notify_lead(lead).await {
            log_lead_undelivered(lead, &e.to_string());
            return Err(e);
        }
        sessions.clear(inbound.user_id).await;
    }

    notifier.send_reply(msg.chat.id, &outcome.reply, router.catalog()).await?;

    Ok(())
}

fn message_kind(msg: &Message) -> &'static str {
    match &msg.kind {
        MessageKind::Common(common) => match &common.media_kind {
            MediaKind::Text(_) => "text",
            MediaKind::Photo(_) => "photo",
            MediaKind::Sticker(_) => "sticker",
            MediaKind::Voice(_) => "voice",
            MediaKind::Document(_) => "document",
            _ => "other_media",
        },
        _ => "other",
    }
}

//! Test data helpers for creating test Telegram messages
//!
//! Messages are built from Bot API JSON so they go through the same
//! deserialization as real updates.

use serde_json::{json, Value};
use teloxide::types::Message;

/// Helper function to create a test user JSON object
pub fn test_user_json(user_id: i64, username: Option<&str>) -> Value {
    let mut user = json!({
        "id": user_id,
        "is_bot": false,
        "first_name": "TestUser",
    });
    if let Some(username) = username {
        user["username"] = json!(username);
    }
    user
}

/// Helper function to create a private text message
pub fn create_private_text_message(user_id: i64, username: Option<&str>, text: &str) -> Message {
    serde_json::from_value(json!({
        "message_id": 1,
        "date": 1700000000,
        "from": test_user_json(user_id, username),
        "chat": {
            "id": user_id,
            "type": "private",
            "first_name": "TestUser",
        },
        "text": text,
    }))
    .expect("valid private message JSON")
}

/// Helper function to create a photo message (no text)
pub fn create_private_photo_message(user_id: i64) -> Message {
    serde_json::from_value(json!({
        "message_id": 2,
        "date": 1700000000,
        "from": test_user_json(user_id, None),
        "chat": {
            "id": user_id,
            "type": "private",
            "first_name": "TestUser",
        },
        "photo": [{
            "file_id": "photo_file",
            "file_unique_id": "photo_unique",
            "width": 90,
            "height": 90,
        }],
    }))
    .expect("valid photo message JSON")
}

/// Helper function to create a group text message
pub fn create_group_text_message(user_id: i64, chat_id: i64, text: &str) -> Message {
    serde_json::from_value(json!({
        "message_id": 3,
        "date": 1700000000,
        "from": test_user_json(user_id, Some("testuser")),
        "chat": {
            "id": chat_id,
            "type": "supergroup",
            "title": "Test Group",
        },
        "text": text,
    }))
    .expect("valid group message JSON")
}

/// Helper function to create a group message with no sender, as posted on
/// behalf of a channel
pub fn create_group_message_without_sender(chat_id: i64, text: &str) -> Message {
    serde_json::from_value(json!({
        "message_id": 4,
        "date": 1700000000,
        "chat": {
            "id": chat_id,
            "type": "supergroup",
            "title": "Test Group",
        },
        "text": text,
    }))
    .expect("valid group message JSON")
}

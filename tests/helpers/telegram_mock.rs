//! Mock Telegram API Server for testing
//! 
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{body_string_contains, method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// teloxide spells method names in CamelCase, the Bot API ignores case
const SEND_MESSAGE_PATH: &str = r"(?i)/bot[^/]+/sendmessage$";

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
        }
    }
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Bot whose requests go to this server
    pub fn bot(&self) -> Bot {
        Bot::new(test_bot_token()).set_api_url(
            self.server.uri().parse().expect("mock server URI is a valid URL"),
        )
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        Mock::given(method("POST"))
            .and(path_regex(SEND_MESSAGE_PATH))
            .respond_with(response(&config))
            .mount(&self.server)
            .await;
    }

    /// Make sendMessage fail for one chat only
    pub async fn mock_send_message_failure_for(&self, chat_id: i64) {
        Mock::given(method("POST"))
            .and(path_regex(SEND_MESSAGE_PATH))
            .and(body_string_contains(format!("\"chat_id\":{}", chat_id)))
            .respond_with(response(&MockResponseConfig { success: false, delay_ms: None }))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Make the next sendMessage to one chat fail, later ones fall through
    pub async fn mock_send_message_failure_once_for(&self, chat_id: i64) {
        Mock::given(method("POST"))
            .and(path_regex(SEND_MESSAGE_PATH))
            .and(body_string_contains(format!("\"chat_id\":{}", chat_id)))
            .respond_with(response(&MockResponseConfig { success: false, delay_ms: None }))
            .up_to_n_times(1)
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Setup default successful mocks
    pub async fn setup_default_mocks(&self) {
        self.mock_send_message(MockResponseConfig::default()).await;
    }

    /// All sendMessage request bodies, in arrival order
    pub async fn sent_messages(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.url.path().to_lowercase().ends_with("/sendmessage"))
            .filter_map(|req| serde_json::from_slice(&req.body).ok())
            .collect()
    }

    /// sendMessage bodies addressed to one chat
    pub async fn messages_to(&self, chat_id: i64) -> Vec<Value> {
        self.sent_messages()
            .await
            .into_iter()
            .filter(|body| body["chat_id"] == json!(chat_id))
            .collect()
    }
}

fn response(config: &MockResponseConfig) -> ResponseTemplate {
    let body = if config.success {
        json!({
            "ok": true,
            "result": {
                "message_id": 123,
                "from": {
                    "id": 12345,
                    "is_bot": true,
                    "first_name": "TestBot",
                    "username": "course_buddy_bot"
                },
                "chat": {
                    "id": 987654321_i64,
                    "type": "private",
                    "first_name": "TestUser"
                },
                "date": 1640995200,
                "text": "Test message"
            }
        })
    } else {
        json!({
            "ok": false,
            "error_code": 400,
            "description": "Bad Request: chat not found"
        })
    };

    let mut response = ResponseTemplate::new(if config.success { 200 } else { 400 })
        .set_body_json(body);

    if let Some(delay) = config.delay_ms {
        response = response.set_delay(std::time::Duration::from_millis(delay));
    }

    response
}

/// Helper function to create a test bot token
pub fn test_bot_token() -> String {
    "12345:test_token".to_string()
}

/// Helper function to create test user ID
pub fn test_user_id() -> i64 {
    987654321
}

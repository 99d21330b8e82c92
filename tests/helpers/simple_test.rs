//! Simple test infrastructure shared by every integration test

use std::sync::{Arc, Once};
use CourseBuddy::models::{CourseModule, ModuleCatalog};
use CourseBuddy::{Router, SessionStore};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Bot username used when parsing addressed commands
pub const TEST_BOT_USERNAME: &str = "course_buddy_bot";

/// Chat that receives contact requests in tests
pub const TEST_ADMIN_ID: i64 = 555000111;

/// Two-module catalog used across the integration tests
pub fn test_catalog() -> ModuleCatalog {
    ModuleCatalog::new(vec![
        CourseModule {
            name: "Module A".to_string(),
            description: "Getting started".to_string(),
        },
        CourseModule {
            name: "Module B".to_string(),
            description: "Growing further".to_string(),
        },
    ])
}

pub fn test_router() -> Arc<Router> {
    Arc::new(Router::new(test_catalog(), TEST_BOT_USERNAME, "@support"))
}

pub fn test_sessions() -> Arc<SessionStore> {
    Arc::new(SessionStore::new())
}

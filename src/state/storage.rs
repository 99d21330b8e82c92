//! State storage implementation
//! 
//! In-memory session store keyed by Telegram user id. Sessions live as long
//! as the process. Each session sits behind its own async mutex so that two
//! updates from the same user are applied one after the other, while
//! different users never wait on each other.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;
use super::session::Session;

/// In-memory session store
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<i64, Arc<Mutex<Session>>>>,
}

impl SessionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a user's session, created on first access
    pub async fn get(&self, user_id: i64) -> Session {
        let entry = self.entry(user_id).await;
        let session = entry.lock().await;
        session.clone()
    }

    /// Apply a mutation to a user's session under its lock
    pub async fn update<F, R>(&self, user_id: i64, mutate: F) -> R
    where
        F: FnOnce(&mut Session) -> R,
    {
        let entry = self.entry(user_id).await;
        let mut session = entry.lock().await;
        mutate(&mut *session)
    }

    /// Reset a user's session to a fresh idle one
    pub async fn clear(&self, user_id: i64) {
        self.update(user_id, Session::reset).await;
        debug!(user_id = user_id, "Cleared session");
    }

    /// Check if a session exists for a user
    pub async fn contains(&self, user_id: i64) -> bool {
        self.sessions.read().await.contains_key(&user_id)
    }

    /// Get storage statistics
    pub async fn get_stats(&self) -> StorageStats {
        let entries: Vec<_> = self.sessions.read().await.values().cloned().collect();

        let mut stats = StorageStats {
            total_sessions: entries.len(),
            ..StorageStats::default()
        };
        for entry in entries {
            let session = entry.lock().await;
            if !session.phase.is_idle() {
                stats.sessions_in_form += 1;
            }
            stats.completed_modules += session.completed_modules.len();
        }

        stats
    }

    async fn entry(&self, user_id: i64) -> Arc<Mutex<Session>> {
        if let Some(entry) = self.sessions.read().await.get(&user_id) {
            return entry.clone();
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(user_id)
            .or_insert_with(|| {
                debug!(user_id = user_id, "Creating session");
                Arc::new(Mutex::new(Session::new(user_id)))
            })
            .clone()
    }
}

/// Storage statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct StorageStats {
    pub total_sessions: usize,
    pub sessions_in_form: usize,
    pub completed_modules: usize,
}

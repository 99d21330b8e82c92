//! Lead submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::content;

/// Contact request collected by the form flow
///
/// Built once the phone number passes validation, handed to the admin
/// notifier and then dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub id: Uuid,
    pub user_id: i64,
    pub name: String,
    pub phone: String,
    pub telegram_handle: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl LeadSubmission {
    pub fn new(user_id: i64, name: String, phone: String, telegram_handle: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name,
            phone,
            telegram_handle,
            submitted_at: Utc::now(),
        }
    }

    /// `@handle`, or the "no handle" marker
    pub fn display_handle(&self) -> String {
        match self.telegram_handle.as_deref() {
            Some(handle) if !handle.is_empty() => format!("@{}", handle),
            _ => content::NO_HANDLE.to_string(),
        }
    }

    /// Text sent to the administrator
    pub fn admin_message(&self) -> String {
        content::admin_lead(&self.name, &self.phone, &self.display_handle())
    }
}

//! Per-user conversation session
//! 
//! A session tracks where the user is in the contact form, which module
//! card is open and which modules the user has completed.

use std::collections::BTreeSet;

/// Position in the contact request form
///
/// The name collected in the first step travels inside `AwaitingPhone`,
/// so a phone step without a name cannot exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    AwaitingName,
    AwaitingPhone { name: String },
}

impl Phase {
    /// Short label for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::AwaitingName => "awaiting_name",
            Phase::AwaitingPhone { .. } => "awaiting_phone",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Phase::Idle)
    }
}

/// User conversation session
#[derive(Debug, Clone)]
pub struct Session {
    /// User ID this session belongs to
    pub user_id: i64,
    pub phase: Phase,
    /// Module whose card is currently open
    pub current_module: Option<String>,
    pub completed_modules: BTreeSet<String>,
}

impl Session {
    /// Create a fresh idle session for a user
    pub fn new(user_id: i64) -> Self {
        Self {
            user_id,
            phase: Phase::Idle,
            current_module: None,
            completed_modules: BTreeSet::new(),
        }
    }

    /// Drop everything, completed modules included
    pub fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.current_module = None;
        self.completed_modules.clear();
    }

    pub fn select_module(&mut self, name: &str) {
        self.current_module = Some(name.to_string());
    }

    pub fn clear_current_module(&mut self) {
        self.current_module = None;
    }

    /// Mark the open module as completed and close it
    ///
    /// Returns the module name, or `None` when no module was open.
    pub fn complete_current_module(&mut self) -> Option<String> {
        let name = self.current_module.take()?;
        self.completed_modules.insert(name.clone());
        Some(name)
    }

    pub fn is_completed(&self, name: &str) -> bool {
        self.completed_modules.contains(name)
    }

    pub fn begin_form(&mut self) {
        self.phase = Phase::AwaitingName;
    }

    pub fn await_phone(&mut self, name: String) {
        self.phase = Phase::AwaitingPhone { name };
    }
}

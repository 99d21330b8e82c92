//! Transport-neutral replies

use crate::models::LeadSubmission;

/// Keyboard to attach to a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// Module list plus form, help and info buttons
    Modules,
    /// Actions for an open module card
    ModuleOptions { completed: bool },
    /// Hide the keyboard while the user types
    Remove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFormat {
    Plain,
    Html,
}

/// A single reply to the originating chat
///
/// `keyboard: None` leaves whatever keyboard the user already has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub format: TextFormat,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Plain,
            keyboard: None,
        }
    }

    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: TextFormat::Html,
            keyboard: None,
        }
    }

    pub fn with_keyboard(mut self, keyboard: Keyboard) -> Self {
        self.keyboard = Some(keyboard);
        self
    }
}

/// Result of routing one message
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub reply: Reply,
    /// Contact request to forward to the administrator
    pub lead: Option<LeadSubmission>,
}

impl From<Reply> for Outcome {
    fn from(reply: Reply) -> Self {
        Self { reply, lead: None }
    }
}

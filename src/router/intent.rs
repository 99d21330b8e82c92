//! Literal-to-intent classification

use teloxide::utils::command::BotCommands;
use crate::content;
use crate::models::ModuleCatalog;

/// Slash commands the bot understands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "Начать сначала и открыть список модулей")]
    Start,
    #[command(description = "Как связаться с поддержкой")]
    Help,
    #[command(description = "О боте")]
    Info,
}

/// What the user asked for, independent of how it was typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Start,
    Help,
    Info,
    SelectModule(String),
    MarkDone,
    Back,
    SubmitRequest,
    Unrecognized,
}

impl Intent {
    /// Classify message text
    ///
    /// Commands may be addressed to this bot (`/help@name`) and may carry
    /// arguments (`/start promo`); arguments are ignored. Buttons and
    /// module names match only on exact text.
    pub fn classify(text: Option<&str>, catalog: &ModuleCatalog, bot_username: &str) -> Self {
        let Some(text) = text else {
            return Intent::Unrecognized;
        };

        if text.starts_with('/') {
            let head = text.split_whitespace().next().unwrap_or(text);
            return match Command::parse(head, bot_username) {
                Ok(command) => command.into(),
                Err(_) => Intent::Unrecognized,
            };
        }

        match text {
            content::BUTTON_MARK_DONE => Intent::MarkDone,
            content::BUTTON_BACK => Intent::Back,
            content::BUTTON_SUBMIT_REQUEST => Intent::SubmitRequest,
            content::BUTTON_HELP => Intent::Help,
            content::BUTTON_INFO => Intent::Info,
            name if catalog.contains(name) => Intent::SelectModule(name.to_string()),
            _ => Intent::Unrecognized,
        }
    }

    /// Short label for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Start => "start",
            Intent::Help => "help",
            Intent::Info => "info",
            Intent::SelectModule(_) => "select_module",
            Intent::MarkDone => "mark_done",
            Intent::Back => "back",
            Intent::SubmitRequest => "submit_request",
            Intent::Unrecognized => "unrecognized",
        }
    }
}

impl From<Command> for Intent {
    fn from(command: Command) -> Self {
        match command {
            Command::Start => Intent::Start,
            Command::Help => Intent::Help,
            Command::Info => Intent::Info,
        }
    }
}

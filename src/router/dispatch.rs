//! Conversation transitions

use tracing::debug;
use crate::content;
use crate::models::{LeadSubmission, ModuleCatalog};
use crate::state::{Phase, Session};
use crate::utils::helpers::normalize_phone;
use crate::utils::logging::{log_invalid_input, log_user_action};
use super::intent::Intent;
use super::reply::{Keyboard, Outcome, Reply};

/// One incoming message, stripped down to what routing needs
#[derive(Debug, Clone, Copy)]
pub struct Inbound<'a> {
    pub user_id: i64,
    /// Telegram username without the `@`
    pub handle: Option<&'a str>,
    /// `None` for stickers, photos and other non-text messages
    pub text: Option<&'a str>,
}

/// Message router
///
/// Holds the read-only pieces every transition needs. Session state is
/// passed in per call so the router itself is shared freely.
#[derive(Debug, Clone)]
pub struct Router {
    catalog: ModuleCatalog,
    bot_username: String,
    support_contact: String,
}

impl Router {
    pub fn new(catalog: ModuleCatalog, bot_username: impl Into<String>, support_contact: impl Into<String>) -> Self {
        Self {
            catalog,
            bot_username: bot_username.into(),
            support_contact: support_contact.into(),
        }
    }

    pub fn catalog(&self) -> &ModuleCatalog {
        &self.catalog
    }

    pub fn classify(&self, text: Option<&str>) -> Intent {
        Intent::classify(text, &self.catalog, &self.bot_username)
    }

    /// Route one message against the user's session
    ///
    /// `/start` always wins. While a form is open every other message is
    /// form input. Otherwise buttons, module names and the fallback apply.
    ///
    /// When a lead is returned the session is left in `AwaitingPhone`. The
    /// caller resets it once the lead has reached the administrator.
    pub fn route(&self, session: &mut Session, inbound: &Inbound<'_>) -> Outcome {
        let intent = self.classify(inbound.text);
        debug!(
            user_id = inbound.user_id,
            phase = session.phase.as_str(),
            intent = intent.as_str(),
            "Routing message"
        );

        match (session.phase.clone(), intent) {
            (_, Intent::Start) => self.restart(session),
            (Phase::AwaitingName, _) => self.accept_name(session, inbound),
            (Phase::AwaitingPhone { name }, _) => self.accept_phone(session, name, inbound),
            (Phase::Idle, Intent::SelectModule(name)) => self.show_module(session, &name),
            (Phase::Idle, Intent::MarkDone) => self.mark_done(session),
            (Phase::Idle, Intent::Back) => self.back_to_menu(session),
            (Phase::Idle, Intent::SubmitRequest) => self.open_form(session),
            (Phase::Idle, Intent::Help) => Reply::plain(content::help(&self.support_contact)).into(),
            (Phase::Idle, Intent::Info) => Reply::plain(content::INFO).into(),
            (Phase::Idle, Intent::Unrecognized) => {
                Reply::plain(content::FALLBACK).with_keyboard(Keyboard::Modules).into()
            }
        }
    }

    fn restart(&self, session: &mut Session) -> Outcome {
        session.reset();
        log_user_action(session.user_id, "start", None);
        Reply::plain(content::WELCOME).with_keyboard(Keyboard::Modules).into()
    }

    fn show_module(&self, session: &mut Session, name: &str) -> Outcome {
        let Some(module) = self.catalog.get(name) else {
            return Reply::plain(content::FALLBACK).with_keyboard(Keyboard::Modules).into();
        };

        let completed = session.is_completed(&module.name);
        session.select_module(&module.name);
        log_user_action(session.user_id, "select_module", Some(&module.name));

        Reply::html(content::module_card(&module.name, &module.description, completed))
            .with_keyboard(Keyboard::ModuleOptions { completed })
            .into()
    }

    fn mark_done(&self, session: &mut Session) -> Outcome {
        match session.complete_current_module() {
            Some(name) => {
                log_user_action(session.user_id, "mark_done", Some(&name));
                Reply::html(content::module_done(&name))
                    .with_keyboard(Keyboard::Modules)
                    .into()
            }
            None => Reply::plain(content::SELECT_MODULE_FIRST).into(),
        }
    }

    fn back_to_menu(&self, session: &mut Session) -> Outcome {
        session.clear_current_module();
        Reply::plain(content::CHOOSE_MODULE).with_keyboard(Keyboard::Modules).into()
    }

    fn open_form(&self, session: &mut Session) -> Outcome {
        session.begin_form();
        log_user_action(session.user_id, "open_form", None);
        Reply::plain(content::ASK_NAME).with_keyboard(Keyboard::Remove).into()
    }

    fn accept_name(&self, session: &mut Session, inbound: &Inbound<'_>) -> Outcome {
        let name = inbound.text.map(str::trim).unwrap_or_default();
        if name.is_empty() {
            log_invalid_input(session.user_id, "name", inbound.text.unwrap_or_default());
            return Reply::plain(content::ASK_NAME_AGAIN).into();
        }

        session.await_phone(name.to_string());
        Reply::plain(content::ASK_PHONE).into()
    }

    fn accept_phone(&self, session: &mut Session, name: String, inbound: &Inbound<'_>) -> Outcome {
        let Some(phone) = inbound.text.and_then(normalize_phone) else {
            log_invalid_input(session.user_id, "phone", inbound.text.unwrap_or_default());
            return Reply::plain(content::INVALID_PHONE).into();
        };

        let lead = LeadSubmission::new(
            inbound.user_id,
            name,
            phone,
            inbound.handle.map(str::to_string),
        );

        // The session stays in AwaitingPhone until the lead is delivered.
        Outcome {
            reply: Reply::plain(content::lead_received(&lead.name, &lead.phone))
                .with_keyboard(Keyboard::Modules),
            lead: Some(lead),
        }
    }
}

//! Reply keyboard rendering

use teloxide::types::{KeyboardButton, KeyboardMarkup, KeyboardRemove, ReplyMarkup};
use crate::content;
use crate::models::ModuleCatalog;
use crate::router::Keyboard;

/// Render a router keyboard into Telegram reply markup
pub fn render(keyboard: &Keyboard, catalog: &ModuleCatalog) -> ReplyMarkup {
    match keyboard {
        Keyboard::Modules => ReplyMarkup::Keyboard(modules_keyboard(catalog)),
        Keyboard::ModuleOptions { completed } => ReplyMarkup::Keyboard(module_options_keyboard(*completed)),
        Keyboard::Remove => ReplyMarkup::KeyboardRemove(KeyboardRemove::new()),
    }
}

/// One module per row, then the form button, then help and info
pub fn modules_keyboard(catalog: &ModuleCatalog) -> KeyboardMarkup {
    let mut rows: Vec<Vec<KeyboardButton>> = catalog
        .names()
        .map(|name| vec![KeyboardButton::new(name)])
        .collect();

    rows.push(vec![KeyboardButton::new(content::BUTTON_SUBMIT_REQUEST)]);
    rows.push(vec![
        KeyboardButton::new(content::BUTTON_HELP),
        KeyboardButton::new(content::BUTTON_INFO),
    ]);

    KeyboardMarkup::new(rows).resize_keyboard()
}

/// Actions for an open module card
///
/// The "mark done" button is only offered until the module is completed.
pub fn module_options_keyboard(completed: bool) -> KeyboardMarkup {
    let mut rows = Vec::new();
    if !completed {
        rows.push(vec![KeyboardButton::new(content::BUTTON_MARK_DONE)]);
    }
    rows.push(vec![KeyboardButton::new(content::BUTTON_SUBMIT_REQUEST)]);
    rows.push(vec![KeyboardButton::new(content::BUTTON_BACK)]);

    KeyboardMarkup::new(rows).resize_keyboard()
}

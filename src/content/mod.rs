//! Bot texts and built-in course content
//!
//! Everything the user reads lives here: button labels, reply templates
//! and the default module catalog. Handlers never hardcode copy.

pub mod texts;

use crate::models::CourseModule;

pub use texts::*;

/// "Mark as done" button on a module card
pub const BUTTON_MARK_DONE: &str = "✅ Отметить как пройдено";
/// Return to the module list
pub const BUTTON_BACK: &str = "⬅ Назад";
/// Start the contact request form
pub const BUTTON_SUBMIT_REQUEST: &str = "📩 Оставить заявку";
pub const BUTTON_HELP: &str = "❓ Помощь";
pub const BUTTON_INFO: &str = "ℹ️ О боте";

/// Labels that are reserved for navigation and cannot be module names
pub const CONTROL_LABELS: [&str; 5] = [
    BUTTON_MARK_DONE,
    BUTTON_BACK,
    BUTTON_SUBMIT_REQUEST,
    BUTTON_HELP,
    BUTTON_INFO,
];

/// Built-in course used when the config file does not provide one
pub fn default_modules() -> Vec<CourseModule> {
    [
        (
            "1️⃣ Старт на Авито",
            "Регистрация, настройка профиля и первые шаги на площадке. \
             Разберём, как выглядит аккаунт, которому доверяют покупатели.",
        ),
        (
            "2️⃣ Поиск товара",
            "Как выбрать нишу, проверить спрос и найти поставщика, \
             не вкладывая лишних денег на старте.",
        ),
        (
            "3️⃣ Продающее объявление",
            "Заголовок, фото и описание, которые приводят покупателей. \
             Шаблоны и примеры удачных объявлений.",
        ),
        (
            "4️⃣ Работа с покупателями",
            "Быстрые ответы, скрипты переписки и работа с возражениями, \
             чтобы не терять заявки.",
        ),
        (
            "5️⃣ Масштабирование",
            "Продвижение, несколько аккаунтов и автоматизация: \
             как вырасти из подработки в системный бизнес.",
        ),
    ]
    .into_iter()
    .map(|(name, description)| CourseModule {
        name: name.to_string(),
        description: description.to_string(),
    })
    .collect()
}

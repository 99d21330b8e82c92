//! Reply templates

use teloxide::utils::html;

pub const WELCOME: &str = "Привет! 👋\nТы на старте своего пути в Авито-продажах 🚀\n\n\
    Здесь ты найдёшь пошаговые уроки, которые помогут начать и прокачать свой бизнес.\n\
    Выбери модуль ниже, чтобы начать обучение и быстро получить результат!";

pub const CHOOSE_MODULE: &str = "Выбери модуль для начала обучения:";

pub const SELECT_MODULE_FIRST: &str = "Пожалуйста, сначала выбери модуль из списка.";

pub const ASK_NAME: &str = "Отлично! Напиши, пожалуйста, своё имя.";

pub const ASK_NAME_AGAIN: &str = "Напиши, пожалуйста, своё имя текстом.";

pub const ASK_PHONE: &str = "Спасибо! Теперь напиши свой контактный номер телефона.";

pub const INVALID_PHONE: &str = "Номер телефона должен содержать только цифры \
    (возможно, с плюсом в начале). Попробуй ещё раз.";

pub const INFO: &str = "Этот бот помогает освоить Авито-продажи по шагам.\n\
    Здесь ты найдёшь уроки, советы и поддержку на пути к успешным продажам.\n\
    Проходи модули, отмечай успехи и задавай вопросы!";

pub const FALLBACK: &str = "Пожалуйста, выбери одну из кнопок ниже 👇";

/// Shown instead of a username when the sender has none
pub const NO_HANDLE: &str = "нет ника";

const STATUS_DONE: &str = "✅ Пройден";
const STATUS_PENDING: &str = "❌ Не пройден";

/// Module card in HTML
pub fn module_card(name: &str, description: &str, done: bool) -> String {
    let status = if done { STATUS_DONE } else { STATUS_PENDING };
    format!(
        "<b>{}</b>\n\n{}\n\nСтатус: {}",
        html::escape(name),
        html::escape(description),
        status
    )
}

/// Completion confirmation in HTML
pub fn module_done(name: &str) -> String {
    format!("Модуль <b>{}</b> отмечен как пройденный ✅", html::escape(name))
}

pub fn help(support_contact: &str) -> String {
    format!(
        "Если есть вопросы, пиши напрямую {} или в поддержку курса Aviclub.",
        support_contact
    )
}

pub fn lead_received(name: &str, phone: &str) -> String {
    format!(
        "Спасибо, {}! Мы получили твою заявку с номером: {}.\n\
         Скоро с тобой свяжется наш менеджер.",
        name, phone
    )
}

/// Notification text for the administrator
pub fn admin_lead(name: &str, phone: &str, handle: &str) -> String {
    format!(
        "📩 Новая заявка!\n\nИмя: {}\nТелефон: {}\nTelegram: {}\n\n\
         Свяжитесь с этим человеком как можно скорее.",
        name, phone, handle
    )
}

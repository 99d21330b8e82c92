//! Helper functions and utilities
//! 
//! This module contains common helper functions used throughout the application.

use std::sync::OnceLock;
use regex::Regex;

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+?[0-9]+$").expect("phone pattern is valid"))
}

/// Normalize a phone number as typed by the user
///
/// Surrounding whitespace is dropped, then the remainder must be ASCII
/// digits with at most one leading `+`. Returns the trimmed input (the `+`
/// is kept) or `None` when the format is invalid.
pub fn normalize_phone(input: &str) -> Option<String> {
    let phone = input.trim();
    if phone_pattern().is_match(phone) {
        Some(phone.to_string())
    } else {
        None
    }
}

/// Validate phone number format
pub fn is_valid_phone(phone: &str) -> bool {
    normalize_phone(phone).is_some()
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

//! Bot handlers module
//! 
//! Telegram-facing glue: converts teloxide messages into router input and
//! sends the router's replies back with the right keyboards.

pub mod keyboards;
pub mod messages;

// Re-export commonly used handler functions
pub use messages::handle_message;

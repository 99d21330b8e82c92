//! Message routing
//!
//! Turns an incoming message into a reply. Text is first classified into a
//! closed set of intents, then the `(phase, intent)` pair selects the
//! transition. Nothing here talks to Telegram.

pub mod dispatch;
pub mod intent;
pub mod reply;

pub use dispatch::{Inbound, Router};
pub use intent::{Command, Intent};
pub use reply::{Keyboard, Outcome, Reply, TextFormat};

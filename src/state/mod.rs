//! State management module
//! 
//! This module holds per-user conversation state and the in-memory store
//! that keeps it for the lifetime of the process.

pub mod session;
pub mod storage;

// Re-export commonly used state components
pub use session::{Phase, Session};
pub use storage::{SessionStore, StorageStats};

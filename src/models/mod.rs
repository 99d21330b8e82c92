//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod course;
pub mod lead;

// Re-export commonly used models
pub use course::{CourseModule, ModuleCatalog};
pub use lead::LeadSubmission;

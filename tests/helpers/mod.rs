//! Test helpers module
//!
//! This module provides utilities and helpers for testing the CourseBuddy application.
//! It includes a mock Telegram API server and builders for test messages.

#![allow(dead_code)]

pub mod telegram_mock;
pub mod simple_test;
pub mod test_data;

pub use telegram_mock::*;
pub use simple_test::*;
pub use test_data::*;

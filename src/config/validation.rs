//! Configuration validation module
//! 
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use std::collections::HashSet;
use crate::content;
use crate::utils::errors::{CourseBuddyError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_logging_config(&settings.logging)?;
    validate_course_config(&settings.course)?;
    
    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(CourseBuddyError::Config(
            "Bot token is required".to_string()
        ));
    }
    
    if config.admin_id == 0 {
        return Err(CourseBuddyError::Config(
            "Admin ID must be configured".to_string()
        ));
    }
    
    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(CourseBuddyError::Config(
            "Log level is required".to_string()
        ));
    }
    
    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(CourseBuddyError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }
    
    Ok(())
}

/// Validate the module catalog
///
/// Module names double as button labels, so they must be unique and must
/// not shadow any of the control buttons.
fn validate_course_config(config: &super::CourseConfig) -> Result<()> {
    if config.modules.is_empty() {
        return Err(CourseBuddyError::Config(
            "At least one course module is required".to_string()
        ));
    }

    let mut seen = HashSet::new();
    for module in &config.modules {
        let name = module.name.trim();
        if name.is_empty() {
            return Err(CourseBuddyError::Config(
                "Module name cannot be empty".to_string()
            ));
        }

        if !seen.insert(name) {
            return Err(CourseBuddyError::Config(
                format!("Duplicate module name: {}", name)
            ));
        }

        if content::CONTROL_LABELS.contains(&name) || name.starts_with('/') {
            return Err(CourseBuddyError::Config(
                format!("Module name collides with a control button: {}", name)
            ));
        }
    }
    
    Ok(())
}

//! App Configuration
//!
//! Behaviour switches read from the page's `todo-config` JSON element.
//! Every field is optional; missing fields fall back to defaults.

use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::render::RenderMode;

/// What to do with a submitted task whose trimmed text is empty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyTaskPolicy {
    /// Block the add and show the validation message
    #[default]
    Reject,
    /// Accept any text, including the empty string
    Allow,
}

/// What to do when a checkbox change targets a todo that no longer exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingCheckPolicy {
    /// Abort the cycle with `DomainError::NotFound`
    #[default]
    Fail,
    /// Log the miss and resync as if nothing happened
    Ignore,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown log level: {0}")]
    LogLevel(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoConfig {
    pub empty_task: EmptyTaskPolicy,
    pub missing_check: MissingCheckPolicy,
    pub render_mode: RenderMode,
    pub validation_message: String,
    pub log_level: String,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            empty_task: EmptyTaskPolicy::default(),
            missing_check: MissingCheckPolicy::default(),
            render_mode: RenderMode::default(),
            validation_message: "Please enter at least one character".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl TodoConfig {
    /// Parse and validate a JSON config document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| ConfigError::LogLevel(self.log_level.clone()))
    }

    /// Whether `task` passes the empty-task guard
    pub fn accepts_task(&self, task: &str) -> bool {
        match self.empty_task {
            EmptyTaskPolicy::Reject => !task.trim().is_empty(),
            EmptyTaskPolicy::Allow => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TodoConfig::default();
        assert_eq!(config.empty_task, EmptyTaskPolicy::Reject);
        assert_eq!(config.missing_check, MissingCheckPolicy::Fail);
        assert_eq!(config.render_mode, RenderMode::Keyed);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = TodoConfig::from_json(r#"{"render_mode":"full_rebuild","log_level":"debug"}"#).unwrap();
        assert_eq!(config.render_mode, RenderMode::FullRebuild);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
        assert_eq!(config.empty_task, EmptyTaskPolicy::Reject);
        assert_eq!(config.validation_message, TodoConfig::default().validation_message);
    }

    #[test]
    fn test_policies_from_json() {
        let config = TodoConfig::from_json(r#"{"empty_task":"allow","missing_check":"ignore"}"#).unwrap();
        assert_eq!(config.empty_task, EmptyTaskPolicy::Allow);
        assert_eq!(config.missing_check, MissingCheckPolicy::Ignore);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(TodoConfig::from_json("{not json"), Err(ConfigError::Parse(_))));
        assert!(matches!(
            TodoConfig::from_json(r#"{"render_mode":"sometimes"}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_bad_log_level() {
        let err = TodoConfig::from_json(r#"{"log_level":"loud"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::LogLevel(ref l) if l == "loud"));
    }

    #[test]
    fn test_accepts_task() {
        let reject = TodoConfig::default();
        assert!(reject.accepts_task("Buy milk"));
        assert!(!reject.accepts_task(""));
        assert!(!reject.accepts_task("   \t"));

        let allow = TodoConfig { empty_task: EmptyTaskPolicy::Allow, ..TodoConfig::default() };
        assert!(allow.accepts_task(""));
    }
}

//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box
//! against a local question service.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub timing: TimingConfig,
    #[serde(default)]
    pub ui: UiConfig,
    /// Key binding overrides, action name to key, e.g. `nextQuestion = "j"`.
    #[serde(default)]
    pub keys: HashMap<String, String>,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            timing: TimingConfig::default(),
            ui: UiConfig::default(),
            keys: HashMap::new(),
            session: SessionConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Where the question list comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_url")]
    pub url: String,
    #[serde(default = "default_fetch_timeout")]
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_source_url(),
            timeout_secs: default_fetch_timeout(),
        }
    }
}

/// Quiz pacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Seconds of total time budget granted per question.
    #[serde(default = "default_secs_per_question")]
    pub secs_per_question: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            secs_per_question: default_secs_per_question(),
        }
    }
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_key_hints: true,
        }
    }
}

/// Session transcript settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_session_dir")]
    pub dir: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dir: default_session_dir(),
        }
    }
}

/// Diagnostic logging settings. The TUI owns stdout, so log output goes to
/// daily files instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub dir: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
            dir: default_log_dir(),
        }
    }
}

fn default_source_url() -> String {
    "http://localhost:9000/questions".to_string()
}
fn default_fetch_timeout() -> u64 {
    10
}
fn default_secs_per_question() -> u64 {
    30
}
fn default_true() -> bool {
    true
}
fn default_session_dir() -> String {
    "~/.local/share/crabquiz/sessions".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/crabquiz/logs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.source.url, "http://localhost:9000/questions");
        assert_eq!(config.source.timeout_secs, 10);
        assert_eq!(config.timing.secs_per_question, 30);
        assert!(config.ui.show_key_hints);
        assert!(config.keys.is_empty());
        assert!(!config.session.enabled);
        assert!(!config.log.enabled);
    }

    #[test]
    fn test_partial_config_parses() {
        let config: AppConfig = toml::from_str(
            r#"
            [source]
            url = "https://quiz.example.com/api/questions"

            [timing]
            secs_per_question = 20

            [keys]
            nextQuestion = "j"

            [session]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(config.source.url, "https://quiz.example.com/api/questions");
        assert_eq!(config.source.timeout_secs, 10);
        assert_eq!(config.timing.secs_per_question, 20);
        assert_eq!(config.keys.get("nextQuestion").unwrap(), "j");
        assert!(config.session.enabled);
    }
}

//! User configuration at ~/.config/partner/config.toml.
//!
//! Every field has a default, so a missing or empty file yields a working
//! configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PartnerError, PartnerResult};
use crate::theme::ThemeMode;

const DEFAULT_REPLY_DELAY_MS: u64 = 1500;

const DEFAULT_GREETING: &str = "Hi there! I'm your PartnerGPT companion. How are you feeling today?";

const DEFAULT_RESPONSES: [&str; 5] = [
    "I understand how you feel. Would you like to talk more about that?",
    "Thanks for sharing that with me. How does that make you feel?",
    "I'm here for you. Tell me more about what's on your mind.",
    "That's interesting! I'd love to hear more about your perspective on this.",
    "I appreciate you opening up to me. Is there anything specific you'd like to discuss?",
];

fn default_reply_delay_ms() -> u64 {
    DEFAULT_REPLY_DELAY_MS
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

fn default_responses() -> Vec<String> {
    DEFAULT_RESPONSES.iter().map(|r| r.to_string()).collect()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartnerConfig {
    #[serde(default)]
    pub theme: ThemeMode,

    /// TOML file with `[[event]]` tables; seed events are used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_file: Option<String>,

    #[serde(default)]
    pub chat: ChatConfig,
}

/// Settings for the simulated assistant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    #[serde(default = "default_greeting")]
    pub greeting: String,

    #[serde(default = "default_responses")]
    pub responses: Vec<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        ChatConfig {
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            greeting: default_greeting(),
            responses: default_responses(),
        }
    }
}

impl ChatConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

impl PartnerConfig {
    pub fn config_path() -> PartnerResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PartnerError::Config("Could not determine config directory".into()))?
            .join("partner");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, falling back to defaults if absent.
    pub fn load() -> PartnerResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> PartnerResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), theme = %config.theme, "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> PartnerResult<Self> {
        let config: PartnerConfig =
            toml::from_str(content).map_err(|e| PartnerError::Config(e.to_string()))?;

        if config.chat.responses.is_empty() {
            return Err(PartnerError::Config(
                "chat.responses must contain at least one reply".into(),
            ));
        }

        Ok(config)
    }

    /// Events file with `~` expanded.
    pub fn events_path(&self) -> Option<PathBuf> {
        self.events_file
            .as_deref()
            .map(|p| PathBuf::from(shellexpand::tilde(p).as_ref()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> PartnerResult<()> {
        let contents = format!(
            "\
# partner configuration

# Colour theme: \"light\", \"dark\" or \"system\"
# theme = \"system\"

# Calendar events to show instead of the built-in samples:
# events_file = \"~/partner-events.toml\"

[chat]
# Delay before the assistant replies, in milliseconds:
# reply_delay_ms = {}

# greeting = \"{}\"
# responses = [\"I'm here for you.\"]
",
            DEFAULT_REPLY_DELAY_MS, DEFAULT_GREETING
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                PartnerError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| PartnerError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = PartnerConfig::parse("").unwrap();
        assert_eq!(config.theme, ThemeMode::System);
        assert_eq!(config.chat.reply_delay(), Duration::from_millis(1500));
        assert_eq!(config.chat.responses.len(), 5);
        assert!(config.events_path().is_none());
    }

    #[test]
    fn partial_chat_section_keeps_other_defaults() {
        let config = PartnerConfig::parse("theme = \"dark\"\n[chat]\nreply_delay_ms = 10\n").unwrap();
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.chat.reply_delay_ms, 10);
        assert_eq!(config.chat.greeting, DEFAULT_GREETING);
    }

    #[test]
    fn empty_response_pool_is_rejected() {
        let result = PartnerConfig::parse("[chat]\nresponses = []\n");
        assert!(matches!(result, Err(PartnerError::Config(_))));
    }

    #[test]
    fn invalid_theme_is_a_config_error() {
        assert!(matches!(
            PartnerConfig::parse("theme = \"sepia\""),
            Err(PartnerError::Config(_))
        ));
    }

    #[test]
    fn default_config_file_parses_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        PartnerConfig::create_default_config(&path).unwrap();
        let config = PartnerConfig::load_from(&path).unwrap();

        assert_eq!(config.theme, ThemeMode::System);
        assert_eq!(config.chat.responses.len(), 5);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PartnerConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.chat.reply_delay_ms, DEFAULT_REPLY_DELAY_MS);
    }

    #[test]
    fn absolute_events_path_is_kept() {
        let config = PartnerConfig::parse("events_file = \"/tmp/events.toml\"").unwrap();
        assert_eq!(config.events_path(), Some(PathBuf::from("/tmp/events.toml")));
    }
}

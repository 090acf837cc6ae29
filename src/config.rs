use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::ai::Tone;
use crate::constants::{
    APP_NAME, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Completion provider settings
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Completion provider configuration (Groq by default)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Chat-completion endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Model to use (default: llama-3.1-8b-instant)
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens for the reply completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Ask the provider for JSON-object output
    #[serde(default = "default_true")]
    pub json_mode: bool,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            json_mode: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeVariant,
    /// Tone preselected when the session starts
    #[serde(default)]
    pub default_tone: Tone,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeVariant {
    #[default]
    Dark,
    #[serde(rename = "high-contrast")]
    HighContrast,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_true() -> bool {
    true
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join(APP_NAME);
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, falling back to defaults when it does not exist
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let dir = path
            .parent()
            .context("Config path has no parent directory")?;

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.ai.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.ai.model, "llama-3.1-8b-instant");
        assert_eq!(config.ai.temperature, 0.7);
        assert_eq!(config.ai.max_tokens, 1024);
        assert!(config.ai.json_mode);
        assert_eq!(config.ui.theme, ThemeVariant::Dark);
        assert_eq!(config.ui.default_tone, Tone::AutoDetect);
    }

    #[test]
    fn test_partial_ai_section() {
        let toml = r#"
            [ai]
            model = "llama-3.3-70b-versatile"
            json_mode = false
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.ai.model, "llama-3.3-70b-versatile");
        assert!(!config.ai.json_mode);
        assert_eq!(config.ai.max_tokens, 1024);
        assert_eq!(config.ai.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_ui_section() {
        let toml = r#"
            [ui]
            theme = "high-contrast"
            default_tone = "friendly"
        "#;

        let config = Config::parse(toml).unwrap();
        assert_eq!(config.ui.theme, ThemeVariant::HighContrast);
        assert_eq!(config.ui.default_tone, Tone::Friendly);
    }

    #[test]
    fn test_invalid_tone_rejected() {
        let toml = r#"
            [ui]
            default_tone = "sarcastic"
        "#;

        assert!(Config::parse(toml).is_err());
    }

    #[test]
    fn test_roundtrip_serialization() {
        let mut config = Config::default();
        config.ai.temperature = 0.2;
        config.ui.default_tone = Tone::Persuasive;

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed = Config::parse(&text).unwrap();
        assert_eq!(parsed.ai.temperature, 0.2);
        assert_eq!(parsed.ui.default_tone, Tone::Persuasive);
    }
}

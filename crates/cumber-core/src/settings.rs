//! Settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::generator::Diversity;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

/// Inclusive bounds for `generator.count`.
pub const MAX_COUNT: u16 = 9999;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub dictionary: DictionarySettings,
    pub generator: GeneratorSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DictionarySettings {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    pub max_draws: usize,
    pub count: u16,
    pub diversity: u8,
}

impl GeneratorSettings {
    pub fn diversity(&self) -> Diversity {
        // Range is checked in `validate`.
        Diversity::try_from(self.diversity).unwrap_or_default()
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    fn invalid(field: &str, reason: &str) -> SettingsError {
        SettingsError::InvalidValue {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    if s.dictionary.url.trim().is_empty() {
        return Err(invalid("dictionary.url", "must not be empty"));
    }
    if !(1..=MAX_COUNT).contains(&s.generator.count) {
        return Err(invalid("generator.count", "must be in 1..=9999"));
    }
    if Diversity::try_from(s.generator.diversity).is_err() {
        return Err(invalid("generator.diversity", "must be 0 or 1"));
    }

    Ok(())
}

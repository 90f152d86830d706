//! Application settings structs, defaults and TOML persistence.
//!
//! All structs implement `Serialize`, `Deserialize`, `Default` and `Clone`
//! so they can be round-tripped through TOML files and shared across threads.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use super::AppPaths;

/// Environment variable that fills any `api_key` left unset in the file.
pub const API_KEY_ENV: &str = "POLYGLOT_API_KEY";

// ---------------------------------------------------------------------------
// TranslationConfig
// ---------------------------------------------------------------------------

/// Settings for the translation gateway.
///
/// The gateway speaks the OpenAI chat-completions wire format, so any
/// compatible provider (Ollama, OpenAI, Groq, LM Studio …) can back it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    /// When `false` every translation call fails with a "disabled" cause.
    pub enabled: bool,
    /// Base URL of the API endpoint.
    ///
    /// - Ollama default: `http://localhost:11434`
    /// - OpenAI: `https://api.openai.com`
    pub base_url: String,
    /// API key, `None` for local providers.
    pub api_key: Option<String>,
    /// Model identifier sent to the API (e.g. `"qwen2.5:3b"`, `"gpt-4o-mini"`).
    pub model: String,
    /// Sampling temperature (0.0 – 1.0).  Lower = more literal.
    pub temperature: f32,
    /// Maximum seconds to wait for a response before timing out.
    pub timeout_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: "http://localhost:11434".into(),
            api_key: None,
            model: "qwen2.5:3b".into(),
            temperature: 0.2,
            timeout_secs: 20,
        }
    }
}

// ---------------------------------------------------------------------------
// TranscriptionConfig
// ---------------------------------------------------------------------------

/// Settings for the remote speech-to-text service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranscriptionConfig {
    /// Base URL of an OpenAI-compatible `/v1/audio/transcriptions` endpoint.
    pub base_url: String,
    /// API key, `None` for local servers.
    pub api_key: Option<String>,
    /// Model identifier (e.g. `"whisper-1"`).
    pub model: String,
    /// Spoken language as an ISO-639-1 code, or `"auto"` to let the service
    /// detect it.
    pub language: String,
    /// Maximum seconds to wait for a transcript.
    pub timeout_secs: u64,
}

impl Default for TranscriptionConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".into(),
            api_key: None,
            model: "whisper-1".into(),
            language: "auto".into(),
            timeout_secs: 60,
        }
    }
}

// ---------------------------------------------------------------------------
// SynthesisConfig
// ---------------------------------------------------------------------------

/// Settings for the remote text-to-speech service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Base URL of an OpenAI-compatible `/v1/audio/speech` endpoint.
    pub base_url: String,
    /// API key, `None` for local servers.
    pub api_key: Option<String>,
    /// Model identifier (e.g. `"tts-1"`).
    pub model: String,
    /// Voice preset name understood by the provider.
    pub voice: String,
    /// Language used when the caller does not pass one.
    pub default_language: String,
    /// Maximum seconds to wait for the audio payload.
    pub timeout_secs: u64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".into(),
            api_key: None,
            model: "tts-1".into(),
            voice: "alloy".into(),
            default_language: "en".into(),
            timeout_secs: 30,
        }
    }
}

// ---------------------------------------------------------------------------
// NormalizerConfig
// ---------------------------------------------------------------------------

/// Settings for the text normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizerConfig {
    /// Working language of the stopword list.  Only `"en"` ships a list;
    /// anything else falls back to English.
    pub language: String,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            language: "en".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// AppConfig  (top-level)
// ---------------------------------------------------------------------------

/// Top-level application configuration, serialised as `settings.toml`.
///
/// # Persistence
///
/// ```rust,no_run
/// use polyglot_assistant::config::AppConfig;
///
/// // Load (returns Default when file is missing)
/// let config = AppConfig::load().unwrap();
///
/// // Modify and save
/// // config.save().unwrap();
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Translation gateway settings.
    pub translation: TranslationConfig,
    /// Speech-to-text service settings.
    pub transcription: TranscriptionConfig,
    /// Text-to-speech service settings.
    pub synthesis: SynthesisConfig,
    /// Text normalizer settings.
    pub normalizer: NormalizerConfig,
}

impl AppConfig {
    /// Load configuration from the platform-appropriate `settings.toml`.
    ///
    /// Returns `Ok(AppConfig::default())` when the file does not exist yet
    /// so callers never need to special-case a missing file.
    pub fn load() -> Result<Self> {
        Self::load_from(&AppPaths::resolve(None).settings_file)
    }

    /// Load from an explicit path (useful for tests).
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to the platform-appropriate `settings.toml`,
    /// creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&AppPaths::resolve(None).settings_file)
    }

    /// Save to an explicit path (useful for tests).
    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Fill every unset `api_key` from [`API_KEY_ENV`].
    pub fn apply_env(&mut self) {
        self.apply_api_key(std::env::var(API_KEY_ENV).ok());
    }

    fn apply_api_key(&mut self, key: Option<String>) {
        let Some(key) = key.filter(|k| !k.trim().is_empty()) else {
            return;
        };
        for slot in [
            &mut self.translation.api_key,
            &mut self.transcription.api_key,
            &mut self.synthesis.api_key,
        ] {
            if slot.as_deref().map_or(true, str::is_empty) {
                *slot = Some(key.clone());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn round_trip_toml() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("settings.toml");

        let original = AppConfig::default();
        original.save_to(&path).expect("save");

        let loaded = AppConfig::load_from(&path).expect("load");

        assert_eq!(original.translation.base_url, loaded.translation.base_url);
        assert_eq!(original.translation.model, loaded.translation.model);
        assert_eq!(original.translation.timeout_secs, loaded.translation.timeout_secs);
        assert_eq!(original.transcription.model, loaded.transcription.model);
        assert_eq!(original.transcription.language, loaded.transcription.language);
        assert_eq!(original.synthesis.voice, loaded.synthesis.voice);
        assert_eq!(
            original.synthesis.default_language,
            loaded.synthesis.default_language
        );
        assert_eq!(original.normalizer.language, loaded.normalizer.language);
    }

    /// `load_from` on a non-existent path must return `Default` without error.
    #[test]
    fn load_missing_returns_default() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("nonexistent.toml");

        let config = AppConfig::load_from(&path).expect("should not error");
        assert_eq!(config.translation.model, "qwen2.5:3b");
        assert_eq!(config.synthesis.default_language, "en");
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[translation]\nmodel = \"gpt-4o-mini\"\n").unwrap();

        let config = AppConfig::load_from(&path).expect("load");
        assert_eq!(config.translation.model, "gpt-4o-mini");
        assert_eq!(config.translation.base_url, "http://localhost:11434");
        assert_eq!(config.transcription.model, "whisper-1");
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "translation = [[[").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn default_values() {
        let cfg = AppConfig::default();

        assert!(cfg.translation.enabled);
        assert!(cfg.translation.api_key.is_none());
        assert_eq!(cfg.transcription.language, "auto");
        assert_eq!(cfg.synthesis.model, "tts-1");
        assert_eq!(cfg.normalizer.language, "en");
    }

    #[test]
    fn api_key_fills_only_unset_slots() {
        let mut cfg = AppConfig::default();
        cfg.synthesis.api_key = Some("sk-own".into());
        cfg.transcription.api_key = Some(String::new());

        cfg.apply_api_key(Some("sk-env".into()));

        assert_eq!(cfg.translation.api_key.as_deref(), Some("sk-env"));
        assert_eq!(cfg.transcription.api_key.as_deref(), Some("sk-env"));
        assert_eq!(cfg.synthesis.api_key.as_deref(), Some("sk-own"));
    }

    #[test]
    fn blank_env_key_is_ignored() {
        let mut cfg = AppConfig::default();
        cfg.apply_api_key(Some("  ".into()));
        assert!(cfg.translation.api_key.is_none());
    }
}

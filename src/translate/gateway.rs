//! Core `TranslationGateway` trait and `ApiTranslator` implementation.
//!
//! `ApiTranslator` calls any OpenAI-compatible `/v1/chat/completions` endpoint
//! such as Ollama (OpenAI mode), OpenAI, Groq, LM Studio or vLLM.
//! All connection details come from [`TranslationConfig`]; nothing is
//! hardcoded.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::TranslationConfig;
use crate::language::{self, LanguageCode};
use crate::translate::prompt::PromptBuilder;

// ---------------------------------------------------------------------------
// TranslationError
// ---------------------------------------------------------------------------

/// Errors that can occur during translation.
#[derive(Debug, Clone, Error)]
pub enum TranslationError {
    /// Translation is switched off in the configuration.
    #[error("translation is disabled in the configuration")]
    Disabled,

    /// The target language code is not recognised.
    #[error("invalid destination language: {0:?}")]
    UnsupportedLanguage(String),

    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("translation request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("translation service returned {status}: {body}")]
    Service { status: u16, body: String },

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse translation response: {0}")]
    Parse(String),

    /// The service returned no usable text.
    #[error("translation service returned an empty response")]
    EmptyResponse,
}

impl From<reqwest::Error> for TranslationError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TranslationError::Timeout
        } else {
            TranslationError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// TranslationGateway trait
// ---------------------------------------------------------------------------

/// Async interface to an external translation capability.
///
/// Implementors must be `Send + Sync` so they can be shared across requests
/// (e.g. wrapped in `Arc<dyn TranslationGateway>`).  Any text is accepted,
/// including text that is itself a translation.
#[async_trait]
pub trait TranslationGateway: Send + Sync {
    async fn translate(&self, text: &str, target: &LanguageCode)
        -> Result<String, TranslationError>;
}

// ---------------------------------------------------------------------------
// ApiTranslator
// ---------------------------------------------------------------------------

/// Translates through an OpenAI-compatible chat-completions endpoint.
///
/// The target code is checked against the ISO 639 registry first; unknown
/// codes fail with [`TranslationError::UnsupportedLanguage`] without any
/// network traffic.
pub struct ApiTranslator {
    client: reqwest::Client,
    config: TranslationConfig,
    prompt_builder: PromptBuilder,
}

impl ApiTranslator {
    /// Build an `ApiTranslator` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.  A default client is used if the builder fails.
    pub fn from_config(config: &TranslationConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
            prompt_builder: PromptBuilder::new(),
        }
    }
}

#[async_trait]
impl TranslationGateway for ApiTranslator {
    /// The `Authorization: Bearer …` header is attached only when
    /// `config.api_key` is a non-empty string.
    async fn translate(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        if !self.config.enabled {
            return Err(TranslationError::Disabled);
        }
        let language = language::english_name(target.as_str())
            .ok_or_else(|| TranslationError::UnsupportedLanguage(target.to_string()))?;

        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let (system_msg, user_msg) = self.prompt_builder.build_chat(text, language);
        let url = format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let body = serde_json::json!({
            "model":       self.config.model,
            "messages": [
                { "role": "system", "content": system_msg },
                { "role": "user",   "content": user_msg   }
            ],
            "stream":      false,
            "temperature": self.config.temperature
        });

        let mut req = self.client.post(&url).json(&body);

        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        log::debug!("translate: {} chars → {}", text.chars().count(), target);
        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TranslationError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslationError::Parse(e.to_string()))?;

        let translated = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(TranslationError::EmptyResponse)?
            .trim()
            .to_string();

        if translated.is_empty() {
            return Err(TranslationError::EmptyResponse);
        }

        Ok(translated)
    }
}

// ---------------------------------------------------------------------------
// MockTranslator  (test-only)
// ---------------------------------------------------------------------------

/// Test double that records every call and answers `"[<code>] <text>"`, or
/// fails with a fixed error.
#[cfg(test)]
pub struct MockTranslator {
    failure: Option<TranslationError>,
    calls: std::sync::Mutex<Vec<(String, String)>>,
}

#[cfg(test)]
impl MockTranslator {
    pub fn ok() -> Self {
        Self {
            failure: None,
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn err(error: TranslationError) -> Self {
        Self {
            failure: Some(error),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// `(text, target)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl TranslationGateway for MockTranslator {
    async fn translate(
        &self,
        text: &str,
        target: &LanguageCode,
    ) -> Result<String, TranslationError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), target.to_string()));
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(format!("[{target}] {text}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

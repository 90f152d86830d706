//! Remote speech synthesis over an OpenAI-compatible audio API.
//!
//! [`HttpSynthesizer`] posts the text to `{base_url}/v1/audio/speech`, then
//! writes the returned MP3 bytes to a persisted temporary file.  The file is
//! not cleaned up; its path is handed to the caller.

use std::io::Write;

use async_trait::async_trait;

use crate::config::SynthesisConfig;
use crate::language::{self, LanguageCode};
use crate::media::AudioHandle;
use crate::tts::synthesizer::{SpeechSynthesizer, SynthesisError};

pub struct HttpSynthesizer {
    client: reqwest::Client,
    config: SynthesisConfig,
}

impl HttpSynthesizer {
    /// Build an `HttpSynthesizer` from application config.
    pub fn from_config(config: &SynthesisConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/audio/speech", self.config.base_url.trim_end_matches('/'))
    }
}

/// Write `bytes` to a new `.mp3` temp file and keep it on disk.
fn persist_mp3(bytes: &[u8]) -> Result<AudioHandle, SynthesisError> {
    let mut file = tempfile::Builder::new()
        .prefix("polyglot-tts-")
        .suffix(".mp3")
        .tempfile()?;
    file.write_all(bytes)?;
    file.flush()?;
    let (_, path) = file.keep().map_err(|e| SynthesisError::Io(e.to_string()))?;
    Ok(AudioHandle::new(path))
}

#[async_trait]
impl SpeechSynthesizer for HttpSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<AudioHandle, SynthesisError> {
        let code = if language.is_unspecified() {
            LanguageCode::new(&self.config.default_language)
        } else {
            language.clone()
        };
        if language::resolve(code.as_str()).is_none() {
            return Err(SynthesisError::UnsupportedLanguage(code.to_string()));
        }

        let body = serde_json::json!({
            "model":           self.config.model,
            "input":           text,
            "voice":           self.config.voice,
            "language":        code.as_str(),
            "response_format": "mp3"
        });

        let mut req = self.client.post(self.endpoint()).json(&body);
        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        log::debug!("tts: synthesising {} chars in {code}", text.chars().count());
        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SynthesisError::Service {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        let handle = tokio::task::spawn_blocking(move || persist_mp3(&bytes))
            .await
            .map_err(|e| SynthesisError::Io(e.to_string()))??;

        log::debug!("tts: wrote {handle}");
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config() -> SynthesisConfig {
        SynthesisConfig {
            base_url: "http://127.0.0.1:9".into(),
            timeout_secs: 2,
            ..SynthesisConfig::default()
        }
    }

    #[tokio::test]
    async fn invalid_language_is_rejected_before_any_request() {
        let s = HttpSynthesizer::from_config(&make_config());
        let err = s.synthesize("hi", &"xx".into()).await.unwrap_err();
        assert!(matches!(err, SynthesisError::UnsupportedLanguage(ref c) if c == "xx"));
    }

    #[tokio::test]
    async fn unreachable_service_is_a_request_error() {
        let s = HttpSynthesizer::from_config(&make_config());
        let err = s.synthesize("hello", &"en".into()).await.unwrap_err();
        assert!(matches!(
            err,
            SynthesisError::Request(_) | SynthesisError::Timeout
        ));
    }

    #[test]
    fn persisted_file_outlives_the_builder() {
        let handle = persist_mp3(b"ID3fake").unwrap();
        assert!(handle.path().exists());
        assert_eq!(handle.path().extension().unwrap(), "mp3");
        assert_eq!(std::fs::read(handle.path()).unwrap(), b"ID3fake");
        std::fs::remove_file(handle.path()).unwrap();
    }
}

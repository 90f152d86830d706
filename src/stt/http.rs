//! Remote transcription over an OpenAI-compatible audio API.
//!
//! [`HttpTranscriber`] uploads the recording as `multipart/form-data` to
//! `{base_url}/v1/audio/transcriptions` and reads the `text` field of the JSON
//! reply.  Works with OpenAI, Groq, and self-hosted whisper servers that
//! expose the same route.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::config::TranscriptionConfig;
use crate::media::AudioHandle;
use crate::stt::transcriber::{SpeechTranscriber, TranscriptionError};

pub struct HttpTranscriber {
    client: reqwest::Client,
    config: TranscriptionConfig,
}

impl HttpTranscriber {
    /// Build an `HttpTranscriber` from application config.
    pub fn from_config(config: &TranscriptionConfig) -> Self {
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
        format!(
            "{}/v1/audio/transcriptions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn build_form(&self, audio: &AudioHandle, data: Vec<u8>) -> Result<Form, TranscriptionError> {
        let part = Part::bytes(data)
            .file_name(audio.file_name())
            .mime_str(audio.mime_type())
            .map_err(|e| TranscriptionError::Other(e.to_string()))?;

        let mut form = Form::new()
            .text("model", self.config.model.clone())
            .text("response_format", "json")
            .part("file", part);

        let language = self.config.language.trim();
        if !language.is_empty() && language != "auto" {
            form = form.text("language", language.to_string());
        }
        Ok(form)
    }
}

#[async_trait]
impl SpeechTranscriber for HttpTranscriber {
    async fn transcribe(&self, audio: &AudioHandle) -> Result<String, TranscriptionError> {
        let data = tokio::fs::read(audio.path())
            .await
            .map_err(|e| TranscriptionError::AudioRead(format!("{audio}: {e}")))?;
        if data.is_empty() {
            return Err(TranscriptionError::AudioRead(format!("{audio}: file is empty")));
        }

        log::debug!("stt: uploading {} bytes from {audio}", data.len());
        let form = self.build_form(audio, data)?;

        let mut req = self.client.post(self.endpoint()).multipart(form);
        let key = self.config.api_key.as_deref().unwrap_or("");
        if !key.is_empty() {
            req = req.bearer_auth(key);
        }

        let response = req.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let cause = format!("service returned {status}: {body}");
            return Err(if status.is_server_error() || status.as_u16() == 429 {
                TranscriptionError::ServiceUnavailable(cause)
            } else {
                TranscriptionError::Other(cause)
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranscriptionError::Other(format!("malformed response: {e}")))?;

        let text = json["text"].as_str().unwrap_or_default().trim().to_string();
        if text.is_empty() {
            return Err(TranscriptionError::Unintelligible);
        }

        log::debug!("stt: transcript = {text:?}");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_config() -> TranscriptionConfig {
        TranscriptionConfig {
            base_url: "http://127.0.0.1:9/".into(),
            timeout_secs: 2,
            ..TranscriptionConfig::default()
        }
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let t = HttpTranscriber::from_config(&make_config());
        assert_eq!(t.endpoint(), "http://127.0.0.1:9/v1/audio/transcriptions");
    }

    #[tokio::test]
    async fn missing_file_is_audio_read_error() {
        let t = HttpTranscriber::from_config(&make_config());
        let err = t
            .transcribe(&AudioHandle::new("/nonexistent/recording.wav"))
            .await
            .unwrap_err();
        assert!(matches!(err, TranscriptionError::AudioRead(ref m) if m.contains("recording.wav")));
    }

    #[tokio::test]
    async fn empty_file_is_audio_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.wav");
        std::fs::write(&path, b"").unwrap();

        let t = HttpTranscriber::from_config(&make_config());
        let err = t.transcribe(&AudioHandle::new(&path)).await.unwrap_err();
        assert!(matches!(err, TranscriptionError::AudioRead(_)));
    }

    #[tokio::test]
    async fn unreachable_service_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.wav");
        std::fs::write(&path, b"RIFF0000WAVE").unwrap();

        let t = HttpTranscriber::from_config(&make_config());
        let err = t.transcribe(&AudioHandle::new(&path)).await.unwrap_err();
        assert!(matches!(err, TranscriptionError::ServiceUnavailable(_)));
    }
}

//! Core text-to-speech trait and error type.

use async_trait::async_trait;
use thiserror::Error;

use crate::language::LanguageCode;
use crate::media::AudioHandle;

// ---------------------------------------------------------------------------
// SynthesisError
// ---------------------------------------------------------------------------

/// Errors that can occur while synthesising speech.
#[derive(Debug, Clone, Error)]
pub enum SynthesisError {
    /// The language code is not recognised.
    #[error("language not supported: {0:?}")]
    UnsupportedLanguage(String),

    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("speech synthesis request timed out")]
    Timeout,

    /// The service answered with a non-success status.
    #[error("speech service returned {status}: {body}")]
    Service { status: u16, body: String },

    /// The service returned no audio bytes.
    #[error("speech service returned no audio")]
    EmptyAudio,

    /// Writing the audio artefact failed.
    #[error("could not write audio file: {0}")]
    Io(String),
}

impl From<reqwest::Error> for SynthesisError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SynthesisError::Timeout
        } else {
            SynthesisError::Request(e.to_string())
        }
    }
}

impl From<std::io::Error> for SynthesisError {
    fn from(e: std::io::Error) -> Self {
        SynthesisError::Io(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// SpeechSynthesizer trait
// ---------------------------------------------------------------------------

/// Async interface to an external text-to-speech capability.
///
/// On success the returned [`AudioHandle`] points at a file that the caller
/// now owns.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<AudioHandle, SynthesisError>;
}

// ---------------------------------------------------------------------------
// MockSynthesizer  (test-only)
// ---------------------------------------------------------------------------

/// Test double that records calls and hands out fake paths, or fails.
#[cfg(test)]
pub struct MockSynthesizer {
    failure: Option<SynthesisError>,
    calls: std::sync::Mutex<Vec<(String, String)>>,
}

#[cfg(test)]
impl MockSynthesizer {
    pub fn ok() -> Self {
        Self {
            failure: None,
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn err(error: SynthesisError) -> Self {
        Self {
            failure: Some(error),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// `(text, language)` pairs in call order.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(
        &self,
        text: &str,
        language: &LanguageCode,
    ) -> Result<AudioHandle, SynthesisError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push((text.to_string(), language.to_string()));
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(AudioHandle::new(format!("/tmp/mock-tts-{}.mp3", calls.len()))),
        }
    }
}

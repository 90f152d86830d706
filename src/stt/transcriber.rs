//! Core speech-to-text trait and error type.
//!
//! [`SpeechTranscriber`] is the public interface used by the pipeline.  It is
//! object-safe and `Send + Sync` so it can be held behind an
//! `Arc<dyn SpeechTranscriber>`.
//!
//! [`MockTranscriber`] (available under `#[cfg(test)]`) returns a
//! pre-configured response and counts calls, so the pipeline can be tested
//! without a network service.

use async_trait::async_trait;
use thiserror::Error;

use crate::media::AudioHandle;

// ---------------------------------------------------------------------------
// TranscriptionError
// ---------------------------------------------------------------------------

/// All errors that can arise from the transcription adapter.
#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    /// The service heard no recognisable speech.
    #[error("speech was unintelligible")]
    Unintelligible,

    /// The service could not be reached, timed out, or is overloaded.
    #[error("{0}")]
    ServiceUnavailable(String),

    /// The audio file could not be read.
    #[error("could not read audio file: {0}")]
    AudioRead(String),

    /// Any other failure reported by the service.
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TranscriptionError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() || e.is_connect() {
            TranscriptionError::ServiceUnavailable(e.to_string())
        } else {
            TranscriptionError::Other(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// SpeechTranscriber trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe interface for speech-to-text services.
///
/// # Contract
///
/// - Returns the transcript of the recording behind `audio`.
/// - Returns `Err(TranscriptionError::Unintelligible)` when no speech could
///   be recognised.
/// - Never retries; a failure is reported once.
#[async_trait]
pub trait SpeechTranscriber: Send + Sync {
    async fn transcribe(&self, audio: &AudioHandle) -> Result<String, TranscriptionError>;
}

// Compile-time assertion: Box<dyn SpeechTranscriber> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn SpeechTranscriber>) {}
};

// ---------------------------------------------------------------------------
// MockTranscriber  (test-only)
// ---------------------------------------------------------------------------

/// A test double that returns a pre-configured response.
#[cfg(test)]
pub struct MockTranscriber {
    response: Result<String, TranscriptionError>,
    calls: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl MockTranscriber {
    /// Create a mock that always returns `Ok(text)`.
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            calls: Default::default(),
        }
    }

    /// Create a mock that always returns `Err(error)`.
    pub fn err(error: TranscriptionError) -> Self {
        Self {
            response: Err(error),
            calls: Default::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
#[async_trait]
impl SpeechTranscriber for MockTranscriber {
    async fn transcribe(&self, _audio: &AudioHandle) -> Result<String, TranscriptionError> {
        self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.response.clone()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

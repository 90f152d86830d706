//! Speech-to-text adapter.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │           SpeechTranscriber (trait)             │
//! │                                                 │
//! │   AudioHandle ──▶ HttpTranscriber               │
//! │                    │  multipart upload          │
//! │                    ▼                            │
//! │          POST /v1/audio/transcriptions          │
//! │                    │                            │
//! │                    ▼                            │
//! │        Ok(text) | Err(TranscriptionError)       │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use polyglot_assistant::config::AppConfig;
//! use polyglot_assistant::media::AudioHandle;
//! use polyglot_assistant::stt::{HttpTranscriber, SpeechTranscriber};
//!
//! # async fn example() {
//! let config = AppConfig::default();
//! let stt = HttpTranscriber::from_config(&config.transcription);
//! let text = stt.transcribe(&AudioHandle::new("question.wav")).await.unwrap();
//! println!("{text}");
//! # }
//! ```

pub mod http;
pub mod transcriber;

// ── Public re-exports ──────────────────────────────────────────────────────

pub use http::HttpTranscriber;
pub use transcriber::{SpeechTranscriber, TranscriptionError};

// test-only re-export so the pipeline test module can import MockTranscriber
// without `use crate::stt::transcriber::MockTranscriber`.
#[cfg(test)]
pub use transcriber::MockTranscriber;

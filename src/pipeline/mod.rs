//! Request processing pipeline.
//!
//! This module wires the speech, translation, normalization and command
//! components into one request/response flow.
//!
//! # Architecture
//!
//! ```text
//! ProcessRequest { text | audio, mode, target_language, output_language }
//!        │
//!        ▼
//! PipelineOrchestrator::process()
//!        │
//!        ├─ SpeechTranscriber    (audio only)
//!        ├─ TextNormalizer
//!        ├─ TranslationGateway   (Translation mode, output language)
//!        └─ CommandInterpreter   (Voice Command mode)
//!        │
//!        ▼
//! PipelineResult { text, audio_path: None }
//!
//! PipelineOrchestrator::synthesize(text, language) ─▶ SpeechSynthesizer
//! ```
//!
//! # Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use polyglot_assistant::config::AppConfig;
//! use polyglot_assistant::pipeline::{Mode, PipelineOrchestrator, ProcessRequest};
//!
//! #[tokio::main]
//! async fn main() {
//!     let assistant = Arc::new(PipelineOrchestrator::from_config(&AppConfig::default()));
//!
//!     let request = ProcessRequest::text("What time is it?", Mode::VoiceCommand)
//!         .with_output_language("fr");
//!     let result = assistant.process(&request).await;
//!     println!("{}", result.text);
//!
//!     if let Some(audio) = assistant.synthesize(&result.text, &"fr".into()).await {
//!         println!("speech saved to {audio}");
//!     }
//! }
//! ```

pub mod runner;
pub mod types;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use runner::{PipelineError, PipelineOrchestrator, DEFAULT_SPEECH_LANGUAGE};
pub use types::{Example, InputSource, Mode, PipelineResult, ProcessRequest, EXAMPLES};

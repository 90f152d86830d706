//! Pipeline orchestrator: input → (STT) → normalize → mode dispatch → (re-translate).
//!
//! [`PipelineOrchestrator`] owns one handle to each external capability and is
//! stateless between calls, so a single instance can serve concurrent
//! requests from behind an `Arc`.
//!
//! # Pipeline flow
//!
//! ```text
//! ProcessRequest
//!   ├─ audio present → transcriber.transcribe   (failure ends the request)
//!   ├─ blank text    → NoInput
//!   ├─ normalizer.normalize                     (always, even if unused)
//!   └─ mode
//!        ├─ Translation   → translator(original text, target)   [in-band errors]
//!        ├─ Voice Command → commands.interpret(normalized)
//!        └─ Transcription → "Original: …\nProcessed: …"
//!             └─ output language set → translator(result, output) [in-band errors]
//! ```
//!
//! Speech synthesis is a separate step, see [`PipelineOrchestrator::synthesize`].

use std::sync::Arc;

use thiserror::Error;

use crate::command::CommandInterpreter;
use crate::config::AppConfig;
use crate::language::LanguageCode;
use crate::media::AudioHandle;
use crate::nlp::TextNormalizer;
use crate::stt::{HttpTranscriber, SpeechTranscriber, TranscriptionError};
use crate::translate::{ApiTranslator, TranslationGateway};
use crate::tts::{HttpSynthesizer, SpeechSynthesizer};

use super::types::{InputSource, Mode, PipelineResult, ProcessRequest};

/// Language used for speech output when the caller gives none.
pub const DEFAULT_SPEECH_LANGUAGE: &str = "en";

// ---------------------------------------------------------------------------
// PipelineError
// ---------------------------------------------------------------------------

/// Errors that end a request early.
///
/// The `Display` text of every variant is the message shown to the user.
/// Translation failures are not listed here: they are reported inside the
/// successful result text.
#[derive(Debug, Clone, Error)]
pub enum PipelineError {
    /// Neither text nor audio carried any content.
    #[error("No input provided. Please enter text or upload an audio file.")]
    NoInput,

    /// The recording could not be turned into text.
    #[error("{}", transcription_message(.0))]
    Transcription(TranscriptionError),

    /// Translation mode was selected without a target language.
    #[error("Please specify a target language for translation (e.g., 'es' for Spanish, 'fr' for French).")]
    MissingTargetLanguage,

    /// The mode selection is not one of the known modes.
    #[error("Please select a valid feature (Translation, Voice Command, or Transcription).")]
    InvalidMode(String),
}

fn transcription_message(e: &TranscriptionError) -> String {
    match e {
        TranscriptionError::Unintelligible => {
            "Could not understand the audio. Please try speaking more clearly.".to_string()
        }
        TranscriptionError::ServiceUnavailable(cause) => {
            format!("Could not request results from speech recognition service: {cause}")
        }
        other => format!("An error occurred during speech recognition: {other}"),
    }
}

// ---------------------------------------------------------------------------
// PipelineOrchestrator
// ---------------------------------------------------------------------------

/// Runs requests through the processing pipeline.
///
/// ```rust,no_run
/// use polyglot_assistant::config::AppConfig;
/// use polyglot_assistant::pipeline::{Mode, PipelineOrchestrator, ProcessRequest};
///
/// # async fn example() {
/// let assistant = PipelineOrchestrator::from_config(&AppConfig::default());
/// let request = ProcessRequest::text("Hello, how are you today?", Mode::Translation)
///     .with_target_language("es");
/// let result = assistant.process(&request).await;
/// println!("{}", result.text);
/// # }
/// ```
pub struct PipelineOrchestrator {
    transcriber: Arc<dyn SpeechTranscriber>,
    translator: Arc<dyn TranslationGateway>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    normalizer: TextNormalizer,
    commands: CommandInterpreter,
    speech_language: LanguageCode,
}

impl PipelineOrchestrator {
    /// Create an orchestrator over the given adapters, with the default
    /// normalizer and a system-clock command interpreter.
    pub fn new(
        transcriber: Arc<dyn SpeechTranscriber>,
        translator: Arc<dyn TranslationGateway>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
    ) -> Self {
        Self {
            transcriber,
            translator,
            synthesizer,
            normalizer: TextNormalizer::new(),
            commands: CommandInterpreter::new(),
            speech_language: LanguageCode::new(DEFAULT_SPEECH_LANGUAGE),
        }
    }

    /// Wire the HTTP adapters described by `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            Arc::new(HttpTranscriber::from_config(&config.transcription)),
            Arc::new(ApiTranslator::from_config(&config.translation)),
            Arc::new(HttpSynthesizer::from_config(&config.synthesis)),
        )
        .with_normalizer(TextNormalizer::for_language(&config.normalizer.language))
        .with_speech_language(config.synthesis.default_language.as_str())
    }

    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_commands(mut self, commands: CommandInterpreter) -> Self {
        self.commands = commands;
        self
    }

    /// Language used by [`synthesize`](Self::synthesize) when none is given.
    pub fn with_speech_language(mut self, code: impl Into<LanguageCode>) -> Self {
        let code = code.into();
        if !code.is_unspecified() {
            self.speech_language = code;
        }
        self
    }

    // -----------------------------------------------------------------------
    // Processing
    // -----------------------------------------------------------------------

    /// Process one request.  Never fails: errors become the result text, and
    /// `audio_path` is always `None`.
    pub async fn process(&self, request: &ProcessRequest) -> PipelineResult {
        let outcome = self.run(request).await;
        if let Err(e) = &outcome {
            log::error!("pipeline error: {e}");
        }
        PipelineResult::from(outcome)
    }

    /// Process one request, keeping early-exit errors typed.
    pub async fn run(&self, request: &ProcessRequest) -> Result<String, PipelineError> {
        // ── 1. Resolve input text ────────────────────────────────────────
        let text = match request.source() {
            Some(InputSource::RawAudio(audio)) => {
                if request.text.is_some() {
                    log::debug!("pipeline: audio and text both given, using audio");
                }
                self.transcribe(audio).await?
            }
            Some(InputSource::RawText(text)) => text.to_string(),
            None => return Err(PipelineError::NoInput),
        };

        // ── 2. Validate ──────────────────────────────────────────────────
        if text.trim().is_empty() {
            return Err(PipelineError::NoInput);
        }

        // ── 3. Normalize ─────────────────────────────────────────────────
        let normalized = self.normalizer.normalize(&text);
        log::debug!("pipeline: normalized = {:?}", normalized.as_str());

        // ── 4. Dispatch on mode ──────────────────────────────────────────
        let mode: Mode = request.mode.parse()?;
        log::debug!("pipeline: mode = {mode}");

        let result = match mode {
            Mode::Translation => {
                if request.target_language.is_unspecified() {
                    return Err(PipelineError::MissingTargetLanguage);
                }
                self.translate_in_band(&text, &request.target_language).await
            }
            Mode::VoiceCommand => self.commands.interpret(normalized.as_str()),
            Mode::Transcription => format!("Original: {text}\nProcessed: {normalized}"),
        };

        // ── 5. Optional output translation ───────────────────────────────
        if mode != Mode::Translation && !request.output_language.is_unspecified() {
            return Ok(self
                .translate_in_band(&result, &request.output_language)
                .await);
        }

        Ok(result)
    }

    /// Convert `text` to speech.  Blank text and adapter failures both yield
    /// `None`; failures are logged, never surfaced.
    pub async fn synthesize(&self, text: &str, language: &LanguageCode) -> Option<AudioHandle> {
        if text.trim().is_empty() {
            return None;
        }
        let language = if language.is_unspecified() {
            &self.speech_language
        } else {
            language
        };

        match self.synthesizer.synthesize(text, language).await {
            Ok(handle) => {
                log::debug!("pipeline: speech written to {handle}");
                Some(handle)
            }
            Err(e) => {
                log::warn!("pipeline: speech synthesis failed: {e}");
                None
            }
        }
    }

    // -----------------------------------------------------------------------
    // Helpers
    // -----------------------------------------------------------------------

    async fn transcribe(&self, audio: &AudioHandle) -> Result<String, PipelineError> {
        log::debug!("pipeline: transcribing {audio}");
        match self.transcriber.transcribe(audio).await {
            Ok(text) => {
                log::debug!("pipeline: STT result = {text:?}");
                Ok(text)
            }
            Err(e) => Err(PipelineError::Transcription(e)),
        }
    }

    async fn translate_in_band(&self, text: &str, target: &LanguageCode) -> String {
        match self.translator.translate(text, target).await {
            Ok(translated) => translated,
            Err(e) => {
                log::warn!("pipeline: translation to {target} failed: {e}");
                format!("Translation error: {e}")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

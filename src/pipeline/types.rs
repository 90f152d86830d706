//! Request, result and mode types for the processing pipeline.

use std::fmt;
use std::str::FromStr;

use crate::language::LanguageCode;
use crate::media::AudioHandle;
use crate::pipeline::runner::PipelineError;

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// The processing branch selected for a request.
///
/// | Variant        | Result                                               |
/// |----------------|------------------------------------------------------|
/// | Translation    | original text translated into the target language    |
/// | VoiceCommand   | reply of the command interpreter                     |
/// | Transcription  | `Original: …` / `Processed: …` two-line display      |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Translation,
    VoiceCommand,
    Transcription,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Translation, Mode::VoiceCommand, Mode::Transcription];

    /// Display label, as offered to users.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Translation => "Translation",
            Mode::VoiceCommand => "Voice Command",
            Mode::Transcription => "Transcription",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Mode {
    type Err = PipelineError;

    /// Accepts the display labels and their case-insensitive, kebab- or
    /// snake-case spellings, plus a few short aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect();
        match key.as_str() {
            "translation" | "translate" => Ok(Mode::Translation),
            "voice command" | "voicecommand" | "command" => Ok(Mode::VoiceCommand),
            "transcription" | "transcribe" => Ok(Mode::Transcription),
            _ => Err(PipelineError::InvalidMode(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// InputSource
// ---------------------------------------------------------------------------

/// Where the text of a request comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource<'a> {
    RawText(&'a str),
    RawAudio(&'a AudioHandle),
}

// ---------------------------------------------------------------------------
// ProcessRequest
// ---------------------------------------------------------------------------

/// One call into the pipeline.
///
/// `mode` holds the caller's raw selection and is parsed during dispatch, so
/// an unrecognised value becomes an error result rather than a panic.
///
/// ```
/// use polyglot_assistant::pipeline::{Mode, ProcessRequest};
///
/// let req = ProcessRequest::text("What time is it?", Mode::VoiceCommand)
///     .with_output_language("fr");
/// assert_eq!(req.mode, "Voice Command");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProcessRequest {
    pub text: Option<String>,
    pub audio: Option<AudioHandle>,
    pub mode: String,
    pub target_language: LanguageCode,
    pub output_language: LanguageCode,
}

impl ProcessRequest {
    /// A text request.
    pub fn text(text: impl Into<String>, mode: Mode) -> Self {
        Self {
            text: Some(text.into()),
            mode: mode.label().to_string(),
            ..Self::default()
        }
    }

    /// An audio request.
    pub fn audio(audio: AudioHandle, mode: Mode) -> Self {
        Self {
            audio: Some(audio),
            mode: mode.label().to_string(),
            ..Self::default()
        }
    }

    pub fn with_audio(mut self, audio: AudioHandle) -> Self {
        self.audio = Some(audio);
        self
    }

    /// Replace the mode with a raw, unparsed selection.
    pub fn with_mode_selection(mut self, mode: impl Into<String>) -> Self {
        self.mode = mode.into();
        self
    }

    pub fn with_target_language(mut self, code: impl Into<LanguageCode>) -> Self {
        self.target_language = code.into();
        self
    }

    pub fn with_output_language(mut self, code: impl Into<LanguageCode>) -> Self {
        self.output_language = code.into();
        self
    }

    /// The effective input source: audio wins when both are present.
    pub fn source(&self) -> Option<InputSource<'_>> {
        match (&self.audio, &self.text) {
            (Some(audio), _) => Some(InputSource::RawAudio(audio)),
            (None, Some(text)) => Some(InputSource::RawText(text)),
            (None, None) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// PipelineResult
// ---------------------------------------------------------------------------

/// What the caller gets back: display text plus an optional audio artefact.
///
/// Successes and errors share this shape; an error is just a descriptive
/// message in `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineResult {
    pub text: String,
    pub audio_path: Option<AudioHandle>,
}

impl PipelineResult {
    pub fn text_only(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            audio_path: None,
        }
    }
}

impl From<Result<String, PipelineError>> for PipelineResult {
    fn from(outcome: Result<String, PipelineError>) -> Self {
        match outcome {
            Ok(text) => Self::text_only(text),
            Err(e) => Self::text_only(e.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Examples
// ---------------------------------------------------------------------------

/// A ready-made request offered to new users.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub text: &'static str,
    pub mode: Mode,
    pub target_language: &'static str,
    pub output_language: &'static str,
}

impl Example {
    pub fn to_request(&self) -> ProcessRequest {
        ProcessRequest::text(self.text, self.mode)
            .with_target_language(self.target_language)
            .with_output_language(self.output_language)
    }
}

pub const EXAMPLES: &[Example] = &[
    Example {
        text: "Hello, how are you today?",
        mode: Mode::Translation,
        target_language: "es",
        output_language: "",
    },
    Example {
        text: "What time is it?",
        mode: Mode::VoiceCommand,
        target_language: "",
        output_language: "",
    },
    Example {
        text: "The quick brown fox jumps over the lazy dog.",
        mode: Mode::Transcription,
        target_language: "",
        output_language: "",
    },
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_parse_back() {
        for mode in Mode::ALL {
            assert_eq!(mode.label().parse::<Mode>().unwrap(), mode);
        }
    }

    #[test]
    fn aliases_parse() {
        assert_eq!("voice-command".parse::<Mode>().unwrap(), Mode::VoiceCommand);
        assert_eq!("VOICE_COMMAND".parse::<Mode>().unwrap(), Mode::VoiceCommand);
        assert_eq!(" translate ".parse::<Mode>().unwrap(), Mode::Translation);
        assert_eq!("transcribe".parse::<Mode>().unwrap(), Mode::Transcription);
    }

    #[test]
    fn unknown_mode_is_an_error() {
        let err = "Summarize".parse::<Mode>().unwrap_err();
        assert!(matches!(err, PipelineError::InvalidMode(ref m) if m == "Summarize"));
        assert!("".parse::<Mode>().is_err());
    }

    #[test]
    fn audio_wins_over_text() {
        let req = ProcessRequest::text("typed", Mode::Transcription)
            .with_audio(AudioHandle::new("spoken.wav"));
        assert!(matches!(req.source(), Some(InputSource::RawAudio(_))));
    }

    #[test]
    fn no_source_when_both_absent() {
        let req = ProcessRequest::default();
        assert!(req.source().is_none());
    }

    #[test]
    fn languages_are_trimmed() {
        let req = ProcessRequest::text("x", Mode::Translation).with_target_language(" es ");
        assert_eq!(req.target_language.as_str(), "es");
        assert!(req.output_language.is_unspecified());
    }

    #[test]
    fn error_outcome_becomes_message_without_audio() {
        let result = PipelineResult::from(Err(PipelineError::NoInput));
        assert!(result.text.starts_with("No input provided"));
        assert!(result.audio_path.is_none());
    }

    #[test]
    fn examples_cover_every_mode() {
        for mode in Mode::ALL {
            assert!(EXAMPLES.iter().any(|e| e.mode == mode));
        }
    }
}

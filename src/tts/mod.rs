//! Text-to-speech adapter.
//!
//! * [`SpeechSynthesizer`]: async trait implemented by all backends.
//! * [`HttpSynthesizer`]: OpenAI-compatible `/v1/audio/speech` backend.
//! * [`SynthesisError`]: error variants for synthesis calls.

pub mod http;
pub mod synthesizer;

pub use http::HttpSynthesizer;
pub use synthesizer::{SpeechSynthesizer, SynthesisError};

#[cfg(test)]
pub use synthesizer::MockSynthesizer;

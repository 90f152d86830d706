//! Polyglot assistant: typed text or recorded speech in, one of translation,
//! voice-command reply, or normalized transcription out.
//!
//! | Module        | Role                                                  |
//! |---------------|-------------------------------------------------------|
//! | [`pipeline`]  | request orchestration and mode dispatch               |
//! | [`nlp`]       | tokenisation, stopword removal, lemmatization         |
//! | [`command`]   | keyword-driven voice-command replies                  |
//! | [`stt`]       | speech-to-text adapter                                |
//! | [`translate`] | translation adapter                                   |
//! | [`tts`]       | text-to-speech adapter                                |
//! | [`language`]  | language codes and the reference table                |
//! | [`media`]     | audio file handles                                    |
//! | [`config`]    | `settings.toml` persistence                           |

pub mod command;
pub mod config;
pub mod language;
pub mod media;
pub mod nlp;
pub mod pipeline;
pub mod stt;
pub mod translate;
pub mod tts;

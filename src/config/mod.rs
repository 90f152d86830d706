//! Configuration module.
//!
//! Provides `AppConfig` (top-level settings), one sub-config per external
//! service, `AppPaths` for the cross-platform config directory, and TOML
//! persistence via `AppConfig::load` / `AppConfig::save`.

pub mod paths;
pub mod settings;

pub use paths::{AppPaths, CONFIG_PATH_ENV};
pub use settings::{
    AppConfig, NormalizerConfig, SynthesisConfig, TranscriptionConfig, TranslationConfig,
    API_KEY_ENV,
};

//! Translation gateway.
//!
//! This module provides:
//! * [`TranslationGateway`]: async trait implemented by all backends.
//! * [`ApiTranslator`]: OpenAI-compatible REST API backend.
//! * [`PromptBuilder`]: builds the translation chat prompt.
//! * [`TranslationError`]: error variants for translation calls.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use polyglot_assistant::config::AppConfig;
//! use polyglot_assistant::translate::{ApiTranslator, TranslationGateway};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::default();
//!     let translator = ApiTranslator::from_config(&config.translation);
//!
//!     let spanish = translator
//!         .translate("Hello, how are you today?", &"es".into())
//!         .await
//!         .unwrap();
//!     println!("{spanish}");
//! }
//! ```

pub mod gateway;
pub mod prompt;

pub use gateway::{ApiTranslator, TranslationError, TranslationGateway};
pub use prompt::PromptBuilder;

#[cfg(test)]
pub use gateway::MockTranslator;

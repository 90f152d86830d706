//! Prompt builder for chat-model translation.
//!
//! [`PromptBuilder::build_chat`] returns a `(system_msg, user_msg)` pair for
//! any OpenAI-compatible `/v1/chat/completions` endpoint.  The system message
//! pins the target language and forbids commentary so the reply can be used
//! verbatim.

const SYSTEM_INSTRUCTION: &str = "\
You are a translation engine.
Task: Translate the user's text into {language}.

Rules:
1. Preserve the meaning, tone and formatting (including line breaks).
2. Keep proper nouns, numbers, code and URLs unchanged.
3. If the text is already in {language}, return it unchanged.
4. Reply with ONLY the translation, without quotes, notes or explanation.";

/// Builds translation prompts.
///
/// # Example
/// ```rust
/// use polyglot_assistant::translate::PromptBuilder;
///
/// let (system, user) = PromptBuilder::new().build_chat("Hello", "Spanish");
/// assert!(system.contains("Spanish"));
/// assert_eq!(user, "Hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the chat messages for translating `text` into `language`
    /// (an English language name such as `"Spanish"`).
    pub fn build_chat(&self, text: &str, language: &str) -> (String, String) {
        (
            SYSTEM_INSTRUCTION.replace("{language}", language),
            text.to_string(),
        )
    }
}

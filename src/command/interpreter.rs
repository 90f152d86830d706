//! Keyword-driven voice-command interpreter.
//!
//! [`CommandInterpreter`] scans normalized text for the trigger keywords of a
//! fixed, ordered rule table.  The first rule with a matching keyword produces
//! the response; rule order therefore decides overlaps ("hello, what time is
//! it" is a greeting).  The last entry is a catch-all, so every input gets a
//! reply.
//!
//! | Priority | Keywords          | Reply                                  |
//! |----------|-------------------|----------------------------------------|
//! | 1        | `hello`, `hi`     | greeting                               |
//! | 2        | `time`            | `Current time is HH:MM:SS`             |
//! | 3        | `date`            | `Today's date is YYYY-MM-DD`           |
//! | 4        | `weather`         | weather data not available             |
//! | last     | *(none)*          | echo of the normalized text            |
//!
//! Keywords are matched as substrings of the lowercased input, so `"hi"` also
//! fires inside longer words such as `"history"`.

use std::sync::Arc;

use crate::command::clock::{Clock, SystemClock};

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

/// One entry of the command table.
pub struct CommandRule {
    /// Short identifier, used in logs.
    pub name: &'static str,
    /// Any one of these keywords triggers the rule.
    pub keywords: &'static [&'static str],
    respond: fn(&str, &dyn Clock) -> String,
}

impl CommandRule {
    fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|kw| text.contains(kw))
    }
}

impl std::fmt::Debug for CommandRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRule")
            .field("name", &self.name)
            .field("keywords", &self.keywords)
            .finish_non_exhaustive()
    }
}

pub const GREETING_REPLY: &str = "Hello! How can I help you today?";
pub const WEATHER_REPLY: &str =
    "I don't have access to weather data yet, but you can check your local weather service.";

static RULES: &[CommandRule] = &[
    CommandRule {
        name: "greeting",
        keywords: &["hello", "hi"],
        respond: greeting_reply,
    },
    CommandRule {
        name: "time",
        keywords: &["time"],
        respond: time_reply,
    },
    CommandRule {
        name: "date",
        keywords: &["date"],
        respond: date_reply,
    },
    CommandRule {
        name: "weather",
        keywords: &["weather"],
        respond: weather_reply,
    },
];

fn greeting_reply(_: &str, _: &dyn Clock) -> String {
    GREETING_REPLY.to_string()
}

fn time_reply(_: &str, clock: &dyn Clock) -> String {
    format!("Current time is {}", clock.now().format("%H:%M:%S"))
}

fn date_reply(_: &str, clock: &dyn Clock) -> String {
    format!("Today's date is {}", clock.now().format("%Y-%m-%d"))
}

fn weather_reply(_: &str, _: &dyn Clock) -> String {
    WEATHER_REPLY.to_string()
}

fn fallback_reply(text: &str) -> String {
    format!("Voice command processed: '{text}'. Advanced command processing coming soon!")
}

/// The fixed, ordered command table.
pub fn rules() -> &'static [CommandRule] {
    RULES
}

// ---------------------------------------------------------------------------
// CommandInterpreter
// ---------------------------------------------------------------------------

/// Matches normalized text against the command table.
///
/// # Example
/// ```rust
/// use polyglot_assistant::command::CommandInterpreter;
///
/// let interpreter = CommandInterpreter::new();
/// assert_eq!(
///     interpreter.interpret("hello today"),
///     "Hello! How can I help you today?"
/// );
/// ```
#[derive(Clone)]
pub struct CommandInterpreter {
    clock: Arc<dyn Clock>,
}

impl CommandInterpreter {
    /// Interpreter backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// The first rule whose keywords occur in `text`, if any.
    pub fn matched_rule(&self, text: &str) -> Option<&'static CommandRule> {
        let lowered = text.to_lowercase();
        RULES.iter().find(|rule| rule.matches(&lowered))
    }

    /// Produce the reply for `normalized`.  Always returns a response.
    pub fn interpret(&self, normalized: &str) -> String {
        match self.matched_rule(normalized) {
            Some(rule) => {
                log::debug!("command: matched rule {:?}", rule.name);
                (rule.respond)(normalized, self.clock.as_ref())
            }
            None => {
                log::debug!("command: no rule matched, echoing input");
                fallback_reply(normalized)
            }
        }
    }
}

impl Default for CommandInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::clock::FixedClock;
    use chrono::NaiveDate;

    fn interpreter() -> CommandInterpreter {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 3)
            .unwrap();
        CommandInterpreter::with_clock(Arc::new(FixedClock(at)))
    }

    #[test]
    fn greeting_wins_regardless_of_other_content() {
        let i = interpreter();
        assert_eq!(i.interpret("hello"), GREETING_REPLY);
        assert_eq!(i.interpret("hello time date weather"), GREETING_REPLY);
        assert_eq!(i.interpret("weather time hi"), GREETING_REPLY);
    }

    #[test]
    fn time_is_zero_padded() {
        assert_eq!(interpreter().interpret("time"), "Current time is 07:05:03");
    }

    #[test]
    fn time_beats_date() {
        assert_eq!(interpreter().interpret("date time"), "Current time is 07:05:03");
    }

    #[test]
    fn date_rule_reply() {
        assert_eq!(interpreter().interpret("date today"), "Today's date is 2024-03-09");
    }

    #[test]
    fn weather_rule_reply() {
        assert_eq!(interpreter().interpret("weather tomorrow"), WEATHER_REPLY);
    }

    #[test]
    fn fallback_echoes_text_verbatim() {
        let reply = interpreter().interpret("open door");
        assert_eq!(
            reply,
            "Voice command processed: 'open door'. Advanced command processing coming soon!"
        );
    }

    #[test]
    fn empty_input_gets_fallback() {
        assert!(interpreter().interpret("").contains("''"));
    }

    #[test]
    fn keywords_match_as_substrings() {
        let i = interpreter();
        assert_eq!(i.matched_rule("history").map(|r| r.name), Some("greeting"));
        assert_eq!(i.matched_rule("timezone").map(|r| r.name), Some("time"));
        assert!(i.matched_rule("open door").is_none());
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(interpreter().interpret("WEATHER"), WEATHER_REPLY);
    }

    #[test]
    fn rule_table_order_is_fixed() {
        let names: Vec<&str> = rules().iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["greeting", "time", "date", "weather"]);
    }

    #[test]
    fn system_clock_reply_has_time_shape() {
        let reply = CommandInterpreter::new().interpret("time");
        let clock = reply.strip_prefix("Current time is ").unwrap();
        assert_eq!(clock.len(), 8);
        assert_eq!(clock.as_bytes()[2], b':');
        assert_eq!(clock.as_bytes()[5], b':');
    }
}

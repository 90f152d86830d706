//! Voice-command interpretation.
//!
//! * [`CommandInterpreter`]: first-match-wins keyword rule table.
//! * [`Clock`] / [`SystemClock`] / [`FixedClock`]: time source for the
//!   time and date replies.

pub mod clock;
pub mod interpreter;

pub use clock::{Clock, FixedClock, SystemClock};
pub use interpreter::{rules, CommandInterpreter, CommandRule};

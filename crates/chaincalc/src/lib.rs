//! Chaincalc - sequential keypad calculator engine
//!
//! A four-function calculator core driven by discrete key events: digits,
//! decimal point, operators, and clear. Evaluation is chained left-to-right
//! (each operator press finalizes the prior pending operation); there is no
//! precedence, no expression parsing, and no UI — consumers feed events in
//! and read a display numeral back.
//!
//! # Example
//!
//! ```rust
//! use chaincalc::prelude::*;
//!
//! // Drive the engine directly
//! let mut engine = Engine::new();
//! engine.digit(5);
//! engine.operator(Operator::Add);
//! engine.digit(3);
//! engine.operator(Operator::Equals);
//! assert_eq!(engine.display_value(), "8");
//!
//! // Or replay a compact script through a recorded session
//! let mut session = Session::new();
//! session.run_script("9/3=").unwrap();
//! assert_eq!(session.display(), "3");
//! ```
//!
//! Division by zero is deliberately not guarded: the non-finite result is
//! formatted and displayed ("Infinity", "NaN"), mirroring the behavior of
//! the calculator this engine was extracted from.

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{format_value, Engine, Operator};
    pub use crate::driver::{keys_from_json, Session, Step};
    pub use crate::keypad::{Button, Key, Keypad, KeypadError, KeypadResult};
}

//! Scripted session driver
//!
//! Write an interaction once, replay it anywhere: a [`Session`] feeds key
//! presses into an [`Engine`] and records the display after every press, so
//! the same sequence can drive unit tests, property tests, or a recorded
//! JSON trace.

use serde::{Deserialize, Serialize};

use crate::core::Engine;
use crate::keypad::{Key, KeypadError, KeypadResult};

/// One recorded press: the key and the display it produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The key that was pressed
    pub key: Key,
    /// The display value after the press
    pub display: String,
}

/// A scripted calculator session
#[derive(Debug, Default)]
pub struct Session {
    engine: Engine,
    trace: Vec<Step>,
}

impl Session {
    /// Creates a session over a fresh engine
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: Engine::new(),
            trace: Vec::new(),
        }
    }

    /// Returns the underlying engine
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Returns the current display value
    #[must_use]
    pub fn display(&self) -> &str {
        self.engine.display_value()
    }

    /// Returns the recorded steps, oldest first
    #[must_use]
    pub fn trace(&self) -> &[Step] {
        &self.trace
    }

    /// Presses a single key and records the resulting display
    pub fn press(&mut self, key: Key) {
        match key {
            Key::Digit(d) => self.engine.digit(d),
            Key::Decimal => self.engine.decimal_point(),
            Key::Op(op) => self.engine.operator(op),
            Key::Clear => self.engine.clear(),
        }
        self.trace.push(Step {
            key,
            display: self.engine.display_value().to_string(),
        });
    }

    /// Presses a sequence of keys
    pub fn run_keys(&mut self, keys: &[Key]) {
        for &key in keys {
            self.press(key);
        }
    }

    /// Runs a compact text script such as `"12+3="`.
    ///
    /// Whitespace is skipped; any other character must map to a key via
    /// [`Key::from_char`]. Presses up to the offending character are applied
    /// before the error is returned.
    pub fn run_script(&mut self, script: &str) -> KeypadResult<()> {
        for ch in script.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let key =
                Key::from_char(ch).ok_or_else(|| KeypadError::UnrecognizedKey(ch.to_string()))?;
            self.press(key);
        }
        Ok(())
    }

    /// Resets the engine and discards the recorded trace
    pub fn reset(&mut self) {
        self.engine.clear();
        self.trace.clear();
    }

    /// Serializes the recorded trace as JSON
    pub fn trace_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.trace)
    }
}

/// Deserializes a key sequence from JSON for deterministic replay
pub fn keys_from_json(json: &str) -> serde_json::Result<Vec<Key>> {
    serde_json::from_str(json)
}

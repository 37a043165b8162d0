//! Keypad layer: key events, button grid, and keyboard mapping
//!
//! The keypad owns every fallible conversion (characters, element ids,
//! keyboard events) so the engine API underneath stays total. The layout
//! mirrors the classic four-column calculator grid:
//!
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ / ]
//! [ 4 ] [ 5 ] [ 6 ] [ * ]
//! [ 1 ] [ 2 ] [ 3 ] [ - ]
//! [ 0 ] [ . ] [ = ] [ + ]
//! [       Clear        ]
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Operator;

/// Result type for keypad operations
pub type KeypadResult<T> = Result<T, KeypadError>;

/// Keypad decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeypadError {
    /// Key event did not map to any calculator key
    #[error("unrecognized key: {0:?}")]
    UnrecognizedKey(String),
    /// Element id did not name any keypad button
    #[error("no keypad button with id {0:?}")]
    UnknownButton(String),
}

/// A discrete calculator key press (shared by every input surface)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// A digit key (0-9)
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// An operator key, including "="
    Op(Operator),
    /// The clear key
    Clear,
}

impl Key {
    /// Returns the character this key enters, if any
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Key::Digit(d) => char::from_digit(u32::from(*d), 10),
            Key::Decimal => Some('.'),
            Key::Op(op) => Some(op.symbol()),
            Key::Clear => None,
        }
    }

    /// Parses a key from its single-character script form.
    ///
    /// `c`/`C` map to clear; everything else follows the button labels.
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        if let Some(d) = ch.to_digit(10) {
            return Some(Key::Digit(d as u8));
        }
        match ch {
            '.' => Some(Key::Decimal),
            'c' | 'C' => Some(Key::Clear),
            _ => Operator::from_symbol(ch).map(Key::Op),
        }
    }

    /// Returns the button label for this key
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::Decimal => ".".to_string(),
            Key::Op(op) => op.symbol().to_string(),
            Key::Clear => "Clear".to_string(),
        }
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    /// The key this button presses
    pub key: Key,
    /// Stable element id for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns the button occupies
    pub span: usize,
}

impl Button {
    /// Creates a new single-column button definition
    #[must_use]
    pub fn new(key: Key, row: usize, col: usize) -> Self {
        Self::spanning(key, row, col, 1)
    }

    /// Creates a button occupying `span` columns
    #[must_use]
    pub fn spanning(key: Key, row: usize, col: usize, span: usize) -> Self {
        let id = match key {
            Key::Digit(d) => format!("btn-{d}"),
            Key::Decimal => "btn-decimal".to_string(),
            Key::Op(op) => format!("btn-{}", op_name(op)),
            Key::Clear => "btn-clear".to_string(),
        };
        Self {
            key,
            id,
            row,
            col,
            span,
        }
    }
}

/// Returns a name for an operator (for element ids)
fn op_name(op: Operator) -> &'static str {
    match op {
        Operator::Add => "plus",
        Operator::Subtract => "minus",
        Operator::Multiply => "times",
        Operator::Divide => "divide",
        Operator::Equals => "equals",
    }
}

/// The calculator's button grid
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<Button>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard four-function keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: 7 8 9 /
            Button::new(Key::Digit(7), 0, 0),
            Button::new(Key::Digit(8), 0, 1),
            Button::new(Key::Digit(9), 0, 2),
            Button::new(Key::Op(Operator::Divide), 0, 3),
            // Row 1: 4 5 6 *
            Button::new(Key::Digit(4), 1, 0),
            Button::new(Key::Digit(5), 1, 1),
            Button::new(Key::Digit(6), 1, 2),
            Button::new(Key::Op(Operator::Multiply), 1, 3),
            // Row 2: 1 2 3 -
            Button::new(Key::Digit(1), 2, 0),
            Button::new(Key::Digit(2), 2, 1),
            Button::new(Key::Digit(3), 2, 2),
            Button::new(Key::Op(Operator::Subtract), 2, 3),
            // Row 3: 0 . = +
            Button::new(Key::Digit(0), 3, 0),
            Button::new(Key::Decimal, 3, 1),
            Button::new(Key::Op(Operator::Equals), 3, 2),
            Button::new(Key::Op(Operator::Add), 3, 3),
            // Row 4: Clear spans the full width
            Button::spanning(Key::Clear, 4, 0, 4),
        ];

        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    /// Gets the button covering a grid position, honoring column spans
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&Button> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons
            .iter()
            .find(|b| b.row == row && col >= b.col && col < b.col + b.span)
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&Button> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by the character it enters
    #[must_use]
    pub fn find_button_by_char(&self, ch: char) -> Option<&Button> {
        self.buttons.iter().find(|b| b.key.to_char() == Some(ch))
    }

    /// Resolves a button click event to the key it presses
    pub fn handle_click(&self, element_id: &str) -> KeypadResult<Key> {
        self.find_button_by_id(element_id)
            .map(|b| b.key)
            .ok_or_else(|| KeypadError::UnknownButton(element_id.to_string()))
    }

    /// Maps a keyboard event name to a key press
    pub fn decode(key: &str) -> KeypadResult<Key> {
        match key {
            "Enter" | "=" => return Ok(Key::Op(Operator::Equals)),
            "Escape" => return Ok(Key::Clear),
            _ => {}
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                Key::from_char(ch).ok_or_else(|| KeypadError::UnrecognizedKey(key.to_string()))
            }
            _ => Err(KeypadError::UnrecognizedKey(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Key tests =====

    #[test]
    fn test_key_digit_to_char() {
        for d in 0..=9 {
            assert_eq!(Key::Digit(d).to_char(), char::from_digit(u32::from(d), 10));
        }
    }

    #[test]
    fn test_key_operator_to_char() {
        assert_eq!(Key::Op(Operator::Add).to_char(), Some('+'));
        assert_eq!(Key::Op(Operator::Equals).to_char(), Some('='));
    }

    #[test]
    fn test_key_clear_has_no_char() {
        assert_eq!(Key::Clear.to_char(), None);
    }

    #[test]
    fn test_key_from_char_digits() {
        for d in 0..=9u8 {
            let ch = char::from_digit(u32::from(d), 10).unwrap();
            assert_eq!(Key::from_char(ch), Some(Key::Digit(d)));
        }
    }

    #[test]
    fn test_key_from_char_operators() {
        assert_eq!(Key::from_char('+'), Some(Key::Op(Operator::Add)));
        assert_eq!(Key::from_char('-'), Some(Key::Op(Operator::Subtract)));
        assert_eq!(Key::from_char('*'), Some(Key::Op(Operator::Multiply)));
        assert_eq!(Key::from_char('/'), Some(Key::Op(Operator::Divide)));
        assert_eq!(Key::from_char('='), Some(Key::Op(Operator::Equals)));
    }

    #[test]
    fn test_key_from_char_special() {
        assert_eq!(Key::from_char('.'), Some(Key::Decimal));
        assert_eq!(Key::from_char('c'), Some(Key::Clear));
        assert_eq!(Key::from_char('C'), Some(Key::Clear));
        assert_eq!(Key::from_char('x'), None);
    }

    #[test]
    fn test_key_labels() {
        assert_eq!(Key::Digit(5).label(), "5");
        assert_eq!(Key::Decimal.label(), ".");
        assert_eq!(Key::Op(Operator::Add).label(), "+");
        assert_eq!(Key::Op(Operator::Equals).label(), "=");
        assert_eq!(Key::Clear.label(), "Clear");
    }

    #[test]
    fn test_key_serde_roundtrip() {
        for key in [
            Key::Digit(7),
            Key::Decimal,
            Key::Op(Operator::Divide),
            Key::Clear,
        ] {
            let json = serde_json::to_string(&key).unwrap();
            let back: Key = serde_json::from_str(&json).unwrap();
            assert_eq!(key, back);
        }
    }

    // ===== Button tests =====

    #[test]
    fn test_button_ids() {
        assert_eq!(Button::new(Key::Digit(5), 1, 1).id, "btn-5");
        assert_eq!(Button::new(Key::Decimal, 3, 1).id, "btn-decimal");
        assert_eq!(Button::new(Key::Op(Operator::Add), 3, 3).id, "btn-plus");
        assert_eq!(Button::new(Key::Op(Operator::Subtract), 2, 3).id, "btn-minus");
        assert_eq!(Button::new(Key::Op(Operator::Multiply), 1, 3).id, "btn-times");
        assert_eq!(Button::new(Key::Op(Operator::Divide), 0, 3).id, "btn-divide");
        assert_eq!(Button::new(Key::Op(Operator::Equals), 3, 2).id, "btn-equals");
        assert_eq!(Button::spanning(Key::Clear, 4, 0, 4).id, "btn-clear");
    }

    #[test]
    fn test_button_default_span() {
        assert_eq!(Button::new(Key::Digit(1), 2, 0).span, 1);
    }

    // ===== Layout tests =====

    #[test]
    fn test_keypad_dimensions() {
        let keypad = Keypad::new();
        assert_eq!(keypad.button_count(), 17);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_layout_rows() {
        let keypad = Keypad::new();
        let expect = |row: usize, col: usize, key: Key| {
            assert_eq!(keypad.button_at(row, col).unwrap().key, key);
        };
        expect(0, 0, Key::Digit(7));
        expect(0, 1, Key::Digit(8));
        expect(0, 2, Key::Digit(9));
        expect(0, 3, Key::Op(Operator::Divide));
        expect(1, 0, Key::Digit(4));
        expect(1, 3, Key::Op(Operator::Multiply));
        expect(2, 0, Key::Digit(1));
        expect(2, 3, Key::Op(Operator::Subtract));
        expect(3, 0, Key::Digit(0));
        expect(3, 1, Key::Decimal);
        expect(3, 2, Key::Op(Operator::Equals));
        expect(3, 3, Key::Op(Operator::Add));
    }

    #[test]
    fn test_clear_spans_last_row() {
        let keypad = Keypad::new();
        for col in 0..4 {
            assert_eq!(keypad.button_at(4, col).unwrap().key, Key::Clear);
        }
    }

    #[test]
    fn test_button_at_out_of_bounds() {
        let keypad = Keypad::new();
        assert!(keypad.button_at(5, 0).is_none());
        assert!(keypad.button_at(0, 4).is_none());
        assert!(keypad.button_at(100, 100).is_none());
    }

    #[test]
    fn test_all_digits_have_buttons() {
        let keypad = Keypad::new();
        for d in 0..=9 {
            let ch = char::from_digit(d, 10).unwrap();
            assert!(
                keypad.find_button_by_char(ch).is_some(),
                "missing button for digit {d}"
            );
        }
    }

    #[test]
    fn test_all_operators_have_buttons() {
        let keypad = Keypad::new();
        for op in ['+', '-', '*', '/', '='] {
            assert!(
                keypad.find_button_by_char(op).is_some(),
                "missing button for operator {op}"
            );
        }
    }

    #[test]
    fn test_button_ids_unique() {
        let keypad = Keypad::new();
        let mut ids = std::collections::HashSet::new();
        for btn in keypad.buttons() {
            assert!(ids.insert(btn.id.clone()), "duplicate id {}", btn.id);
        }
    }

    // ===== Click dispatch =====

    #[test]
    fn test_handle_click_digit() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("btn-5"), Ok(Key::Digit(5)));
    }

    #[test]
    fn test_handle_click_operator() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("btn-plus"), Ok(Key::Op(Operator::Add)));
    }

    #[test]
    fn test_handle_click_clear() {
        let keypad = Keypad::new();
        assert_eq!(keypad.handle_click("btn-clear"), Ok(Key::Clear));
    }

    #[test]
    fn test_handle_click_unknown() {
        let keypad = Keypad::new();
        assert_eq!(
            keypad.handle_click("btn-nope"),
            Err(KeypadError::UnknownButton("btn-nope".to_string()))
        );
    }

    // ===== Keyboard mapping =====

    #[test]
    fn test_decode_digits() {
        for d in 0..=9u8 {
            assert_eq!(Keypad::decode(&d.to_string()), Ok(Key::Digit(d)));
        }
    }

    #[test]
    fn test_decode_operators() {
        assert_eq!(Keypad::decode("+"), Ok(Key::Op(Operator::Add)));
        assert_eq!(Keypad::decode("-"), Ok(Key::Op(Operator::Subtract)));
        assert_eq!(Keypad::decode("*"), Ok(Key::Op(Operator::Multiply)));
        assert_eq!(Keypad::decode("/"), Ok(Key::Op(Operator::Divide)));
    }

    #[test]
    fn test_decode_equals_aliases() {
        assert_eq!(Keypad::decode("Enter"), Ok(Key::Op(Operator::Equals)));
        assert_eq!(Keypad::decode("="), Ok(Key::Op(Operator::Equals)));
    }

    #[test]
    fn test_decode_clear_aliases() {
        assert_eq!(Keypad::decode("Escape"), Ok(Key::Clear));
        assert_eq!(Keypad::decode("c"), Ok(Key::Clear));
        assert_eq!(Keypad::decode("C"), Ok(Key::Clear));
    }

    #[test]
    fn test_decode_unknown() {
        assert!(matches!(
            Keypad::decode("Shift"),
            Err(KeypadError::UnrecognizedKey(_))
        ));
        assert!(matches!(
            Keypad::decode("x"),
            Err(KeypadError::UnrecognizedKey(_))
        ));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            KeypadError::UnrecognizedKey("Shift".to_string()).to_string(),
            "unrecognized key: \"Shift\""
        );
        assert_eq!(
            KeypadError::UnknownButton("btn-nope".to_string()).to_string(),
            "no keypad button with id \"btn-nope\""
        );
    }
}

//! Sequential input/evaluation state machine
//!
//! The engine runs a classic "chained calculator": left-to-right evaluation
//! with no operator precedence, where each operator press finalizes the
//! prior pending operation.

use crate::core::format_value;
use crate::core::operator::Operator;

/// Calculator engine state
///
/// Two states suffice: *entering* (`awaiting_operand == false`), where digits
/// append to the display, and *pending-replace* (`awaiting_operand == true`),
/// where the next digit or decimal point starts a fresh operand. Every
/// operation is total; the display is only ever mutated through the guarded
/// entry points below, so it always holds a parseable numeral.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    /// Numeral currently shown; never empty, defaults to "0"
    display: String,
    /// Carried result of all operations applied so far in the chain
    accumulator: Option<f64>,
    /// Operator awaiting its second operand
    pending: Option<Operator>,
    /// True when the next digit/decimal starts a fresh operand
    awaiting_operand: bool,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates a new engine showing "0"
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending: None,
            awaiting_operand: false,
        }
    }

    /// Returns the current display numeral
    #[must_use]
    pub fn display_value(&self) -> &str {
        &self.display
    }

    /// Returns the carried accumulator, if a chain has started
    #[must_use]
    pub fn accumulator(&self) -> Option<f64> {
        self.accumulator
    }

    /// Returns the operator awaiting its second operand
    #[must_use]
    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending
    }

    /// Returns true when the next digit/decimal starts a fresh operand
    #[must_use]
    pub fn is_awaiting_operand(&self) -> bool {
        self.awaiting_operand
    }

    /// Enters a digit (0-9). Values above 9 are ignored.
    ///
    /// Starts a fresh operand after an operator press; otherwise appends,
    /// except that a lone "0" is replaced rather than extended (so "0","0","5"
    /// displays "5", not "005").
    pub fn digit(&mut self, d: u8) {
        let Some(ch) = char::from_digit(u32::from(d), 10) else {
            return;
        };
        if self.awaiting_operand {
            self.display.clear();
            self.display.push(ch);
            self.awaiting_operand = false;
        } else if self.display == "0" {
            self.display.clear();
            self.display.push(ch);
        } else {
            self.display.push(ch);
        }
    }

    /// Enters a decimal point. Idempotent while an operand already has one.
    pub fn decimal_point(&mut self) {
        if self.awaiting_operand {
            self.display.clear();
            self.display.push_str("0.");
            self.awaiting_operand = false;
            return;
        }
        if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Presses an operator, finalizing any pending operation first.
    ///
    /// An operator press while still awaiting an operand only retargets the
    /// pending operator; it never evaluates with a stale operand (so
    /// `4 + - 2 =` yields "2", not a spurious intermediate result).
    pub fn operator(&mut self, op: Operator) {
        if self.awaiting_operand {
            self.pending = Some(op);
            return;
        }

        let input = self.parse_display();
        match (self.accumulator, self.pending) {
            (None, _) => self.accumulator = Some(input),
            (Some(acc), Some(pending)) => {
                let result = pending.apply(acc, input);
                self.display = format_value(result);
                self.accumulator = Some(result);
            }
            // Accumulator is only ever set together with a pending operator,
            // but stay total if that coupling is ever relaxed.
            (Some(_), None) => {}
        }

        self.pending = Some(op);
        self.awaiting_operand = true;
    }

    /// Resets all state to initialization defaults
    pub fn clear(&mut self) {
        self.display.clear();
        self.display.push('0');
        self.accumulator = None;
        self.pending = None;
        self.awaiting_operand = false;
    }

    /// Parses the display as the current operand.
    ///
    /// The display is only written by the guarded mutators or by
    /// `format_value`, all of which produce strings `f64` parsing accepts
    /// (including "Infinity" and "NaN"), so the fallback is unreachable in
    /// practice.
    fn parse_display(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }
}

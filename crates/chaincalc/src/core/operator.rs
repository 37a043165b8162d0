//! Binary operator enumeration for chained evaluation

use serde::{Deserialize, Serialize};

/// Type-safe operator enum - compile-time guarantee of valid operators
///
/// `Equals` is a member rather than a separate event: pressing `=` finalizes
/// the pending operation exactly like any other operator press, and a pending
/// `Equals` applied later simply passes the second operand through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Finalization (=)
    Equals,
}

impl Operator {
    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
            Self::Equals => '=',
        }
    }

    /// Parses an operator from its keypad symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '=' => Some(Self::Equals),
            _ => None,
        }
    }

    /// Applies the operator to an accumulator and an operand.
    ///
    /// Division by zero is deliberately not guarded: the non-finite result
    /// flows through to display formatting unchanged. `Equals` returns the
    /// operand untouched.
    #[must_use]
    pub fn apply(&self, accumulator: f64, operand: f64) -> f64 {
        match self {
            Self::Add => accumulator + operand,
            Self::Subtract => accumulator - operand,
            Self::Multiply => accumulator * operand,
            Self::Divide => accumulator / operand,
            Self::Equals => operand,
        }
    }
}

//! Core arithmetic engine: operator enumeration, state machine, and the
//! display formatting policy.

pub mod engine;
pub mod operator;

pub use engine::Engine;
pub use operator::Operator;

/// Largest magnitude rendered in integer form (2^53, the exact-integer
/// range of f64)
const INTEGER_DISPLAY_LIMIT: f64 = 9_007_199_254_740_992.0;

/// Formats a computed value for the display.
///
/// Policy (chosen over the reference's locale-free default stringification):
/// - NaN renders as "NaN", infinities as "Infinity" / "-Infinity";
///   divide-by-zero results pass through rather than being guarded.
/// - Whole numbers within f64's exact-integer range render without a
///   fractional part ("8", not "8.0").
/// - Everything else uses the shortest round-trip decimal form, which
///   preserves binary floating-point artifacts ("0.30000000000000004").
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value.fract() == 0.0 && value.abs() < INTEGER_DISPLAY_LIMIT {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

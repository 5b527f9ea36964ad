//! Pattern-style switches over the magnitude of an integer.
//!
//! [`classify`] is the arrow form: each arm is a bare value.
//! [`classify_verbose`] is the block form: each arm reports a line before
//! yielding its value.

use tutor_common::sink::Sink;

pub fn classify(value: i32) -> &'static str {
    match value.unsigned_abs() {
        0 => "Zero",
        1..=5 => "Five or less",
        _ => "Not sure, but more than six.",
    }
}

pub fn classify_verbose(value: i32, out: &mut dyn Sink) -> &'static str {
    match value.unsigned_abs() {
        0 => {
            out.line("Value is zero.");
            "Zero"
        }
        1..=5 => {
            out.line("Value is between 1 and 5.");
            "Five or less."
        }
        _ => {
            out.line("Another value.");
            "Not sure, but more than six."
        }
    }
}

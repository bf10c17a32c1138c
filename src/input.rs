// File: src/input.rs
//! Helpers for callers that collect a name and a date of birth as text.

use crate::core::normalizer::remove_diacritics;
use crate::core::types::DateOfBirth;
use crate::error::{NumerologyError, Result};

/// Uppercases a raw name and strips its Vietnamese diacritics.
pub fn prepare_name(raw: &str) -> String {
    remove_diacritics(&raw.to_uppercase())
}

fn is_dob_shape(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        })
}

/// Parses a `dd/mm/yyyy` date. Only the shape is checked, not the calendar;
/// surrounding whitespace is rejected like any other stray character.
pub fn parse_dob(text: &str) -> Result<DateOfBirth> {
    if !is_dob_shape(text) {
        return Err(NumerologyError::InvalidDateFormat(text.to_string()));
    }
    let parts: Vec<&str> = text.split('/').collect();
    DateOfBirth::from_parts(parts[0], parts[1], parts[2])
}

impl DateOfBirth {
    /// Builds a date from separate text fields, each of which must be numeric.
    pub fn from_parts(day: &str, month: &str, year: &str) -> Result<Self> {
        fn number(part: &'static str, value: &str) -> Result<u32> {
            value.trim().parse().map_err(|_| NumerologyError::InvalidDatePart {
                part,
                value: value.to_string(),
            })
        }
        Ok(Self::new(
            number("day", day)?,
            number("month", month)?,
            number("year", year)?,
        ))
    }
}

/// Formats raw keystrokes into `dd/mm/yyyy` as the user types: non-digits are
/// dropped, slashes inserted, and anything past eight digits cut off.
pub fn mask_dob_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        n => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..n.min(8)]),
    }
}

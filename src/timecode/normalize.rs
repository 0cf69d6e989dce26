use super::types::Timecode;
use crate::errors::TimecodeError;

/// Add the millisecond field and leading zeroes if they are missing.
///
/// Only formatting is repaired: out-of-range components are kept and an
/// existing millisecond field is left untouched.
pub fn normalize(raw: &str) -> String {
    let raw = raw.trim();
    let (clock, fraction) = match raw.split_once(',') {
        Some((clock, fraction)) => (clock, fraction),
        None => (raw, "000"),
    };

    let clock = clock
        .split(':')
        .map(|part| {
            if part.len() == 1 && part.as_bytes()[0].is_ascii_digit() {
                format!("0{}", part)
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<String>>()
        .join(":");

    format!("{},{}", clock, fraction)
}

/// Normalize a raw token and read it as a [`Timecode`]
pub fn parse_timecode(raw: &str) -> Result<Timecode, TimecodeError> {
    normalize(raw).parse()
}

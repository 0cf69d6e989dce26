use crate::errors::TimecodeError;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A cue boundary with millisecond precision.
///
/// Components are kept as read; a minute value of 61 is not folded into the
/// hour. Comparison uses the total millisecond count.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct Timecode {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub millis: u32,
}

impl Timecode {
    pub fn new(hours: u32, minutes: u32, seconds: u32, millis: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            millis,
        }
    }

    /// Build a timecode from a millisecond offset
    pub fn from_millis(total: u64) -> Self {
        let millis = total % 1000;
        let total_seconds = total / 1000;
        let seconds = total_seconds % 60;
        let total_minutes = total_seconds / 60;
        let minutes = total_minutes % 60;
        let hours = total_minutes / 60;

        Self::new(hours as u32, minutes as u32, seconds as u32, millis as u32)
    }

    pub fn total_millis(&self) -> u64 {
        self.hours as u64 * 3_600_000
            + self.minutes as u64 * 60_000
            + self.seconds as u64 * 1000
            + self.millis as u64
    }
}

impl PartialEq for Timecode {
    fn eq(&self, other: &Self) -> bool {
        self.total_millis() == other.total_millis()
    }
}

impl Eq for Timecode {}

impl PartialOrd for Timecode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timecode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_millis().cmp(&other.total_millis())
    }
}

impl fmt::Display for Timecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.hours, self.minutes, self.seconds, self.millis
        )
    }
}

/// Reads `H:M:S,ms` as produced by [`normalize`](super::normalize).
///
/// The millisecond field is read as an integer count, so `,5` is five
/// milliseconds.
impl FromStr for Timecode {
    type Err = TimecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimecodeError::new(format!("Invalid timecode: '{}'", s));

        let (clock, fraction) = s.split_once(',').ok_or_else(invalid)?;
        let parts: Vec<&str> = clock.split(':').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let field = |part: &str| -> Result<u32, TimecodeError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u32>().map_err(|_| invalid())
        };

        let hours = field(parts[0])?;
        let minutes = field(parts[1])?;
        let seconds = field(parts[2])?;
        let millis = field(fraction)?;
        if millis > 999 {
            return Err(invalid());
        }

        Ok(Self::new(hours, minutes, seconds, millis))
    }
}

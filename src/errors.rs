use std::error::Error;
use std::fmt;
use std::io;

/// Enumeration of all possible errors that can occur while handling SubRip files
#[derive(Debug)]
pub enum SubripError {
    Timecode(TimecodeError),
    Timeline(TimelineError),
    Options(OptionsError),
    Other(io::Error),
}

/// A timecode token that cannot be read even after normalization
#[derive(Debug)]
pub struct TimecodeError {
    pub message: String,
}

impl TimecodeError {
    /// Create a new error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Which ordering rule a timeline broke
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineViolation {
    /// The cue starts before the previous cue ends
    StartsBeforePrevious,
    /// The cue ends before it starts (or has zero length)
    EndsBeforeStart,
}

/// Timeline ordering violation, only raised under the strict policy
#[derive(Debug)]
pub struct TimelineError {
    pub violation: TimelineViolation,
    pub message: String,
}

impl TimelineError {
    pub fn new(violation: TimelineViolation, message: impl Into<String>) -> Self {
        Self {
            violation,
            message: message.into(),
        }
    }
}

/// Serialization option errors
#[derive(Debug, PartialEq, Eq)]
pub enum OptionsError {
    /// Key outside of the recognized option set
    InvalidKey { key: String },
    /// Recognized key given a value of the wrong kind
    InvalidValue { key: String, expected: &'static str },
}

impl fmt::Display for SubripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubripError::Other(err) => write!(f, "I/O error: {}", err),
            SubripError::Timecode(err) => write!(f, "Timecode error: {}", err),
            SubripError::Timeline(err) => write!(f, "Timeline error: {}", err),
            SubripError::Options(err) => write!(f, "Options error: {}", err),
        }
    }
}

impl fmt::Display for TimecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for TimelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::InvalidKey { key } => {
                write!(f, "options contain a key that is not allowed: {}", key)
            }
            OptionsError::InvalidValue { key, expected } => {
                write!(f, "option '{}' expects {}", key, expected)
            }
        }
    }
}

impl Error for SubripError {}
impl Error for TimecodeError {}
impl Error for TimelineError {}
impl Error for OptionsError {}

// Conversion implementations
impl From<io::Error> for SubripError {
    fn from(err: io::Error) -> Self {
        SubripError::Other(err)
    }
}

impl From<TimecodeError> for SubripError {
    fn from(err: TimecodeError) -> Self {
        SubripError::Timecode(err)
    }
}

impl From<TimelineError> for SubripError {
    fn from(err: TimelineError) -> Self {
        SubripError::Timeline(err)
    }
}

impl From<OptionsError> for SubripError {
    fn from(err: OptionsError) -> Self {
        SubripError::Options(err)
    }
}

// Conversion to io::Error for callers working in io::Result
impl From<SubripError> for io::Error {
    fn from(err: SubripError) -> Self {
        match err {
            SubripError::Other(inner) => inner,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

// Type alias for Result with SubripError
pub type SubripResult<T> = Result<T, SubripError>;

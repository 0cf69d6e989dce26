use crate::timecode::Timecode;
use serde::Serialize;

/// Line terminator style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
    Cr,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
            LineEnding::Cr => "\r",
        }
    }

    /// Detect the terminator used by the first line break in `content`
    pub fn detect(content: &str) -> Option<LineEnding> {
        let pos = content.find(['\r', '\n'])?;
        let rest = &content.as_bytes()[pos..];
        match rest {
            [b'\r', b'\n', ..] => Some(LineEnding::CrLf),
            [b'\r', ..] => Some(LineEnding::Cr),
            _ => Some(LineEnding::Lf),
        }
    }
}

/// One caption entry
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Cue {
    pub start: Timecode,
    pub end: Timecode,
    pub text: String,
    #[serde(skip)]
    pub line_ending: LineEnding,
}

impl Cue {
    pub fn new(start: Timecode, end: Timecode, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            line_ending: LineEnding::default(),
        }
    }

    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// `start --> end` in canonical form
    pub fn timecode_line(&self) -> String {
        format!("{} --> {}", self.start, self.end)
    }

    pub fn duration_ms(&self) -> u64 {
        self.end.total_millis().saturating_sub(self.start.total_millis())
    }
}

/// Block as scanned from the file, before any timecode handling
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawCue {
    pub index: String,
    pub timeline: String,
    pub text: String,
}

/// What to do when a timeline is out of order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TimelinePolicy {
    /// Clamp the offending start time and keep going
    #[default]
    Repair,
    /// Abort the parse with a timeline error
    Strict,
}

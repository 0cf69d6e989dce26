mod assembler;
mod builder;
mod file;
mod options;
mod parser;
mod transform;
mod types;

pub use file::SubripFile;
pub use options::{OptionValue, Options, Replacements, OPTION_KEYS};
pub use transform::{CueTextTransform, Verbatim};
pub use types::{Cue, LineEnding, RawCue, TimelinePolicy};

// Exports for testing
pub use parser::scan_blocks;

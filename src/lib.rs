pub mod timecode;
pub use timecode::{normalize, reconcile, PairStatus, Reconciled, Timecode};

pub mod subrip;
pub use subrip::{
    Cue, CueTextTransform, LineEnding, OptionValue, Options, Replacements, SubripFile,
    TimelinePolicy, Verbatim,
};

pub mod errors;
pub use errors::{
    OptionsError, SubripError, SubripResult, TimecodeError, TimelineError, TimelineViolation,
};

/// Parse SubRip content in one call.
///
/// `Ok(None)` means the content holds no SubRip block.
pub fn parse_str(content: &str) -> SubripResult<Option<SubripFile>> {
    let mut file = SubripFile::with_content(content);
    Ok(file.parse()?.map(|_| file))
}

/// Render cues as SubRip content, in start order
pub fn build_cues(cues: Vec<Cue>) -> String {
    let mut file = SubripFile::new();
    for cue in cues {
        file.add_cue(cue);
    }
    file.build().to_string()
}

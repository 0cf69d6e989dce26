use super::types::RawCue;
use log::debug;

pub(crate) const TIMELINE_DELIMITER: &str = "-->";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    ExpectIndex,
    ExpectTimeline,
    CollectingText,
}

/// Group `\n`-separated lines into raw (index, timeline, text) blocks.
///
/// A line without the arrow where a timeline is expected is discarded and the
/// scanner resynchronizes on the next line. Text lines are joined with a
/// single space; a block is only emitted once a blank line closes it, so a
/// final block without a trailing line break is dropped.
pub fn scan_blocks(content: &str) -> Vec<RawCue> {
    let mut blocks = Vec::new();
    let mut state = ParserState::ExpectIndex;
    let mut current = RawCue::default();
    let mut text_lines: Vec<&str> = Vec::new();

    for line in content.split('\n') {
        match state {
            ParserState::ExpectIndex => {
                current.index = line.trim().to_string();
                state = ParserState::ExpectTimeline;
            }
            ParserState::ExpectTimeline => {
                let timeline = line.trim();
                if !timeline.contains(TIMELINE_DELIMITER) {
                    debug!("Discarding line without timeline: {:?}", timeline);
                    state = ParserState::ExpectIndex;
                    continue;
                }
                current.timeline = timeline.to_string();
                state = ParserState::CollectingText;
            }
            ParserState::CollectingText => {
                if line.trim().is_empty() {
                    current.text = text_lines.join(" ");
                    text_lines.clear();
                    blocks.push(std::mem::take(&mut current));
                    state = ParserState::ExpectIndex;
                } else {
                    text_lines.push(line);
                }
            }
        }
    }

    blocks
}

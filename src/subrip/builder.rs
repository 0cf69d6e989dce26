use super::options::Options;
use super::transform::CueTextTransform;
use super::types::{Cue, LineEnding};
use std::ops::RangeInclusive;

/// Resolve a requested `[from, to]` window against `count` cues.
///
/// Bounds outside the collection fall back to the first/last cue. Returns
/// `None` when there is nothing to render.
pub(crate) fn clamp_range(count: usize, from: i64, to: i64) -> Option<RangeInclusive<usize>> {
    if count == 0 {
        return None;
    }
    let last = count - 1;

    let from = if from < 0 || from as u64 >= count as u64 {
        0
    } else {
        from as usize
    };
    let to = if to < 0 || to as u64 >= count as u64 {
        last
    } else {
        to as usize
    };

    if from > to {
        return None;
    }
    Some(from..=to)
}

/// Render already sorted cues, numbering the blocks from 1
pub(crate) fn render_cues(
    cues: &[Cue],
    line_ending: LineEnding,
    options: &Options,
    transform: &dyn CueTextTransform,
) -> String {
    let eol = line_ending.as_str();
    let mut buffer = String::new();

    for (i, cue) in cues.iter().enumerate() {
        buffer.push_str(&(i + 1).to_string());
        buffer.push_str(eol);
        buffer.push_str(&cue.timecode_line());
        buffer.push_str(eol);
        buffer.push_str(&transform.render(&cue.text, options));
        buffer.push_str(eol);
        buffer.push_str(eol);
    }

    buffer
}

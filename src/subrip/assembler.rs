use super::parser::TIMELINE_DELIMITER;
use super::types::{Cue, LineEnding, RawCue, TimelinePolicy};
use crate::errors::{SubripResult, TimecodeError, TimelineError, TimelineViolation};
use crate::timecode::{parse_timecode, reconcile, PairStatus, Timecode};
use log::{debug, warn};

/// Turn scanned blocks into cues, repairing or rejecting bad timelines per `policy`.
///
/// A start before the previous cue's end is moved up to it; a start after the
/// cue's own end is clamped down, unless that would cross the previous end, in
/// which case the cue collapses to zero length at the previous end. Only a
/// start after the end counts as a violation in strict mode, zero-length cues
/// are accepted. Blocks whose text is blank are dropped and do not advance the
/// previous-end tracker.
pub(crate) fn assemble_cues(
    blocks: &[RawCue],
    line_ending: LineEnding,
    policy: TimelinePolicy,
) -> SubripResult<Vec<Cue>> {
    let mut cues = Vec::with_capacity(blocks.len());
    let mut previous_end: Option<Timecode> = None;

    for block in blocks {
        let (mut start, end) = match read_timeline(&block.timeline) {
            Ok(pair) => pair,
            Err(e) if policy == TimelinePolicy::Repair => {
                warn!("Skipping block {:?}: {}", block.index, e);
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        if let Some(previous) = previous_end {
            let check = reconcile(previous, start, true);
            if !check.is_valid() {
                if policy == TimelinePolicy::Strict {
                    return Err(TimelineError::new(
                        TimelineViolation::StartsBeforePrevious,
                        format!(
                            "Starting time invalid: {} (previous cue ends at {})",
                            start, previous
                        ),
                    )
                    .into());
                }
                debug!(
                    "Block {:?}: start {} moved to previous end {}",
                    block.index, start, previous
                );
                start = previous;
            }
        }

        let own = reconcile(start, end, false);
        let (start, end) = match own.status {
            PairStatus::Clamped if policy == TimelinePolicy::Strict => {
                return Err(TimelineError::new(
                    TimelineViolation::EndsBeforeStart,
                    format!("Ending time invalid: {} (starts at {})", end, start),
                )
                .into());
            }
            // clamping down would land before the previous cue, so hold the
            // start and bring the end up to it
            PairStatus::Clamped if previous_end.is_some_and(|previous| own.start < previous) => {
                debug!(
                    "Block {:?}: end {} raised to start {}",
                    block.index, end, start
                );
                (start, start)
            }
            PairStatus::Clamped => {
                debug!(
                    "Block {:?}: start {} clamped to end {}",
                    block.index, start, end
                );
                (own.start, own.end)
            }
            PairStatus::Ordered | PairStatus::Coincident => (own.start, own.end),
        };

        if block.text.trim().is_empty() {
            debug!("Dropping block {:?} with empty text", block.index);
            continue;
        }

        cues.push(Cue::new(start, end, block.text.clone()).with_line_ending(line_ending));
        previous_end = Some(end);
    }

    Ok(cues)
}

/// Split `start --> end` and read both sides
fn read_timeline(timeline: &str) -> Result<(Timecode, Timecode), TimecodeError> {
    let (start_raw, end_raw) = timeline
        .split_once(TIMELINE_DELIMITER)
        .ok_or_else(|| TimecodeError::new(format!("Missing timeline delimiter: '{}'", timeline)))?;
    // positional suffixes such as "X1:40 X2:600" follow the end time
    let end_raw = end_raw.split_whitespace().next().unwrap_or_default();

    Ok((parse_timecode(start_raw)?, parse_timecode(end_raw)?))
}

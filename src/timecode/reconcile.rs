use super::types::Timecode;
use serde::Serialize;

/// How a (start, end) pair related before reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PairStatus {
    /// `start < end`, nothing changed
    Ordered,
    /// `start == end`, nothing changed
    Coincident,
    /// `start > end`, start was clamped down to end
    Clamped,
}

/// Result of reconciling a timeline pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reconciled {
    pub start: Timecode,
    pub end: Timecode,
    pub status: PairStatus,
    pub allow_equal: bool,
}

impl Reconciled {
    /// Whether the original pair was acceptable without repair
    pub fn is_valid(&self) -> bool {
        match self.status {
            PairStatus::Ordered => true,
            PairStatus::Coincident => self.allow_equal,
            PairStatus::Clamped => false,
        }
    }
}

/// Compare two timecodes and clamp `start` down to `end` when they are out of order.
///
/// The repaired pair is the same whatever `allow_equal` says; the flag only
/// decides whether a coincident pair counts as valid.
pub fn reconcile(start: Timecode, end: Timecode, allow_equal: bool) -> Reconciled {
    let (start, status) = if start > end {
        (end, PairStatus::Clamped)
    } else if start == end {
        (start, PairStatus::Coincident)
    } else {
        (start, PairStatus::Ordered)
    };

    Reconciled {
        start,
        end,
        status,
        allow_equal,
    }
}

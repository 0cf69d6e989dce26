mod normalize;
mod reconcile;
mod types;

pub use normalize::{normalize, parse_timecode};
pub use reconcile::{reconcile, PairStatus, Reconciled};
pub use types::Timecode;

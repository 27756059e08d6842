//! Merge strategies for [`BoundedFeed::upsert`](crate::BoundedFeed::upsert).

use crate::Accumulate;

/// Keep the incoming record, discarding the existing one.
pub fn last_write_wins<T>(_existing: &T, incoming: T) -> T {
    incoming
}

/// Fold the incoming sample into the existing aggregate.
pub fn accumulate<T: Accumulate>(existing: &T, incoming: T) -> T {
    existing.accumulate(incoming)
}

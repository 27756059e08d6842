/// A record that identifies the bucket it belongs to.
///
/// Two records with equal keys never coexist in a feed that is only mutated
/// through [`BoundedFeed::upsert`](crate::BoundedFeed::upsert).
pub trait Keyed {
    type Key: PartialEq;

    fn key(&self) -> &Self::Key;
}

/// A running aggregate that can absorb a newer sample for the same bucket.
pub trait Accumulate {
    fn accumulate(&self, incoming: Self) -> Self;
}

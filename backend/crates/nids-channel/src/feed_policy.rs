use crate::ApplyOutcome;

use nids_feed::{BoundedFeed, Keyed, Upsert};

/// How a live feed folds an incoming record into its bounded feed
pub trait FeedPolicy<T>: Send {
    fn apply(&mut self, feed: &mut BoundedFeed<T>, record: T) -> ApplyOutcome;

    /// Label used in status output
    fn kind(&self) -> &'static str;
}

/// Discrete events: append and truncate
#[derive(Debug, Clone, Copy, Default)]
pub struct AppendPolicy;

impl<T> FeedPolicy<T> for AppendPolicy {
    fn apply(&mut self, feed: &mut BoundedFeed<T>, record: T) -> ApplyOutcome {
        match feed.append(record) {
            Some(_) => ApplyOutcome::Evicted,
            None => ApplyOutcome::Inserted,
        }
    }

    fn kind(&self) -> &'static str {
        "append"
    }
}

/// Running per-bucket aggregates: insert-or-merge by the record's key
#[derive(Debug, Clone, Copy)]
pub struct UpsertPolicy<M> {
    merge: M,
}

impl<M> UpsertPolicy<M> {
    pub fn new(merge: M) -> Self {
        Self { merge }
    }
}

impl<T, M> FeedPolicy<T> for UpsertPolicy<M>
where
    T: Keyed,
    M: Fn(&T, T) -> T + Send,
{
    fn apply(&mut self, feed: &mut BoundedFeed<T>, record: T) -> ApplyOutcome {
        match feed.upsert(record, &self.merge) {
            Upsert::Merged => ApplyOutcome::Merged,
            Upsert::Inserted => ApplyOutcome::Inserted,
            Upsert::InsertedEvicting(_) => ApplyOutcome::Evicted,
        }
    }

    fn kind(&self) -> &'static str {
        "upsert"
    }
}

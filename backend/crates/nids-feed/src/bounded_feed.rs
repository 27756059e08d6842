use crate::{FeedError, Keyed, Result as FeedErrorResult, Upsert};

use std::collections::VecDeque;
use std::panic::Location;

use error_location::ErrorLocation;

/// Capped, ordered view of the most recent records received from a channel.
///
/// Records are stored oldest-first: the newest record is always the last
/// element. After any mutation `len() <= capacity()` holds.
#[derive(Debug, Clone)]
pub struct BoundedFeed<T> {
    capacity: usize,
    items: VecDeque<T>,
}

impl<T> BoundedFeed<T> {
    /// Create an empty feed retaining at most `capacity` records
    #[track_caller]
    pub fn new(capacity: usize) -> FeedErrorResult<Self> {
        if capacity == 0 {
            return Err(FeedError::ZeroCapacity {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            capacity,
            items: VecDeque::with_capacity(capacity),
        })
    }

    /// Create a feed from an initial snapshot (oldest-first).
    /// A seed longer than `capacity` keeps only its newest records.
    #[track_caller]
    pub fn seeded<I>(capacity: usize, initial: I) -> FeedErrorResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut feed = Self::new(capacity)?;
        for record in initial {
            feed.append(record);
        }
        Ok(feed)
    }

    /// Insert `record` at the newest end, dropping the oldest record if the
    /// feed would exceed its capacity. Returns the dropped record.
    pub fn append(&mut self, record: T) -> Option<T> {
        self.items.push_back(record);
        self.truncate_oldest()
    }

    /// Insert-or-merge keyed by the record's own key.
    ///
    /// If an element with the same key exists it is replaced in place by
    /// `merge(existing, record)`; otherwise `record` is appended. The lookup
    /// key always comes from `record`, so two records sharing a key never
    /// coexist.
    pub fn upsert<M>(&mut self, record: T, merge: M) -> Upsert<T>
    where
        T: Keyed,
        M: FnOnce(&T, T) -> T,
    {
        let slot = self.items.iter().position(|item| item.key() == record.key());
        match slot {
            Some(index) => {
                let merged = merge(&self.items[index], record);
                self.items[index] = merged;
                Upsert::Merged
            }
            None => match self.append(record) {
                Some(evicted) => Upsert::InsertedEvicting(evicted),
                None => Upsert::Inserted,
            },
        }
    }

    /// Copy of the current contents, oldest-first
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.iter().cloned().collect()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }

    /// Newest record first, for renderers that list most recent at the top
    pub fn iter_newest_first(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }

    pub fn latest(&self) -> Option<&T> {
        self.items.back()
    }

    pub fn find(&self, key: &T::Key) -> Option<&T>
    where
        T: Keyed,
    {
        self.items.iter().find(|item| item.key() == key)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn truncate_oldest(&mut self) -> Option<T> {
        // Mutators insert one record at a time, so at most one can overflow.
        if self.items.len() > self.capacity {
            self.items.pop_front()
        } else {
            None
        }
    }
}

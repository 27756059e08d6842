/// What an upsert did to the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Upsert<T> {
    /// An element with the same key existed and was replaced by the merge result
    Merged,
    /// No element matched; the record was inserted at the newest end
    Inserted,
    /// Inserted, and the oldest element was dropped to stay within capacity
    InsertedEvicting(T),
}

impl<T> Upsert<T> {
    pub fn is_merged(&self) -> bool {
        matches!(self, Self::Merged)
    }

    /// The record dropped to make room, if any
    pub fn evicted(self) -> Option<T> {
        match self {
            Self::InsertedEvicting(evicted) => Some(evicted),
            _ => None,
        }
    }
}

mod bounded_feed;
mod error;
mod keyed;
pub mod merge;
mod upsert;

pub use bounded_feed::BoundedFeed;
pub use error::{FeedError, Result};
pub use keyed::{Accumulate, Keyed};
pub use upsert::Upsert;

#[cfg(test)]
mod tests;

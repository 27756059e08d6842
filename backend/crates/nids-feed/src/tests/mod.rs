
use crate::{Accumulate, Keyed};

/// Per-day severity bucket used as an upsert fixture
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DayCount {
    pub(crate) date: String,
    pub(crate) critical: u32,
}

impl DayCount {
    pub(crate) fn new(date: &str, critical: u32) -> Self {
        Self {
            date: date.to_string(),
            critical,
        }
    }
}

impl Keyed for DayCount {
    type Key = String;

    fn key(&self) -> &String {
        &self.date
    }
}

impl Accumulate for DayCount {
    fn accumulate(&self, incoming: Self) -> Self {
        Self {
            date: self.date.clone(),
            critical: self.critical + incoming.critical,
        }
    }
}

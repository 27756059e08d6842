use crate::{Result as CoreErrorResult, Severity, Validate};

use chrono::NaiveDate;
use nids_feed::{Accumulate, Keyed};
use serde::{Deserialize, Serialize};

/// Alert counts by severity for one calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCount {
    pub date: NaiveDate,
    #[serde(default)]
    pub critical: u32,
    #[serde(default)]
    pub high: u32,
    #[serde(default)]
    pub medium: u32,
    #[serde(default)]
    pub low: u32,
}

impl SeverityCount {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            critical: 0,
            high: 0,
            medium: 0,
            low: 0,
        }
    }

    /// A single-alert sample for `date`. Informational alerts count nowhere.
    pub fn single(date: NaiveDate, severity: Severity) -> Self {
        let mut count = Self::empty(date);
        match severity {
            Severity::Critical => count.critical = 1,
            Severity::High => count.high = 1,
            Severity::Medium => count.medium = 1,
            Severity::Low => count.low = 1,
            Severity::Info => {}
        }
        count
    }

    pub fn total(&self) -> u64 {
        u64::from(self.critical) + u64::from(self.high) + u64::from(self.medium) + u64::from(self.low)
    }
}

impl Keyed for SeverityCount {
    type Key = NaiveDate;

    fn key(&self) -> &NaiveDate {
        &self.date
    }
}

impl Accumulate for SeverityCount {
    fn accumulate(&self, incoming: Self) -> Self {
        Self {
            date: self.date,
            critical: self.critical.saturating_add(incoming.critical),
            high: self.high.saturating_add(incoming.high),
            medium: self.medium.saturating_add(incoming.medium),
            low: self.low.saturating_add(incoming.low),
        }
    }
}

impl Validate for SeverityCount {
    fn validate(&self) -> CoreErrorResult<()> {
        Ok(())
    }
}

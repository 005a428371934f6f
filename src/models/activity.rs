//! Calendar activity data structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A titled calendar entry scraped from the page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Activity {
    /// Activity title (digit-free fragment)
    pub title: String,

    /// Date tokens that followed the title, in document order
    pub dates: Vec<String>,
}

impl Activity {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            dates: Vec::new(),
        }
    }
}

/// One (title, date) pair filed under an academic period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PeriodEntry {
    pub title: String,
    pub date: String,
}

/// Entries keyed by period label, ordered by label.
pub type PeriodBuckets = BTreeMap<String, Vec<PeriodEntry>>;

/// Outcome of one calendar pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarReport {
    /// Year the buckets were filtered to
    pub year: i32,

    /// Number of text fragments extracted from the page
    pub fragment_count: usize,

    /// Activities found by the segmenter
    pub activities: Vec<Activity>,

    /// Period buckets that mention `year`
    pub periods: PeriodBuckets,

    /// Rendered reply text
    pub text: String,
}

impl CalendarReport {
    /// Total number of entries across all retained periods.
    pub fn entry_count(&self) -> usize {
        self.periods.values().map(Vec::len).sum()
    }
}

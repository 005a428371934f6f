// src/services/periods.rs

//! Period grouping and year filtering.

use chrono::{Datelike, Local};

use crate::models::{Activity, PeriodBuckets, PeriodEntry};

/// Current local calendar year.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Pair each activity's date tokens as `(date, period label)` and bucket
/// the resulting entries by label.
///
/// A trailing unpaired token is dropped.
pub fn group_by_period(activities: &[Activity]) -> PeriodBuckets {
    let mut buckets = PeriodBuckets::new();

    for activity in activities {
        let mut pairs = activity.dates.chunks_exact(2);
        for pair in pairs.by_ref() {
            buckets
                .entry(pair[1].clone())
                .or_default()
                .push(PeriodEntry {
                    title: activity.title.clone(),
                    date: pair[0].clone(),
                });
        }

        if let [leftover] = pairs.remainder() {
            log::debug!(
                "Dropping unpaired date token {:?} of {:?}",
                leftover,
                activity.title
            );
        }
    }

    buckets
}

/// Keep the buckets whose label or any entry date mentions `year`.
pub fn filter_by_year(buckets: PeriodBuckets, year: i32) -> PeriodBuckets {
    let needle = year.to_string();
    buckets
        .into_iter()
        .filter(|(label, entries)| {
            label.contains(&needle) || entries.iter().any(|e| e.date.contains(&needle))
        })
        .collect()
}

use crate::model::{DaySample, Sample};
use chrono::{DateTime, NaiveDate};

/// UTC calendar day of an epoch-millisecond timestamp.
/// Out-of-range timestamps collapse to the epoch date.
pub fn utc_date(timestamp_ms: i64) -> NaiveDate {
    DateTime::from_timestamp_millis(timestamp_ms)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

/// Collapses an intraday series into one sample per UTC calendar day.
///
/// The representative of each day is its first chronological sample; the
/// streak and extremum computations rely on that exact choice, so later
/// samples of the same day are discarded, never averaged.
pub fn bucket_by_day(samples: &[Sample]) -> Vec<DaySample> {
    let mut days = Vec::new();
    // Epoch sentinel, distinct from any real sampled day.
    let mut previous_date = NaiveDate::default();

    for sample in samples {
        let date = utc_date(sample.timestamp_ms);
        if date != previous_date {
            days.push(DaySample {
                date,
                sample: *sample,
            });
        }
        previous_date = date;
    }

    days
}

use crate::models::{DayBucket, VisitRecord, WeeklyStats};
use chrono::{Duration, NaiveDate};

/// Fixed size of the rolling window, in days. The per-day average always
/// divides by this, even when most of the window is empty.
const WINDOW_DAYS: u64 = 7;

/// Counts visits per calendar day over today-6..today inclusive, oldest
/// first. The seven keys are seeded before any record is looked at, so the
/// output shape never depends on the input: always seven consecutive dates,
/// zero-filled. Records whose date string matches none of the keys (outside
/// the window, malformed, or empty) contribute nothing.
pub fn weekly_buckets(today: NaiveDate, records: &[VisitRecord]) -> Vec<DayBucket> {
    let mut buckets = Vec::with_capacity(WINDOW_DAYS as usize);
    for offset in (0..WINDOW_DAYS as i64).rev() {
        buckets.push(DayBucket {
            date: (today - Duration::days(offset)).to_string(),
            count: 0,
        });
    }

    for record in records {
        if let Some(bucket) = buckets.iter_mut().find(|bucket| bucket.date == record.date) {
            bucket.count += 1;
        }
    }

    buckets
}

pub fn weekly_stats(today: NaiveDate, records: &[VisitRecord]) -> WeeklyStats {
    let buckets = weekly_buckets(today, records);
    let total: u64 = buckets.iter().map(|bucket| bucket.count).sum();

    WeeklyStats {
        buckets,
        total,
        average: total as f64 / WINDOW_DAYS as f64,
    }
}

/// Same-day filter in stored (append) order.
pub fn today_visits<'a>(today: NaiveDate, records: &'a [VisitRecord]) -> Vec<&'a VisitRecord> {
    let key = today.to_string();
    records.iter().filter(|record| record.date == key).collect()
}

pub fn today_count(today: NaiveDate, records: &[VisitRecord]) -> u64 {
    today_visits(today, records).len() as u64
}

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Fixed-offset clock injected into the app state. All "today" calculations
/// go through this value instead of the ambient system time zone; the app
/// default is UTC+9.
#[derive(Debug, Clone, Copy)]
pub struct Clock {
    offset: FixedOffset,
}

impl Clock {
    pub fn fixed_hours(hours: i32) -> Option<Self> {
        let offset = FixedOffset::east_opt(hours * 3600)?;
        Some(Self { offset })
    }

    pub fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }

    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    pub fn stamp(&self) -> Stamp {
        stamp_at(self.now())
    }
}

/// Date/time/datetime strings stamped onto a new record.
#[derive(Debug, Clone)]
pub struct Stamp {
    pub date: String,
    pub time: String,
    pub datetime: String,
}

pub fn stamp_at(now: DateTime<FixedOffset>) -> Stamp {
    Stamp {
        date: now.format("%Y-%m-%d").to_string(),
        time: now.format("%H:%M:%S").to_string(),
        datetime: now.format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stamp_formats_all_three_fields() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = offset.with_ymd_and_hms(2024, 6, 10, 16, 10, 0).unwrap();
        let stamp = stamp_at(now);
        assert_eq!(stamp.date, "2024-06-10");
        assert_eq!(stamp.time, "16:10:00");
        assert_eq!(stamp.datetime, "2024-06-10 16:10:00");
    }

    #[test]
    fn fixed_hours_rejects_out_of_range_offsets() {
        assert!(Clock::fixed_hours(9).is_some());
        assert!(Clock::fixed_hours(-25).is_none());
    }
}

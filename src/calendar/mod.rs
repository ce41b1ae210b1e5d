use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Reports whether the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Business-day calendar over an externally supplied set of observed holidays.
///
/// Counting convention: `business_days_between(start, end)` covers the
/// half-open-from-the-left interval `(start, end]` — the start date itself is
/// excluded, the end date is included. A Monday-to-Monday week therefore
/// counts five business days.
#[derive(Debug, Clone, Default)]
pub struct BusinessCalendar {
    holidays: BTreeSet<NaiveDate>,
}

impl BusinessCalendar {
    /// Creates a calendar with no observed holidays.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a calendar observing the given holidays.
    pub fn with_holidays(holidays: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            holidays: holidays.into_iter().collect(),
        }
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// A weekday that is not an observed holiday.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !is_weekend(date) && !self.is_holiday(date)
    }

    /// Counts business days in `(start, end]`. Returns 0 when `start >= end`,
    /// never a negative count.
    pub fn business_days_between(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        if start >= end {
            return 0;
        }
        let mut count = 0;
        let mut date = start + Duration::days(1);
        while date <= end {
            if self.is_business_day(date) {
                count += 1;
            }
            date += Duration::days(1);
        }
        count
    }
}

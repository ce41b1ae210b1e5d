//! Payday resolution: the two income dates bracketing a reference day.
//!
//! Everything here is a pure function of its arguments. The reference date is
//! always passed in explicitly so the same configuration can be resolved
//! against any day without hidden state.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::is_weekend;
use crate::domain::config::{BudgetConfig, WeekendPolicy};

/// Resolved `[last_payment, next_payment)` interval bracketing a reference
/// date. Both ends are independently resolved occurrences of the configured
/// income day; month-length clamping and weekend snapping can make the
/// interval irregular.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaydayWindow {
    pub last_payment: NaiveDate,
    pub next_payment: NaiveDate,
}

impl PaydayWindow {
    /// Resolves both payday occurrences around `today`.
    pub fn resolve(today: NaiveDate, config: &BudgetConfig) -> Self {
        Self {
            last_payment: last_payment(today, config.day, config.weekend_policy),
            next_payment: next_payment(today, config.day, config.weekend_policy),
        }
    }

    /// Whole calendar days spanned by the window.
    pub fn days(&self) -> i64 {
        (self.next_payment - self.last_payment).num_days()
    }

    /// Fraction of the window elapsed at `today`, rounded to two decimals.
    pub fn elapsed_fraction(&self, today: NaiveDate) -> f64 {
        let elapsed = (today - self.last_payment).num_days() as f64;
        let span = self.days() as f64;
        ((elapsed / span) * 100.0).round() / 100.0
    }
}

/// Nearest future occurrence of the configured income day, strictly after
/// `today`, snapped off weekends per `policy`.
///
/// Weekend snapping can drag an occurrence back onto `today` itself (a
/// Sunday-the-15th payday under a roll-back policy, seen on Friday the 13th);
/// such an occurrence no longer lies ahead, so resolution moves on to the
/// following month.
pub fn next_payment(today: NaiveDate, day: u32, policy: WeekendPolicy) -> NaiveDate {
    let (mut year, mut month) = (today.year(), today.month());
    loop {
        let candidate = anchor_in_month(year, month, day);
        if candidate > today {
            let adjusted = adjust_weekend(candidate, policy);
            if adjusted > today {
                return adjusted;
            }
        }
        let (next_year, next_month) = month_after(year, month);
        year = next_year;
        month = next_month;
    }
}

/// Most recent occurrence of the configured income day, on or before `today`,
/// snapped off weekends per `policy`.
///
/// Mirror image of [`next_payment`]: an occurrence whose weekend snap lands
/// after `today` has not happened yet, so resolution steps back another month.
pub fn last_payment(today: NaiveDate, day: u32, policy: WeekendPolicy) -> NaiveDate {
    let (mut year, mut month) = (today.year(), today.month());
    loop {
        let candidate = anchor_in_month(year, month, day);
        if candidate <= today {
            let adjusted = adjust_weekend(candidate, policy);
            if adjusted <= today {
                return adjusted;
            }
        }
        let (prev_year, prev_month) = month_before(year, month);
        year = prev_year;
        month = prev_month;
    }
}

/// Places `day` in the given month, clamping past the month's last day.
fn anchor_in_month(year: i32, month: u32, day: u32) -> NaiveDate {
    let clamped = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, clamped)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 1).unwrap())
}

fn month_after(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn month_before(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = month_after(year, month);
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = first_next - Duration::days(1);
    last_current.day()
}

/// Applied after month rollover and day clamping, never before.
fn adjust_weekend(date: NaiveDate, policy: WeekendPolicy) -> NaiveDate {
    if !is_weekend(date) {
        return date;
    }
    match policy {
        WeekendPolicy::NextMonday => next_occurring(date, Weekday::Mon),
        WeekendPolicy::PreviousFriday => previous_occurring(date, Weekday::Fri),
    }
}

fn next_occurring(date: NaiveDate, target: Weekday) -> NaiveDate {
    let mut date = date + Duration::days(1);
    while date.weekday() != target {
        date += Duration::days(1);
    }
    date
}

fn previous_occurring(date: NaiveDate, target: Weekday) -> NaiveDate {
    let mut date = date - Duration::days(1);
    while date.weekday() != target {
        date -= Duration::days(1);
    }
    date
}

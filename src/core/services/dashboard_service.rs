use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::BusinessCalendar;
use crate::domain::profile::Profile;
use crate::schedule::PaydayWindow;

use super::{BalanceService, ServiceError, ServiceResult};

/// Flat record backing the dashboard's budgeting panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardData {
    pub total_amount_cents: i64,
    pub days_until_payment: i64,
    pub overhead_per_day_cents: i64,
    /// Elapsed share of the pay period, a two-decimal fraction in `[0, 1]`.
    pub percentage_until_income: f64,
    pub last_payment: NaiveDate,
    pub next_payment: NaiveDate,
    pub weekdays_until_payment: i64,
    pub weekend_until_payment: i64,
}

pub struct DashboardService;

impl DashboardService {
    /// Derives the dashboard record for `today`.
    ///
    /// Returns `Ok(None)` when the profile carries no payday configuration —
    /// a valid state, not an error. `holidays` is only honored when the
    /// configuration asks for holiday observance.
    pub fn overview(
        profile: &Profile,
        today: NaiveDate,
        holidays: &[NaiveDate],
    ) -> ServiceResult<Option<DashboardData>> {
        let config = match profile.config.as_ref() {
            Some(config) => config,
            None => return Ok(None),
        };

        let window = PaydayWindow::resolve(today, config);
        let days_until_payment = window.days();
        if days_until_payment == 0 {
            return Err(ServiceError::DegenerateWindow);
        }

        let calendar = if config.observe_holidays {
            BusinessCalendar::with_holidays(holidays.iter().copied())
        } else {
            BusinessCalendar::new()
        };
        let total_amount_cents = BalanceService::total_available_cents(profile);
        let weekdays_until_payment = calendar.business_days_between(today, window.next_payment);

        Ok(Some(DashboardData {
            total_amount_cents,
            days_until_payment,
            overhead_per_day_cents: total_amount_cents / days_until_payment,
            percentage_until_income: window.elapsed_fraction(today),
            last_payment: window.last_payment,
            next_payment: window.next_payment,
            weekdays_until_payment,
            weekend_until_payment: days_until_payment - weekdays_until_payment,
        }))
    }
}

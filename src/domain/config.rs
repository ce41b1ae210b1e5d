use serde::{Deserialize, Serialize};

/// Bounds the configured income day: a full calendar month or the 20-day
/// span a work-month can guarantee.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DayScope {
    AllDays,
    WorkDaysOnly,
}

impl DayScope {
    /// Highest day-of-month this scope accepts.
    pub fn max_day(self) -> u32 {
        match self {
            DayScope::AllDays => 31,
            DayScope::WorkDaysOnly => 20,
        }
    }
}

/// How a payday landing on a weekend is moved onto a working day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WeekendPolicy {
    /// Roll forward to the following Monday.
    NextMonday,
    /// Roll back to the preceding Friday.
    PreviousFriday,
}

/// Per-user payday configuration driving the budgeting schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetConfig {
    /// Day of month (1-31) income is expected.
    pub day: u32,
    pub day_scope: DayScope,
    pub weekend_policy: WeekendPolicy,
    /// Expected income magnitude; informational, not used in the date math.
    pub income_cents: i64,
    /// When set, observed holidays count as non-business days.
    pub observe_holidays: bool,
}

impl BudgetConfig {
    /// Creates a configuration with the default scope and weekend handling.
    pub fn new(day: u32, income_cents: i64) -> Self {
        Self {
            day,
            day_scope: DayScope::AllDays,
            weekend_policy: WeekendPolicy::NextMonday,
            income_cents,
            observe_holidays: false,
        }
    }

    /// Sets the day scope.
    pub fn with_day_scope(mut self, scope: DayScope) -> Self {
        self.day_scope = scope;
        self
    }

    /// Sets the weekend adjustment policy.
    pub fn with_weekend_policy(mut self, policy: WeekendPolicy) -> Self {
        self.weekend_policy = policy;
        self
    }
}

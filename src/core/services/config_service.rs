use crate::domain::config::BudgetConfig;
use crate::domain::profile::Profile;

use super::{finish_validation, FieldError, ServiceResult};

/// Gatekeeper for payday configuration writes: an invalid configuration is
/// rejected here and never reaches the schedule or dashboard math.
pub struct ConfigService;

impl ConfigService {
    pub fn update(profile: &mut Profile, config: BudgetConfig) -> ServiceResult<()> {
        Self::validate(&config)?;
        profile.config = Some(config);
        profile.touch();
        Ok(())
    }

    pub fn clear(profile: &mut Profile) {
        profile.config = None;
        profile.touch();
    }

    pub fn validate(config: &BudgetConfig) -> ServiceResult<()> {
        let mut errors = Vec::new();
        let max_day = config.day_scope.max_day();
        if config.day < 1 || config.day > max_day {
            errors.push(FieldError::new(
                "day",
                format!("must be between 1 and {max_day}"),
            ));
        }
        if config.income_cents < 0 {
            errors.push(FieldError::new(
                "income_cents",
                "must be greater than or equal to 0",
            ));
        }
        finish_validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::services::ServiceError;
    use crate::domain::config::DayScope;

    #[test]
    fn update_stores_a_valid_configuration() {
        let mut profile = Profile::new("Casa");
        let config = BudgetConfig::new(15, 250_000);
        ConfigService::update(&mut profile, config.clone()).expect("valid config");
        assert_eq!(profile.config, Some(config));
    }

    #[test]
    fn day_bound_depends_on_scope() {
        let full_month = BudgetConfig::new(25, 0).with_day_scope(DayScope::AllDays);
        ConfigService::validate(&full_month).expect("day 25 fits a full month");

        let work_month = BudgetConfig::new(25, 0).with_day_scope(DayScope::WorkDaysOnly);
        let err = ConfigService::validate(&work_month).expect_err("day 25 exceeds work month");
        match err {
            ServiceError::Validation(fields) => {
                assert_eq!(fields[0].field, "day");
                assert!(fields[0].message.contains("20"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn day_zero_and_negative_income_are_rejected() {
        let config = BudgetConfig::new(0, -1);
        let err = ConfigService::validate(&config).expect_err("invalid config");
        match err {
            ServiceError::Validation(fields) => {
                let names: Vec<_> = fields.iter().map(|f| f.field).collect();
                assert_eq!(names, vec!["day", "income_cents"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn rejected_configuration_leaves_profile_untouched() {
        let mut profile = Profile::new("Casa");
        let invalid = BudgetConfig::new(31, 0).with_day_scope(DayScope::WorkDaysOnly);
        ConfigService::update(&mut profile, invalid).expect_err("invalid config");
        assert!(profile.config.is_none());
    }
}

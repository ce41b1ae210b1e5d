mod common;

use common::setup_test_env;
use payday_core::core::services::{AccountService, BillService, ConfigService};
use payday_core::domain::account::Account;
use payday_core::domain::bill::Bill;
use payday_core::domain::config::{BudgetConfig, DayScope, WeekendPolicy};
use payday_core::domain::profile::Profile;

#[test]
fn profile_roundtrip_preserves_configuration_and_entities() {
    let mut manager = setup_test_env();

    let mut profile = Profile::new("Household");
    let account = Account::new("Checking", 150_000).with_color("0xabc");
    let account_id = account.id;
    AccountService::add(&mut profile, account).unwrap();
    BillService::add(&mut profile, Bill::new(account_id, "Rent", 90_000, 3)).unwrap();
    let config = BudgetConfig::new(20, 400_000)
        .with_day_scope(DayScope::WorkDaysOnly)
        .with_weekend_policy(WeekendPolicy::PreviousFriday);
    ConfigService::update(&mut profile, config.clone()).unwrap();

    manager.set_current(profile, None);
    manager.save_as("household").expect("save profile");
    manager.clear();

    manager.load("household").expect("load profile");
    let loaded = manager.current.as_ref().expect("profile loaded");
    assert_eq!(loaded.name, "Household");
    assert_eq!(loaded.config, Some(config));
    assert_eq!(loaded.accounts.len(), 1);
    assert_eq!(loaded.bills.len(), 1);
    assert_eq!(loaded.accounts[0].id, account_id);
}

#[test]
fn unconfigured_profiles_persist_without_a_config_key() {
    let mut manager = setup_test_env();
    manager.set_current(Profile::new("Fresh"), None);
    manager.save_as("fresh").expect("save profile");

    manager.clear();
    manager.load("fresh").expect("load profile");
    assert!(!manager.current.as_ref().unwrap().is_configured());
}

#[test]
fn list_profiles_reports_saved_names() {
    let mut manager = setup_test_env();
    manager.set_current(Profile::new("One"), None);
    manager.save_as("Profile One").expect("save first");
    manager.set_current(Profile::new("Two"), None);
    manager.save_as("profile-two").expect("save second");

    let names = manager.list_profiles().expect("list profiles");
    assert_eq!(
        names,
        vec!["profile_one".to_string(), "profile_two".to_string()]
    );
}

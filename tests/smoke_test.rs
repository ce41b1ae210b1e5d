mod common;

use chrono::NaiveDate;
use common::setup_test_env;
use payday_core::core::clock::{Clock, FixedClock};
use payday_core::core::services::{AccountService, BillService, ConfigService, DashboardService};
use payday_core::domain::account::Account;
use payday_core::domain::bill::Bill;
use payday_core::domain::config::BudgetConfig;
use payday_core::domain::profile::Profile;
use payday_core::init;

#[test]
fn configure_persist_and_derive_dashboard() {
    init();

    let mut manager = setup_test_env();
    let mut profile = Profile::new("SmokeTest");

    let account = Account::new("Checking", 93_000);
    let account_id = account.id;
    AccountService::add(&mut profile, account).unwrap();
    BillService::add(&mut profile, Bill::new(account_id, "Rent", 62_000, 1)).unwrap();
    ConfigService::update(&mut profile, BudgetConfig::new(15, 250_000)).unwrap();

    manager.set_current(profile, None);
    manager.save_as("smoke").expect("save profile");
    manager.clear();
    manager.load("smoke").expect("load profile");

    let clock = FixedClock::on_date(NaiveDate::from_ymd_opt(2021, 3, 15).unwrap());
    let data = DashboardService::overview(
        manager.current.as_ref().expect("profile loaded"),
        clock.today(),
        &[],
    )
    .expect("overview succeeds")
    .expect("profile is configured");

    assert_eq!(data.total_amount_cents, 31_000);
    assert_eq!(data.days_until_payment, 31);
    assert_eq!(data.overhead_per_day_cents, 1_000);
    assert_eq!(
        data.weekdays_until_payment + data.weekend_until_payment,
        data.days_until_payment
    );
}

use uuid::Uuid;

use crate::domain::account::{is_valid_color, Account};
use crate::domain::common::name_taken;
use crate::domain::profile::Profile;

use super::{finish_validation, FieldError, ServiceError, ServiceResult};

pub struct AccountService;

impl AccountService {
    pub fn add(profile: &mut Profile, account: Account) -> ServiceResult<()> {
        Self::validate(profile, None, &account)?;
        profile.accounts.push(account);
        profile.touch();
        Ok(())
    }

    pub fn edit(profile: &mut Profile, id: Uuid, changes: Account) -> ServiceResult<()> {
        Self::validate(profile, Some(id), &changes)?;
        let account = profile
            .account_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Account not found".into()))?;
        account.name = changes.name;
        account.color = changes.color;
        account.amount_cents = changes.amount_cents;
        profile.touch();
        Ok(())
    }

    pub fn remove(profile: &mut Profile, id: Uuid) -> ServiceResult<()> {
        if profile.bills.iter().any(|bill| bill.account_id == id) {
            return Err(ServiceError::Invalid("Account has linked bills".into()));
        }
        let before = profile.accounts.len();
        profile.accounts.retain(|account| account.id != id);
        if profile.accounts.len() == before {
            return Err(ServiceError::Invalid("Account not found".into()));
        }
        profile.touch();
        Ok(())
    }

    pub fn list(profile: &Profile) -> Vec<&Account> {
        profile.accounts.iter().collect()
    }

    fn validate(profile: &Profile, exclude: Option<Uuid>, account: &Account) -> ServiceResult<()> {
        if name_taken(&profile.accounts, exclude, &account.name) {
            return Err(ServiceError::Invalid(format!(
                "Account `{}` already exists",
                account.name
            )));
        }
        let mut errors = Vec::new();
        if account.name.trim().is_empty() {
            errors.push(FieldError::new("name", "can't be blank"));
        }
        if !is_valid_color(&account.color) {
            errors.push(FieldError::new(
                "color",
                "must be `0x` followed by 3 or 6 lowercase hex digits",
            ));
        }
        finish_validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::bill::Bill;

    #[test]
    fn add_rejects_duplicate_names() {
        let mut profile = Profile::new("Casa");
        AccountService::add(&mut profile, Account::new("Checking", 10_000)).unwrap();
        let err = AccountService::add(&mut profile, Account::new("  checking ", 0))
            .expect_err("duplicate should fail");
        assert!(format!("{err}").contains("already exists"));
    }

    #[test]
    fn add_reports_field_errors() {
        let mut profile = Profile::new("Casa");
        let account = Account::new("", 0).with_color("#ffffff");
        let err = AccountService::add(&mut profile, account).expect_err("invalid account");
        match err {
            ServiceError::Validation(fields) => {
                let names: Vec<_> = fields.iter().map(|f| f.field).collect();
                assert_eq!(names, vec!["name", "color"]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn remove_refuses_while_bills_reference_the_account() {
        let mut profile = Profile::new("Casa");
        let account = Account::new("Checking", 10_000);
        let account_id = account.id;
        AccountService::add(&mut profile, account).unwrap();
        profile
            .bills
            .push(Bill::new(account_id, "Rent", 7_000, 5));

        let err = AccountService::remove(&mut profile, account_id).expect_err("linked bills");
        assert!(format!("{err}").contains("linked bills"));

        profile.bills.clear();
        AccountService::remove(&mut profile, account_id).expect("remove account");
        assert!(profile.accounts.is_empty());
    }
}

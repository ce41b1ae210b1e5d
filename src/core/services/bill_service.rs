use uuid::Uuid;

use crate::domain::bill::Bill;
use crate::domain::profile::Profile;

use super::{finish_validation, FieldError, ServiceError, ServiceResult};

pub struct BillService;

impl BillService {
    pub fn add(profile: &mut Profile, bill: Bill) -> ServiceResult<()> {
        Self::ensure_account_exists(profile, bill.account_id)?;
        Self::validate(&bill)?;
        profile.bills.push(bill);
        profile.touch();
        Ok(())
    }

    pub fn edit(profile: &mut Profile, id: Uuid, changes: Bill) -> ServiceResult<()> {
        Self::ensure_account_exists(profile, changes.account_id)?;
        Self::validate(&changes)?;
        let bill = profile
            .bill_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Bill not found".into()))?;
        bill.account_id = changes.account_id;
        bill.name = changes.name;
        bill.amount_cents = changes.amount_cents;
        bill.payment_day = changes.payment_day;
        bill.repetition = changes.repetition;
        profile.touch();
        Ok(())
    }

    pub fn remove(profile: &mut Profile, id: Uuid) -> ServiceResult<()> {
        let before = profile.bills.len();
        profile.bills.retain(|bill| bill.id != id);
        if profile.bills.len() == before {
            return Err(ServiceError::Invalid("Bill not found".into()));
        }
        profile.touch();
        Ok(())
    }

    /// Marks the bill settled; it stops reducing the available balance.
    pub fn mark_payed(profile: &mut Profile, id: Uuid) -> ServiceResult<()> {
        Self::set_payed(profile, id, true)
    }

    /// Returns the bill to pending; it deducts from the available balance again.
    pub fn mark_pending(profile: &mut Profile, id: Uuid) -> ServiceResult<()> {
        Self::set_payed(profile, id, false)
    }

    pub fn list_for_account<'a>(profile: &'a Profile, account_id: Uuid) -> Vec<&'a Bill> {
        profile.bills_for(account_id).collect()
    }

    fn set_payed(profile: &mut Profile, id: Uuid, payed: bool) -> ServiceResult<()> {
        let bill = profile
            .bill_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Bill not found".into()))?;
        bill.payed = payed;
        profile.touch();
        Ok(())
    }

    fn ensure_account_exists(profile: &Profile, account_id: Uuid) -> ServiceResult<()> {
        if profile.account(account_id).is_some() {
            Ok(())
        } else {
            Err(ServiceError::Invalid(
                "Linked account does not exist".into(),
            ))
        }
    }

    fn validate(bill: &Bill) -> ServiceResult<()> {
        let mut errors = Vec::new();
        if bill.name.trim().is_empty() {
            errors.push(FieldError::new("name", "can't be blank"));
        }
        if bill.amount_cents <= 0 {
            errors.push(FieldError::new("amount_cents", "must be greater than 0"));
        }
        if !(1..=31).contains(&bill.payment_day) {
            errors.push(FieldError::new(
                "payment_day",
                "must be between 1 and 31",
            ));
        }
        finish_validation(errors)
    }
}

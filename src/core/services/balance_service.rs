use uuid::Uuid;

use crate::domain::profile::Profile;

use super::{ServiceError, ServiceResult};

/// Live balance aggregation: always computed from the current account and
/// bill state, never cached.
pub struct BalanceService;

impl BalanceService {
    /// Available balance of one account: its amount minus the pending bills
    /// drawn against it. A settled bill no longer deducts.
    pub fn account_available_cents(profile: &Profile, account_id: Uuid) -> ServiceResult<i64> {
        let account = profile
            .account(account_id)
            .ok_or_else(|| ServiceError::Invalid("Account not found".into()))?;
        Ok(account.amount_cents - Self::unpaid_bill_total(profile, account_id))
    }

    /// Aggregate available balance across every account in the profile.
    pub fn total_available_cents(profile: &Profile) -> i64 {
        profile
            .accounts
            .iter()
            .map(|account| account.amount_cents - Self::unpaid_bill_total(profile, account.id))
            .sum()
    }

    fn unpaid_bill_total(profile: &Profile, account_id: Uuid) -> i64 {
        profile
            .bills_for(account_id)
            .filter(|bill| !bill.payed)
            .map(|bill| bill.amount_cents)
            .sum()
    }
}

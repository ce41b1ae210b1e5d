use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    account::Account,
    bill::Bill,
    common::{find_by_id, find_by_id_mut},
    config::BudgetConfig,
};

pub const CURRENT_SCHEMA_VERSION: u8 = 1;

fn default_schema_version() -> u8 {
    CURRENT_SCHEMA_VERSION
}

/// Aggregate holding one user's accounts, bills, and payday configuration.
///
/// A profile without a [`BudgetConfig`] is a valid state: no dashboard data
/// can be derived for it, which callers treat as "unconfigured", not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<BudgetConfig>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub bills: Vec<Bill>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Creates an empty, unconfigured profile.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            name: name.into(),
            config: None,
            accounts: Vec::new(),
            bills: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Bumps the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    pub fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        find_by_id(&self.accounts, id)
    }

    pub fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        find_by_id_mut(&mut self.accounts, id)
    }

    pub fn bill(&self, id: Uuid) -> Option<&Bill> {
        find_by_id(&self.bills, id)
    }

    pub fn bill_mut(&mut self, id: Uuid) -> Option<&mut Bill> {
        find_by_id_mut(&mut self.bills, id)
    }

    /// Iterates the bills drawn against one account.
    pub fn bills_for(&self, account_id: Uuid) -> impl Iterator<Item = &Bill> {
        self.bills
            .iter()
            .filter(move |bill| bill.account_id == account_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_is_unconfigured_and_empty() {
        let profile = Profile::new("Casa");
        assert!(!profile.is_configured());
        assert!(profile.accounts.is_empty());
        assert!(profile.bills.is_empty());
    }

    #[test]
    fn bills_for_filters_by_account() {
        let mut profile = Profile::new("Casa");
        let checking = Account::new("Checking", 10_000);
        let savings = Account::new("Savings", 50_000);
        let checking_id = checking.id;
        let savings_id = savings.id;
        profile.accounts.push(checking);
        profile.accounts.push(savings);
        profile.bills.push(Bill::new(checking_id, "Rent", 7_000, 5));
        profile
            .bills
            .push(Bill::new(savings_id, "Insurance", 1_200, 10));

        assert_eq!(profile.bills_for(checking_id).count(), 1);
        assert_eq!(profile.bills_for(savings_id).count(), 1);
    }
}

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Enumerates how often a bill comes due.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Repetition {
    Once,
    Daily,
    Monthly,
}

/// A payment owed against an account. While `payed` is false the amount is
/// deducted from the account's available balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bill {
    pub id: Uuid,
    pub account_id: Uuid,
    pub name: String,
    pub amount_cents: i64,
    pub payed: bool,
    /// Day of month (1-31) the bill comes due.
    pub payment_day: u32,
    pub repetition: Repetition,
}

impl Bill {
    /// Creates a pending one-off bill against the given account.
    pub fn new(
        account_id: Uuid,
        name: impl Into<String>,
        amount_cents: i64,
        payment_day: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            name: name.into(),
            amount_cents,
            payed: false,
            payment_day,
            repetition: Repetition::Once,
        }
    }

    /// Sets the repetition cadence.
    pub fn with_repetition(mut self, repetition: Repetition) -> Self {
        self.repetition = repetition;
        self
    }
}

impl Identifiable for Bill {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Bill {
    fn name(&self) -> &str {
        &self.name
    }
}

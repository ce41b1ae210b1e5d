use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Represents a pool of money owned by a user, with bills drawn against it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    /// Display color, `0x` followed by 3 or 6 lowercase hex digits.
    pub color: String,
    pub amount_cents: i64,
}

impl Account {
    /// Creates a new account holding the given balance, in cents.
    pub fn new(name: impl Into<String>, amount_cents: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: DEFAULT_COLOR.into(),
            amount_cents,
        }
    }

    /// Sets the display color.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

const DEFAULT_COLOR: &str = "0xffffff";

/// Validates the `0x`-prefixed 3-or-6 digit lowercase hex color format.
pub fn is_valid_color(value: &str) -> bool {
    let digits = match value.strip_prefix("0x") {
        Some(rest) => rest,
        None => return false,
    };
    (digits.len() == 3 || digits.len() == 6)
        && digits
            .chars()
            .all(|c| matches!(c, 'a'..='f' | '0'..='9'))
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.name
    }
}

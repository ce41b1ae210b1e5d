pub mod account_service;
pub mod balance_service;
pub mod bill_service;
pub mod config_service;
pub mod dashboard_service;

pub use account_service::AccountService;
pub use balance_service::BalanceService;
pub use bill_service::BillService;
pub use config_service::ConfigService;
pub use dashboard_service::{DashboardData, DashboardService};

use crate::errors::BudgetError;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Single field that failed validation, with a caller-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Storage(#[from] BudgetError),
    #[error("{0}")]
    Invalid(String),
    #[error("validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),
    /// Last and next payment coincide. Unreachable while the resolver upholds
    /// its bracketing invariant; surfaced loudly because it signals a bug there.
    #[error("degenerate payday window: last and next payment coincide")]
    DegenerateWindow,
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Collects field errors and converts to a result once all checks ran.
pub(crate) fn finish_validation(errors: Vec<FieldError>) -> ServiceResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ServiceError::Validation(errors))
    }
}

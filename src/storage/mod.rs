pub mod json_backend;

use crate::{domain::profile::Profile, errors::BudgetError};

pub type Result<T> = std::result::Result<T, BudgetError>;

/// Abstraction over persistence backends capable of storing user profiles.
pub trait StorageBackend: Send + Sync {
    fn save(&self, profile: &Profile, name: &str) -> Result<()>;
    fn load(&self, name: &str) -> Result<Profile>;
    fn list_profiles(&self) -> Result<Vec<String>>;
    fn delete(&self, name: &str) -> Result<()>;
}

pub use json_backend::JsonStorage;

use crate::domain::profile::{Profile, CURRENT_SCHEMA_VERSION};
use crate::errors::BudgetError;
use crate::storage::StorageBackend;

/// Facade that coordinates the in-memory profile and its persistence.
pub struct ProfileManager {
    pub current: Option<Profile>,
    current_name: Option<String>,
    storage: Box<dyn StorageBackend>,
}

impl ProfileManager {
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            current: None,
            current_name: None,
            storage,
        }
    }

    pub fn storage(&self) -> &dyn StorageBackend {
        self.storage.as_ref()
    }

    pub fn load(&mut self, name: &str) -> Result<(), BudgetError> {
        let profile = self.storage.load(name)?;
        self.ensure_schema_support(profile.schema_version)?;
        self.current = Some(profile);
        self.current_name = Some(name.to_string());
        Ok(())
    }

    pub fn save(&mut self) -> Result<(), BudgetError> {
        let name = self
            .current_name
            .clone()
            .ok_or_else(|| BudgetError::Storage("current profile is unnamed".into()))?;
        let profile = self
            .current
            .as_ref()
            .ok_or_else(|| BudgetError::Storage("no profile loaded".into()))?;
        self.storage.save(profile, &name)
    }

    pub fn save_as(&mut self, name: &str) -> Result<(), BudgetError> {
        let profile = self
            .current
            .as_ref()
            .ok_or_else(|| BudgetError::Storage("no profile loaded".into()))?;
        self.storage.save(profile, name)?;
        self.current_name = Some(name.to_string());
        Ok(())
    }

    pub fn list_profiles(&self) -> Result<Vec<String>, BudgetError> {
        self.storage.list_profiles()
    }

    pub fn set_current(&mut self, profile: Profile, name: Option<String>) {
        self.current = Some(profile);
        self.current_name = name;
    }

    pub fn current_name(&self) -> Option<&str> {
        self.current_name.as_deref()
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.current_name = None;
    }

    fn ensure_schema_support(&self, schema_version: u8) -> Result<(), BudgetError> {
        if schema_version > CURRENT_SCHEMA_VERSION {
            return Err(BudgetError::Storage(format!(
                "profile schema v{} is newer than supported v{}",
                schema_version, CURRENT_SCHEMA_VERSION
            )));
        }
        Ok(())
    }
}

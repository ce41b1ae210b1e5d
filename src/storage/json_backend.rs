use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{domain::profile::Profile, errors::BudgetError, utils};

use super::{Result, StorageBackend};

const PROFILE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Stores each profile as a pretty-printed JSON document under a profiles
/// directory, writing through a temp file so saves are atomic.
#[derive(Clone)]
pub struct JsonStorage {
    profiles_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let profiles_dir = root.unwrap_or_else(utils::profiles_dir);
        ensure_dir(&profiles_dir)?;
        Ok(Self { profiles_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir
            .join(format!("{}.{}", canonical_name(name), PROFILE_EXTENSION))
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, profile: &Profile, name: &str) -> Result<()> {
        let path = self.profile_path(name);
        let json = serde_json::to_string_pretty(profile)?;
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Profile> {
        let path = self.profile_path(name);
        if !path.exists() {
            return Err(BudgetError::Storage(format!(
                "profile `{}` not found",
                name
            )));
        }
        let data = fs::read_to_string(&path)?;
        let profile: Profile = serde_json::from_str(&data)?;
        Ok(profile)
    }

    fn list_profiles(&self) -> Result<Vec<String>> {
        if !self.profiles_dir.exists() {
            return Ok(Vec::new());
        }
        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.profiles_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(PROFILE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                entries.push(stem.to_string());
            }
        }
        entries.sort();
        Ok(entries)
    }

    fn delete(&self, name: &str) -> Result<()> {
        let path = self.profile_path(name);
        if !path.exists() {
            return Err(BudgetError::Storage(format!(
                "profile `{}` not found",
                name
            )));
        }
        fs::remove_file(path)?;
        Ok(())
    }
}

fn canonical_name(name: &str) -> String {
    let sanitized: String = name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' => c,
            _ => '_',
        })
        .collect();
    if sanitized.trim_matches('_').is_empty() {
        "profile".into()
    } else {
        sanitized
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

//! Profile repository for JSON storage

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{SpendwiseError, SpendwiseResult};
use crate::models::UserProfile;

use super::file_io::{read_json, remove_if_exists, write_json_atomic};

/// Repository for the single user profile
pub struct ProfileRepository {
    path: PathBuf,
    data: RwLock<Option<UserProfile>>,
}

impl ProfileRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(None),
        }
    }

    /// Load the profile; a missing file means nobody has registered
    pub fn load(&self) -> SpendwiseResult<()> {
        let mut data = self.data.write().map_err(|e| {
            SpendwiseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = None;
        *data = read_json(&self.path)?;
        Ok(())
    }

    pub fn save(&self) -> SpendwiseResult<()> {
        let data = self.data.read().map_err(|e| {
            SpendwiseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        match data.as_ref() {
            Some(profile) => write_json_atomic(&self.path, profile),
            None => remove_if_exists(&self.path),
        }
    }

    pub fn get(&self) -> SpendwiseResult<Option<UserProfile>> {
        let data = self.data.read().map_err(|e| {
            SpendwiseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    pub fn set(&self, profile: UserProfile) -> SpendwiseResult<()> {
        let mut data = self.data.write().map_err(|e| {
            SpendwiseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = Some(profile);
        Ok(())
    }

    /// Forget the profile and remove the file
    pub fn clear(&self) -> SpendwiseResult<()> {
        let mut data = self.data.write().map_err(|e| {
            SpendwiseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = None;
        remove_if_exists(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unregistered_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let repo = ProfileRepository::new(temp_dir.path().join("profile.json"));
        repo.load().unwrap();
        assert_eq!(repo.get().unwrap(), None);
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");
        let repo = ProfileRepository::new(path.clone());
        repo.set(UserProfile::new("Asha", "9876543210")).unwrap();
        repo.save().unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["name"], "Asha");
        assert_eq!(value["mobile"], "9876543210");

        let reloaded = ProfileRepository::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.get().unwrap().unwrap().name, "Asha");
    }

    #[test]
    fn test_clear_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("profile.json");
        let repo = ProfileRepository::new(path.clone());
        repo.set(UserProfile::new("Asha", "9876543210")).unwrap();
        repo.save().unwrap();

        repo.clear().unwrap();
        assert!(!path.exists());
        assert_eq!(repo.get().unwrap(), None);
    }
}

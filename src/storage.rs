//! Persisted username.
//!
//! Only the chosen GitHub username outlives a session. It is loaded once at
//! startup and saved when the user submits a new one; nothing else reads or
//! writes it.

use crate::{EditorConfig, Error, Result};
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Key under which the username is stored.
pub const USERNAME_KEY: &str = "githubUsername";

/// Load/save capability for the persisted username.
pub trait UsernameStore: Send {
    /// The saved username, or `None` if nothing has been saved yet.
    fn load(&self) -> Result<Option<String>>;

    /// Trim and save `username`, returning the stored value.
    fn save(&mut self, username: &str) -> Result<String>;
}

/// Trim `raw` and reject it if nothing is left.
pub fn normalize_username(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidUsername(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

/// JSON file holding a flat string map, e.g. `{"githubUsername": "octocat"}`.
///
/// Other keys in the file are preserved on save.
#[derive(Debug, Clone)]
pub struct FileUsernameStore {
    path: PathBuf,
}

impl FileUsernameStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &EditorConfig) -> Result<Self> {
        Ok(Self::new(config.resolved_state_path()?))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Option<Map<String, Value>>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(_) => Err(Error::Storage(format!("{} is not a JSON object", self.path.display()))),
            Err(e) => Err(Error::Storage(format!("{}: {}", self.path.display(), e))),
        }
    }
}

impl UsernameStore for FileUsernameStore {
    fn load(&self) -> Result<Option<String>> {
        let Some(map) = self.read_map()? else {
            return Ok(None);
        };
        Ok(map
            .get(USERNAME_KEY)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string))
    }

    fn save(&mut self, username: &str) -> Result<String> {
        let username = normalize_username(username)?;
        let mut map = self.read_map()?.unwrap_or_default();
        map.insert(USERNAME_KEY.to_string(), Value::String(username.clone()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| Error::Storage(e.to_string()))?;
        fs::write(&self.path, text)?;
        log::debug!("saved username to {}", self.path.display());
        Ok(username)
    }
}

/// In-process store for tests and embedders without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryUsernameStore {
    value: Option<String>,
}

impl MemoryUsernameStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            value: Some(username.into()),
        }
    }
}

impl UsernameStore for MemoryUsernameStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn save(&mut self, username: &str) -> Result<String> {
        let username = normalize_username(username)?;
        self.value = Some(username.clone());
        Ok(username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_rejects_blank() {
        assert_eq!(normalize_username("  octocat \n").unwrap(), "octocat");
        assert_eq!(
            normalize_username(" \t "),
            Err(Error::InvalidUsername(" \t ".into()))
        );
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryUsernameStore::new();
        assert_eq!(store.load().unwrap(), None);
        assert_eq!(store.save(" hubot ").unwrap(), "hubot");
        assert_eq!(store.load().unwrap().as_deref(), Some("hubot"));
        assert!(store.save("").is_err());
        assert_eq!(store.load().unwrap().as_deref(), Some("hubot"));
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileUsernameStore::new(dir.path().join("absent.json"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn file_store_creates_parents_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let mut store = FileUsernameStore::new(&path);
        store.save("octocat").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("octocat"));

        let raw: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
        assert_eq!(raw[USERNAME_KEY], "octocat");
    }

    #[test]
    fn corrupt_file_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "{ nope").unwrap();
        let store = FileUsernameStore::new(&path);
        assert!(matches!(store.load(), Err(Error::Storage(_))));

        fs::write(&path, "[1, 2]").unwrap();
        assert!(matches!(store.load(), Err(Error::Storage(_))));
    }
}

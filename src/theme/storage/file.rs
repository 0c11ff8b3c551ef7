use std::collections::BTreeMap;
use std::fs;
use std::io::{ ErrorKind, Write };
use std::path::{ Path, PathBuf };

use futures::future::{ FutureExt, LocalBoxFuture };
use tempfile::NamedTempFile;

use super::PreferenceStorage;
use crate::error::PreferenceError;

/// Flat JSON object of string values, used on desktop and mobile.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_text(&self) -> Result<Option<String>, PreferenceError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(None),
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        match self.read_text()? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Entries to build the next write on. A file that no longer parses is
    /// replaced rather than blocking every later write.
    fn read_for_update(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let Some(raw) = self.read_text()? else {
            return Ok(BTreeMap::new());
        };
        match serde_json::from_str(&raw) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                log::warn!(
                    "Preference file {} is malformed ({}), rewriting it",
                    self.path.display(),
                    e
                );
                Ok(BTreeMap::new())
            }
        }
    }

    /// Writes to a sibling temp file and renames it over the target, so an
    /// interrupted write leaves the previous file intact.
    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<(), PreferenceError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let raw = serde_json::to_string_pretty(entries)?;
        let mut staged = NamedTempFile::new_in(&dir)?;
        staged.write_all(raw.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl PreferenceStorage for FileStorage {
    fn get<'a>(&'a self, key: &'a str) -> LocalBoxFuture<'a, Result<Option<String>, PreferenceError>> {
        async move {
            let entries = self.read_all().map_err(|e| PreferenceError::read(key, e))?;
            Ok(entries.get(key).cloned())
        }.boxed_local()
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> LocalBoxFuture<'a, Result<(), PreferenceError>> {
        async move {
            let mut entries = self.read_for_update().map_err(|e| PreferenceError::write(key, e))?;
            entries.insert(key.to_string(), value.to_string());
            self.write_all(&entries).map_err(|e| PreferenceError::write(key, e))
        }.boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("prefs.json"));
        assert_eq!(block_on(storage.get("userTheme")), Ok(None));
    }

    #[test]
    fn set_creates_parents_and_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested").join("prefs.json"));

        block_on(storage.set("userTheme", "dark")).unwrap();
        block_on(storage.set("isSystemTheme", "false")).unwrap();

        assert_eq!(block_on(storage.get("userTheme")), Ok(Some("dark".to_string())));
        assert_eq!(block_on(storage.get("isSystemTheme")), Ok(Some("false".to_string())));

        let raw = fs::read_to_string(storage.path()).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn garbage_file_is_a_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();
        let storage = FileStorage::new(path);

        match block_on(storage.get("userTheme")) {
            Err(PreferenceError::Read { key, .. }) => assert_eq!(key, "userTheme"),
            other => panic!("expected read failure, got {:?}", other),
        }
    }

    #[test]
    fn set_repairs_a_truncated_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"userTheme":"da"#).unwrap();
        let storage = FileStorage::new(&path);

        assert_eq!(block_on(storage.set("userTheme", "dark")), Ok(()));
        assert_eq!(block_on(storage.get("userTheme")), Ok(Some("dark".to_string())));

        assert_eq!(block_on(storage.set("isSystemTheme", "false")), Ok(()));
        let raw = fs::read_to_string(&path).unwrap();
        let parsed: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.get("userTheme").map(String::as_str), Some("dark"));
        assert_eq!(parsed.get("isSystemTheme").map(String::as_str), Some("false"));
    }

    #[test]
    fn writes_leave_no_staging_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("prefs.json"));

        block_on(storage.set("userTheme", "light")).unwrap();
        block_on(storage.set("userTheme", "dark")).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("prefs.json")]);
    }
}

use std::cell::RefCell;
use std::collections::HashMap;

use futures::future::{ FutureExt, LocalBoxFuture };

use super::PreferenceStorage;
use crate::error::PreferenceError;

/// Process-local storage. Share it behind an `Rc` to model a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
        where I: IntoIterator<Item = (K, V)>, K: Into<String>, V: Into<String>
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { entries: RefCell::new(entries) }
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get<'a>(&'a self, key: &'a str) -> LocalBoxFuture<'a, Result<Option<String>, PreferenceError>> {
        async move { Ok(self.value(key)) }.boxed_local()
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> LocalBoxFuture<'a, Result<(), PreferenceError>> {
        async move {
            self.entries.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }.boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn absent_key_reads_none() {
        let storage = MemoryStorage::new();
        assert_eq!(block_on(storage.get("userTheme")), Ok(None));
    }

    #[test]
    fn last_write_wins() {
        let storage = MemoryStorage::with_entries([("userTheme", "light")]);
        block_on(storage.set("userTheme", "dark")).unwrap();
        block_on(storage.set("userTheme", "light")).unwrap();
        assert_eq!(storage.value("userTheme").as_deref(), Some("light"));
    }
}

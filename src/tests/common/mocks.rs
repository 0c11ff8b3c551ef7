use std::cell::{ Cell, RefCell };
use std::rc::Rc;

use futures::future::{ FutureExt, LocalBoxFuture };

use crate::error::PreferenceError;
use crate::theme::{ ColorScheme, MemoryStorage, PreferenceStorage, SchemeReporter, ThemeStore };

/// Wraps a [`MemoryStorage`] and fails on demand.
#[derive(Default)]
pub struct FlakyStorage {
    pub inner: MemoryStorage,
    pub fail_reads: Cell<bool>,
    pub fail_writes: Cell<bool>,
    pub writes: RefCell<Vec<(String, String)>>,
}

impl FlakyStorage {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn failing_reads() -> Rc<Self> {
        let storage = Self::default();
        storage.fail_reads.set(true);
        Rc::new(storage)
    }
}

impl PreferenceStorage for FlakyStorage {
    fn get<'a>(&'a self, key: &'a str) -> LocalBoxFuture<'a, Result<Option<String>, PreferenceError>> {
        if self.fail_reads.get() {
            return async move { Err(PreferenceError::read(key, "storage offline")) }.boxed_local();
        }
        self.inner.get(key)
    }

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> LocalBoxFuture<'a, Result<(), PreferenceError>> {
        self.writes.borrow_mut().push((key.to_string(), value.to_string()));
        if self.fail_writes.get() {
            return async move { Err(PreferenceError::write(key, "quota exceeded")) }.boxed_local();
        }
        self.inner.set(key, value)
    }
}

/// Host scheme that tests can change between queries.
#[derive(Clone, Default)]
pub struct SharedReporter(pub Rc<Cell<Option<ColorScheme>>>);

impl SharedReporter {
    pub fn reporting(scheme: Option<ColorScheme>) -> Self {
        Self(Rc::new(Cell::new(scheme)))
    }

    pub fn report(&self, scheme: Option<ColorScheme>) {
        self.0.set(scheme);
    }
}

impl SchemeReporter for SharedReporter {
    fn reported(&self) -> Option<ColorScheme> {
        self.0.get()
    }
}

pub fn store_on(storage: Rc<FlakyStorage>, reporter: &SharedReporter) -> ThemeStore {
    ThemeStore::new(storage, Rc::new(reporter.clone()))
}

//! Durable key-value backends for the theme preference.
//!
//! One implementation per deployment target, picked once at startup by
//! [`default_storage`]. Every call is asynchronous from the caller's side even
//! when the backend itself is synchronous.

mod memory;
#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod web;

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::error::PreferenceError;

pub use memory::MemoryStorage;
#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
#[cfg(target_arch = "wasm32")]
pub use web::WebStorage;

pub trait PreferenceStorage {
    /// `Ok(None)` when the key has never been written.
    fn get<'a>(&'a self, key: &'a str) -> LocalBoxFuture<'a, Result<Option<String>, PreferenceError>>;

    fn set<'a>(&'a self, key: &'a str, value: &'a str) -> LocalBoxFuture<'a, Result<(), PreferenceError>>;
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_storage() -> Rc<dyn PreferenceStorage> {
    let path = crate::configs::preference_file_path();
    log::info!("Theme preferences stored at {}", path.display());
    Rc::new(FileStorage::new(path))
}

#[cfg(target_arch = "wasm32")]
pub fn default_storage() -> Rc<dyn PreferenceStorage> {
    log::info!("Theme preferences stored in localStorage");
    Rc::new(WebStorage)
}

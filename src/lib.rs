pub mod components;
pub mod data;
pub mod theme;
mod views;
mod utils;
mod routes;
mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::{ preference_file_path, system_theme_hint };
pub use crate::error::PreferenceError;

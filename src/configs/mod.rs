pub mod env_validate;

pub use env_validate::{ preference_file_path, system_theme_hint };

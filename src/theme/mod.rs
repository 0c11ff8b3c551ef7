//! Theme preference resolution and persistence, plus the FamDing palette.

mod palette;
mod platform;
mod preference;
mod scheme;
mod storage;
mod store;

pub use palette::*;
pub use platform::{ default_reporter, EnvSchemeReporter, SchemeReporter };
#[cfg(target_arch = "wasm32")]
pub use platform::MediaQueryReporter;
pub use preference::{ ThemeMode, ThemePreference, ThemeSnapshot, IS_SYSTEM_THEME_KEY, USER_THEME_KEY };
pub use scheme::ColorScheme;
pub use storage::*;
pub use store::{ read_preference, PersistTask, ThemeStore };

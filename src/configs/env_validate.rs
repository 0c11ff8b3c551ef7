use std::path::{ Path, PathBuf };

use crate::theme::ColorScheme;

pub const PREFERENCES_VAR: &str = "FAMDING_PREFERENCES";
pub const SYSTEM_THEME_VAR: &str = "FAMDING_SYSTEM_THEME";

pub fn preference_file_path() -> PathBuf {
    let path = resolve_preference_path(std::env::var(PREFERENCES_VAR).ok(), std::env::var("HOME").ok());
    if path.is_relative() {
        // Mobile sandboxes often leave HOME unset, so this may not be writable.
        log::warn!(
            "Preference file path is relative, preferences will be stored at {}",
            absolute_for_log(&path).display()
        );
    }
    path
}

fn resolve_preference_path(configured: Option<String>, home: Option<String>) -> PathBuf {
    if let Some(path) = configured.filter(|p| !p.trim().is_empty()) {
        log::info!("Using preference file from {}: {}", PREFERENCES_VAR, path);
        return PathBuf::from(path);
    }

    let base = match home.filter(|h| !h.trim().is_empty()) {
        Some(home) => PathBuf::from(home),
        None => {
            log::warn!("HOME not set, storing preferences relative to the working directory");
            PathBuf::new()
        }
    };
    base.join(".famding").join("preferences.json")
}

fn absolute_for_log(path: &Path) -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) => cwd.join(path),
        Err(_) => path.to_path_buf(),
    }
}

/// Host scheme hint for targets without a native scheme query.
///
/// Re-read on every call so a changed variable is picked up on the next render.
pub fn system_theme_hint() -> Option<ColorScheme> {
    let raw = std::env::var(SYSTEM_THEME_VAR).ok()?;
    match raw.parse() {
        Ok(scheme) => Some(scheme),
        Err(e) => {
            log::warn!("Ignoring {}: {}", SYSTEM_THEME_VAR, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_path_wins() {
        let path = resolve_preference_path(Some("/tmp/prefs.json".to_string()), Some("/home/ana".to_string()));
        assert_eq!(path, PathBuf::from("/tmp/prefs.json"));
    }

    #[test]
    fn falls_back_to_home_then_working_dir() {
        let path = resolve_preference_path(None, Some("/home/ana".to_string()));
        assert_eq!(path, PathBuf::from("/home/ana/.famding/preferences.json"));

        let path = resolve_preference_path(Some("  ".to_string()), None);
        assert_eq!(path, PathBuf::from(".famding/preferences.json"));
        assert!(path.is_relative());
    }

    #[test]
    fn relative_paths_are_reported_absolute() {
        let shown = absolute_for_log(Path::new(".famding/preferences.json"));
        assert!(shown.is_absolute());
        assert!(shown.ends_with(".famding/preferences.json"));
    }
}

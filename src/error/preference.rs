use std::fmt::{Display, Formatter};

/// Failures raised by a preference storage backend.
///
/// None of these are fatal. The theme store logs them at the storage boundary
/// and keeps its in-memory state.
#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceError {
    Read { key: String, reason: String },
    Write { key: String, reason: String },
    Corrupt { key: String, value: String },
    Unavailable(String),
}

impl PreferenceError {
    pub fn read(key: &str, reason: impl Display) -> Self {
        PreferenceError::Read { key: key.to_string(), reason: reason.to_string() }
    }

    pub fn write(key: &str, reason: impl Display) -> Self {
        PreferenceError::Write { key: key.to_string(), reason: reason.to_string() }
    }

    pub fn is_write(&self) -> bool {
        matches!(self, PreferenceError::Write { .. })
    }
}

impl Display for PreferenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PreferenceError::Read { key, reason } => write!(f, "Read Error ({}): {}", key, reason),
            PreferenceError::Write { key, reason } => write!(f, "Write Error ({}): {}", key, reason),
            PreferenceError::Corrupt { key, value } => {
                write!(f, "Corrupt Value ({}): {:?}", key, value)
            }
            PreferenceError::Unavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
        }
    }
}

impl std::error::Error for PreferenceError {}

impl From<std::io::Error> for PreferenceError {
    fn from(error: std::io::Error) -> Self {
        PreferenceError::Unavailable(error.to_string())
    }
}

impl From<serde_json::Error> for PreferenceError {
    fn from(error: serde_json::Error) -> Self {
        PreferenceError::Unavailable(format!("malformed preference file: {}", error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_key() {
        let err = PreferenceError::write("userTheme", "disk full");
        assert_eq!(err.to_string(), "Write Error (userTheme): disk full");
        assert!(err.is_write());
    }

    #[test]
    fn corrupt_value_is_quoted() {
        let err = PreferenceError::Corrupt { key: "isSystemTheme".into(), value: "yes".into() };
        assert_eq!(err.to_string(), "Corrupt Value (isSystemTheme): \"yes\"");
    }
}

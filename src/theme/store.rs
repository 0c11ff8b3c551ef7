use std::fmt;
use std::rc::Rc;

use futures::channel::mpsc::{ unbounded, UnboundedReceiver, UnboundedSender };
use futures::future::{ FutureExt, LocalBoxFuture };

use super::preference::{ decode_flag, encode_flag, IS_SYSTEM_THEME_KEY, USER_THEME_KEY };
use super::{ ColorScheme, PreferenceStorage, SchemeReporter, ThemeMode, ThemePreference, ThemeSnapshot };
use crate::error::PreferenceError;

/// A persistence write handed back to the caller to run in the background.
///
/// Failures are logged inside the task; it always resolves to `()`.
pub type PersistTask = LocalBoxFuture<'static, ()>;

/// Single source of truth for the active color scheme.
///
/// Mutations land in memory before the method returns. Durable writes are
/// best-effort: a failed write is logged and never rolls the state back.
pub struct ThemeStore {
    preference: ThemePreference,
    storage: Rc<dyn PreferenceStorage>,
    reporter: Rc<dyn SchemeReporter>,
    subscribers: Vec<UnboundedSender<ThemeSnapshot>>,
}

impl ThemeStore {
    pub fn new(storage: Rc<dyn PreferenceStorage>, reporter: Rc<dyn SchemeReporter>) -> Self {
        Self {
            preference: ThemePreference::default(),
            storage,
            reporter,
            subscribers: Vec::new(),
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn mode(&self) -> ThemeMode {
        self.preference.mode()
    }

    pub fn active_scheme(&self) -> ColorScheme {
        self.preference.active(self.reporter.reported())
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        ThemeSnapshot {
            preference: self.preference,
            mode: self.mode(),
            active: self.active_scheme(),
        }
    }

    pub fn storage(&self) -> Rc<dyn PreferenceStorage> {
        self.storage.clone()
    }

    /// Reads the persisted preference. Never fails; see [`read_preference`].
    pub async fn load(&mut self) {
        let storage = self.storage.clone();
        let loaded = read_preference(storage.as_ref(), self.preference).await;
        self.apply_loaded(loaded);
    }

    /// Installs a preference produced by [`read_preference`].
    ///
    /// Split from [`ThemeStore::load`] so a reactive owner can await the read
    /// without holding a write borrow on the store.
    pub fn apply_loaded(&mut self, loaded: ThemePreference) {
        if loaded != self.preference {
            log::info!(
                "Loaded theme preference: system={} user={}",
                loaded.use_system_theme,
                loaded.user_scheme
            );
            self.preference = loaded;
            self.publish();
        }
    }

    pub fn toggle(&mut self) -> PersistTask {
        let next = self.active_scheme().opposite();
        self.preference = ThemePreference { use_system_theme: false, user_scheme: next };
        log::info!("Theme toggled to {}", next);
        self.publish();

        self.persist(vec![(USER_THEME_KEY, next.as_str()), (IS_SYSTEM_THEME_KEY, encode_flag(false))])
    }

    pub fn set_use_system_theme(&mut self, use_system: bool) -> PersistTask {
        self.preference.use_system_theme = use_system;
        log::info!("Theme mode set to {:?}", self.mode());
        self.publish();

        self.persist(vec![(IS_SYSTEM_THEME_KEY, encode_flag(use_system))])
    }

    /// Every later change is delivered as a snapshot. Dropping the receiver
    /// unsubscribes.
    pub fn subscribe(&mut self) -> UnboundedReceiver<ThemeSnapshot> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.subscribers.retain(|tx| tx.unbounded_send(snapshot).is_ok());
    }

    fn persist(&self, entries: Vec<(&'static str, &'static str)>) -> PersistTask {
        let storage = self.storage.clone();
        async move {
            for (key, value) in entries {
                if let Err(e) = storage.set(key, value).await {
                    log::error!("Error saving theme preference: {}", e);
                    return;
                }
            }
            log::debug!("Theme preference saved");
        }.boxed_local()
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("preference", &self.preference)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

async fn read_raw(
    storage: &dyn PreferenceStorage
) -> Result<(Option<String>, Option<String>), PreferenceError> {
    let user_theme = storage.get(USER_THEME_KEY).await?;
    let is_system = storage.get(IS_SYSTEM_THEME_KEY).await?;
    Ok((user_theme, is_system))
}

/// Merges whatever is persisted on top of `current`.
///
/// Absent keys keep the current field. A read failure keeps `current` whole.
/// A value that does not parse is logged and skipped.
pub async fn read_preference(
    storage: &dyn PreferenceStorage,
    current: ThemePreference
) -> ThemePreference {
    let (user_theme, is_system) = match read_raw(storage).await {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("Error loading theme preference: {}", e);
            return current;
        }
    };

    let mut loaded = current;
    if let Some(raw) = user_theme.filter(|v| !v.is_empty()) {
        match raw.parse::<ColorScheme>() {
            Ok(scheme) => {
                loaded.user_scheme = scheme;
            }
            Err(_) => {
                let err = PreferenceError::Corrupt { key: USER_THEME_KEY.to_string(), value: raw };
                log::warn!("Ignoring stored theme: {}", err);
            }
        }
    }
    if let Some(raw) = is_system {
        match decode_flag(&raw) {
            Some(flag) => {
                loaded.use_system_theme = flag;
            }
            None => {
                let err = PreferenceError::Corrupt { key: IS_SYSTEM_THEME_KEY.to_string(), value: raw };
                log::warn!("Ignoring stored theme mode: {}", err);
            }
        }
    }
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::MemoryStorage;
    use futures::executor::block_on;

    fn store_with(storage: MemoryStorage, reported: Option<ColorScheme>) -> ThemeStore {
        ThemeStore::new(Rc::new(storage), Rc::new(move || reported))
    }

    #[test]
    fn starts_following_system() {
        let store = store_with(MemoryStorage::new(), None);
        assert_eq!(store.preference(), ThemePreference::default());
        assert_eq!(store.mode(), ThemeMode::FollowingSystem);
        assert_eq!(store.active_scheme(), ColorScheme::Light);
    }

    #[test]
    fn empty_user_theme_counts_as_absent() {
        let storage = MemoryStorage::with_entries([("userTheme", ""), ("isSystemTheme", "false")]);
        let mut store = store_with(storage, None);
        block_on(store.load());
        assert_eq!(
            store.preference(),
            ThemePreference { use_system_theme: false, user_scheme: ColorScheme::Light }
        );
    }

    #[test]
    fn corrupt_values_keep_their_fields() {
        let storage = MemoryStorage::with_entries([("userTheme", "purple"), ("isSystemTheme", "false")]);
        let mut store = store_with(storage, Some(ColorScheme::Dark));
        block_on(store.load());
        assert_eq!(store.preference().user_scheme, ColorScheme::Light);
        assert!(!store.preference().use_system_theme);

        let storage = MemoryStorage::with_entries([("userTheme", "dark"), ("isSystemTheme", "maybe")]);
        let mut store = store_with(storage, None);
        block_on(store.load());
        assert_eq!(store.preference().user_scheme, ColorScheme::Dark);
        assert!(store.preference().use_system_theme);
    }

    #[test]
    fn toggle_updates_memory_before_the_write_runs() {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = ThemeStore::new(storage.clone(), Rc::new(|| None::<ColorScheme>));

        let task = store.toggle();
        assert_eq!(store.active_scheme(), ColorScheme::Dark);
        assert_eq!(storage.value("userTheme"), None);

        block_on(task);
        assert_eq!(storage.value("userTheme").as_deref(), Some("dark"));
        assert_eq!(storage.value("isSystemTheme").as_deref(), Some("false"));
    }

    #[test]
    fn set_use_system_theme_only_writes_the_flag() {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = ThemeStore::new(storage.clone(), Rc::new(|| Some(ColorScheme::Dark)));

        block_on(store.set_use_system_theme(false));
        assert_eq!(store.mode(), ThemeMode::Overridden);
        assert_eq!(store.active_scheme(), ColorScheme::Light);
        assert_eq!(storage.value("isSystemTheme").as_deref(), Some("false"));
        assert_eq!(storage.value("userTheme"), None);
    }
}

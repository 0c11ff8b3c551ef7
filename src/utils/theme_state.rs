use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;

use crate::theme::{ read_preference, ColorScheme, ThemeColors, ThemeMode, ThemeSnapshot, ThemeStore };

/// The view layer's handle on the shared theme store.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeState {
    store: Signal<ThemeStore>,
    loaded: Signal<bool>,
}

impl ThemeState {
    pub fn scheme(&self) -> ColorScheme {
        self.store.read().active_scheme()
    }

    pub fn is_dark(&self) -> bool {
        self.scheme().is_dark()
    }

    pub fn colors(&self) -> &'static ThemeColors {
        ThemeColors::for_scheme(self.scheme())
    }

    pub fn mode(&self) -> ThemeMode {
        self.store.read().mode()
    }

    pub fn is_loaded(&self) -> bool {
        *self.loaded.read()
    }

    pub fn toggle(&mut self) {
        let task = self.store.write().toggle();
        spawn(task);
    }

    pub fn set_use_system_theme(&mut self, use_system: bool) {
        let task = self.store.write().set_use_system_theme(use_system);
        spawn(task);
    }
}

async fn log_theme_changes(mut updates: UnboundedReceiver<ThemeSnapshot>) {
    while let Some(snapshot) = updates.next().await {
        log::debug!(
            "Theme now {} ({}), stored choice {}",
            snapshot.active,
            snapshot.mode.label(),
            snapshot.preference.user_scheme
        );
    }
}

/// Owns the store for the lifetime of the app and starts the initial load.
pub fn use_theme_provider(make_store: impl FnOnce() -> ThemeStore) -> ThemeState {
    let store = use_hook(|| {
        let mut store = make_store();
        spawn(log_theme_changes(store.subscribe()));
        Signal::new(store)
    });
    let loaded = use_signal(|| false);
    let state = use_context_provider(|| ThemeState { store, loaded });

    use_future(move || {
        let mut store = store;
        let mut loaded = loaded;
        async move {
            let storage = store.peek().storage();
            let current = store.peek().preference();
            let preference = read_preference(storage.as_ref(), current).await;
            store.write().apply_loaded(preference);
            loaded.set(true);
        }
    });

    state
}

pub fn use_theme() -> ThemeState {
    use_context::<ThemeState>()
}

use std::rc::Rc;

use super::ColorScheme;

/// Reports the host's current color scheme.
///
/// The answer may change while the app runs, so callers query it every time
/// they need it instead of caching.
pub trait SchemeReporter {
    fn reported(&self) -> Option<ColorScheme>;
}

impl<F> SchemeReporter for F where F: Fn() -> Option<ColorScheme> {
    fn reported(&self) -> Option<ColorScheme> {
        self()
    }
}

/// Reads `FAMDING_SYSTEM_THEME` on native targets.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSchemeReporter;

impl SchemeReporter for EnvSchemeReporter {
    fn reported(&self) -> Option<ColorScheme> {
        crate::configs::system_theme_hint()
    }
}

/// `prefers-color-scheme` media query in the browser.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaQueryReporter;

#[cfg(target_arch = "wasm32")]
impl SchemeReporter for MediaQueryReporter {
    fn reported(&self) -> Option<ColorScheme> {
        let query = web_sys::window()?
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()?;
        Some(if query.matches() { ColorScheme::Dark } else { ColorScheme::Light })
    }
}

#[cfg(target_arch = "wasm32")]
pub fn default_reporter() -> Rc<dyn SchemeReporter> {
    Rc::new(MediaQueryReporter)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_reporter() -> Rc<dyn SchemeReporter> {
    Rc::new(EnvSchemeReporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn closures_are_reporters() {
        let current = Rc::new(Cell::new(None));
        let reporter = {
            let current = current.clone();
            move || current.get()
        };
        assert_eq!(reporter.reported(), None);
        current.set(Some(ColorScheme::Dark));
        assert_eq!(reporter.reported(), Some(ColorScheme::Dark));
    }
}

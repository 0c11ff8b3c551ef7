use crate::theme::ColorScheme;

/// Mirrors the active scheme onto `<html data-theme>` so page chrome outside
/// the app root (scrollbars, overscroll) matches.
#[cfg(target_arch = "wasm32")]
pub fn apply_document_scheme(scheme: ColorScheme) {
    if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
        if let Err(e) = el.set_attribute("data-theme", scheme.as_str()) {
            log::warn!("Could not set data-theme: {:?}", e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_document_scheme(scheme: ColorScheme) {
    log::trace!("Document scheme is {}", scheme);
}

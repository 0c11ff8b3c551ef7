mod document;
mod theme_state;

pub use document::apply_document_scheme;
pub use theme_state::{ use_theme, use_theme_provider, ThemeState };

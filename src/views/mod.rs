mod chat;
mod design;
mod settings;
mod shell;
mod timeline;

pub use chat::Chat;
pub use design::DesignSystem;
pub use settings::Settings;
pub use shell::{ AppShell, ComingSoon };
pub use timeline::Timeline;

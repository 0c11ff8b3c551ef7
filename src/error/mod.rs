mod preference;

pub use preference::PreferenceError;

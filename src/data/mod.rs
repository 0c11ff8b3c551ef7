mod model;
mod sample;
pub mod time;

pub use model::*;
pub use sample::*;

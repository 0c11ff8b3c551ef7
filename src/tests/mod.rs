// Cross-module behaviour of the theme store against the storage contract.
pub mod common;

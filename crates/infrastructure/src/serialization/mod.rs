//! JSON serialization for the settings file.

mod json;

pub use json::*;

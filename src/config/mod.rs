//! Configuration module for fintrack
//!
//! Path resolution and user settings persisted as JSON. Settings only
//! affect presentation and defaults; the engine receives every value it
//! needs as an explicit argument.

pub mod paths;
pub mod settings;

pub use paths::FintrackPaths;
pub use settings::Settings;

//! Settings file, command line overrides and persisted preferences

pub mod settings;
pub mod preferences;

pub use settings::{Settings, WindowConfig, GridConfig, SimulationConfig, CliOverrides};
pub use preferences::{Preferences, PreferenceStore};

// Domain layer - Core simulation logic
pub mod domain;

// Application layer - Session state and run control
pub mod application;

// Infrastructure layer - UI, rendering, input, configuration
pub mod ui;
pub mod rendering;
pub mod input;
pub mod config;
pub mod i18n;
pub mod error;

// Re-exports for convenience
pub use domain::{Cell, GridState, SimulationEngine, Pattern, PresetChoice, presets};
pub use application::{GameState, SessionOptions, RunController, RunState, Command};
pub use input::{SurfaceRect, CanvasGeometry, map_pointer_to_cell};
pub use i18n::Language;
pub use error::ConfigError;

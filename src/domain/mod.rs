mod cell;
mod grid;
mod engine;
mod patterns;

pub use cell::Cell;
pub use grid::GridState;
pub use engine::{SimulationEngine, live_neighbors, DEFAULT_PARALLEL_THRESHOLD};
pub use patterns::{Pattern, PresetChoice, Category, presets, place_random, DEFAULT_RANDOM_DENSITY};

mod game_state;
mod run_controller;
mod schedule;

pub use game_state::{GameState, SessionOptions, Command};
pub use run_controller::{RunController, RunState, MIN_SPEED, MAX_SPEED, DEFAULT_SPEED};
pub use schedule::{TickSchedule, interval_for_speed};

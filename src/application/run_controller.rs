use std::time::{Duration, Instant};
use crate::domain::{GridState, SimulationEngine};
use super::schedule::{TickSchedule, interval_for_speed};

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 30;
pub const DEFAULT_SPEED: u32 = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Paused,
    Running,
}

/// Run/pause/step state machine.
///
/// While running, a [`TickSchedule`] is armed and every due poll of
/// [`RunController::update`] advances one generation. Pausing drops the
/// schedule, which is the cancel: no advance can happen afterwards.
#[derive(Debug)]
pub struct RunController {
    state: RunState,
    speed: u32,
    schedule: Option<TickSchedule>,
    engine: SimulationEngine,
    last_advance: Duration,
}

impl RunController {
    pub fn new(engine: SimulationEngine, speed: u32) -> Self {
        Self {
            state: RunState::Paused,
            speed: speed.clamp(MIN_SPEED, MAX_SPEED),
            schedule: None,
            engine,
            last_advance: Duration::ZERO,
        }
    }

    pub const fn state(&self) -> RunState {
        self.state
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running)
    }

    /// Steps per second
    pub const fn speed(&self) -> u32 {
        self.speed
    }

    pub fn tick_interval(&self) -> Duration {
        interval_for_speed(self.speed)
    }

    /// Whether an automatic tick is armed
    pub const fn has_schedule(&self) -> bool {
        self.schedule.is_some()
    }

    /// Wall time spent in the most recent advance
    pub const fn last_advance(&self) -> Duration {
        self.last_advance
    }

    /// Paused -> Running advances once right away and arms the schedule;
    /// Running -> Paused cancels it.
    pub fn toggle_run(&mut self, grid: &mut GridState) -> RunState {
        match self.state {
            RunState::Paused => {
                self.state = RunState::Running;
                log::info!("running at {} steps/s", self.speed);
                self.advance(grid);
                self.schedule = Some(TickSchedule::every(self.tick_interval()));
            }
            RunState::Running => self.pause(),
        }
        self.state
    }

    /// Stop automatic advancing. Safe to call in any state.
    pub fn pause(&mut self) {
        if self.is_running() {
            log::info!("simulation paused");
        }
        self.state = RunState::Paused;
        self.cancel();
    }

    fn cancel(&mut self) {
        self.schedule = None;
    }

    /// Advance exactly one generation; ignored while running
    pub fn step(&mut self, grid: &mut GridState) -> bool {
        if self.is_running() {
            return false;
        }
        self.advance(grid);
        true
    }

    /// Kill every cell and reset the counter; ignored while running
    pub fn clear(&mut self, grid: &mut GridState) -> bool {
        if self.is_running() {
            return false;
        }
        grid.reset();
        log::info!("grid cleared");
        true
    }

    /// Clamp and store the speed. A running schedule is replaced right away
    /// so the new interval applies to the very next tick.
    pub fn set_speed(&mut self, speed: u32) -> u32 {
        let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        if speed == self.speed {
            return speed;
        }
        self.speed = speed;
        log::debug!("speed set to {speed} steps/s");
        if self.is_running() {
            self.cancel();
            self.schedule = Some(TickSchedule::every(self.tick_interval()));
        }
        speed
    }

    pub fn adjust_speed(&mut self, delta: i32) -> u32 {
        let speed = self.speed.saturating_add_signed(delta);
        self.set_speed(speed)
    }

    /// Feed frame time to the schedule. Returns true when a generation was
    /// advanced, so the caller knows the grid changed.
    pub fn update(&mut self, grid: &mut GridState, delta: Duration) -> bool {
        if !self.is_running() {
            self.cancel();
            return false;
        }
        let Some(schedule) = self.schedule.as_mut() else {
            return false;
        };
        if !schedule.poll(delta) {
            return false;
        }
        self.advance(grid);
        log::trace!("tick -> generation {}", grid.generation());
        true
    }

    fn advance(&mut self, grid: &mut GridState) {
        let start = Instant::now();
        self.engine.advance(grid);
        self.last_advance = start.elapsed();
    }
}

use std::time::Duration;
use rand::{SeedableRng, rngs::StdRng};
use crate::domain::{
    Cell, GridState, PresetChoice, SimulationEngine, place_random, presets, DEFAULT_RANDOM_DENSITY,
};
use crate::i18n::Language;
use super::run_controller::{RunController, RunState, DEFAULT_SPEED};

/// Knobs for a new session
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SessionOptions {
    pub speed: u32,
    pub random_density: f64,
    pub parallel_threshold: usize,
    /// Fixed seed for the Random preset; entropy when `None`
    pub seed: Option<u64>,
    pub language: Language,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            random_density: DEFAULT_RANDOM_DENSITY,
            parallel_threshold: crate::domain::DEFAULT_PARALLEL_THRESHOLD,
            seed: None,
            language: Language::default(),
        }
    }
}

/// Named UI triggers, shared by buttons and keyboard shortcuts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    ToggleRun,
    Step,
    Clear,
    SpeedUp,
    SpeedDown,
    Preset(PresetChoice),
    ToggleLanguage,
    ToggleInfo,
}

/// Pointer stroke in progress while drawing on the grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Stroke {
    value: Cell,
    origin: (usize, usize),
    painting: bool,
}

/// GameState orchestrates one simulation session.
///
/// It owns the grid and the run controller and is the single gate for every
/// mutation: drawing and presets are refused while the simulation runs.
/// `revision` increases on every change so a renderer can tell when the
/// grid needs repainting.
pub struct GameState {
    grid: GridState,
    controller: RunController,
    stroke: Option<Stroke>,
    rng: StdRng,
    random_density: f64,
    revision: u64,
    pub language: Language,
    pub show_info: bool,
}

impl GameState {
    /// New paused session with one glider centered on a dead grid
    pub fn new(rows: usize, cols: usize, options: SessionOptions) -> Self {
        let engine = SimulationEngine::with_parallel_threshold(options.parallel_threshold);
        let rng = options.seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let mut state = Self {
            grid: GridState::new(rows, cols),
            controller: RunController::new(engine, options.speed),
            stroke: None,
            rng,
            random_density: options.random_density,
            revision: 0,
            language: options.language,
            show_info: false,
        };
        presets::GLIDER.place_on(&mut state.grid);
        state
    }

    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    pub fn controller(&self) -> &RunController {
        &self.controller
    }

    pub fn run_state(&self) -> RunState {
        self.controller.state()
    }

    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    pub fn speed(&self) -> u32 {
        self.controller.speed()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touched(&mut self, changed: bool) -> bool {
        if changed {
            self.revision += 1;
        }
        changed
    }

    /// Toggle play/pause. Starting also advances one generation.
    pub fn toggle_running(&mut self) -> RunState {
        let state = self.controller.toggle_run(&mut self.grid);
        self.stroke = None;
        self.touched(state == RunState::Running);
        state
    }

    pub fn step(&mut self) -> bool {
        let changed = self.controller.step(&mut self.grid);
        self.touched(changed)
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.controller.clear(&mut self.grid);
        self.touched(changed)
    }

    pub fn set_speed(&mut self, speed: u32) -> u32 {
        self.controller.set_speed(speed)
    }

    pub fn adjust_speed(&mut self, delta: i32) -> u32 {
        self.controller.adjust_speed(delta)
    }

    /// Advance the frame clock; true when a timed generation happened
    pub fn tick(&mut self, delta: Duration) -> bool {
        let changed = self.controller.update(&mut self.grid, delta);
        self.touched(changed)
    }

    /// Apply a preset; ignored while running
    pub fn apply_preset(&mut self, choice: PresetChoice) -> bool {
        if self.is_running() {
            return false;
        }
        match choice {
            PresetChoice::Pattern(pattern) => {
                let written = pattern.place_on(&mut self.grid);
                log::info!("placed {} ({written} cells)", pattern.name);
            }
            PresetChoice::Random => {
                place_random(&mut self.grid, self.random_density, &mut self.rng);
                log::info!(
                    "random fill at density {:.2}: {} alive",
                    self.random_density,
                    self.grid.population()
                );
            }
        }
        self.touched(true)
    }

    pub fn apply_preset_id(&mut self, id: u8) -> bool {
        PresetChoice::from_id(id).is_some_and(|choice| self.apply_preset(choice))
    }

    pub fn apply_preset_name(&mut self, name: &str) -> bool {
        PresetChoice::from_name(name).is_some_and(|choice| self.apply_preset(choice))
    }

    /// Pointer press on a cell. Sets the cell to alive when `force_alive`
    /// (secondary button held), otherwise flips it; later drag moves paint
    /// the same value once the pointer leaves the pressed cell.
    pub fn begin_stroke(&mut self, cell: (usize, usize), force_alive: bool) -> bool {
        self.start_stroke(cell, force_alive, false)
    }

    /// Touch start: flips the cell and paints on every following move
    pub fn begin_touch(&mut self, cell: (usize, usize)) -> bool {
        self.start_stroke(cell, false, true)
    }

    fn start_stroke(&mut self, (row, col): (usize, usize), force_alive: bool, painting: bool) -> bool {
        if self.is_running() {
            return false;
        }
        let Some(current) = self.grid.get(row, col) else {
            return false;
        };
        let value = if force_alive { Cell::Alive } else { current.toggle() };
        self.grid.set(row, col, value);
        self.stroke = Some(Stroke { value, origin: (row, col), painting });
        self.touched(true)
    }

    /// Pointer moved while pressed
    pub fn continue_stroke(&mut self, (row, col): (usize, usize)) -> bool {
        if self.is_running() {
            return false;
        }
        let Some(stroke) = self.stroke.as_mut() else {
            return false;
        };
        if (row, col) != stroke.origin {
            stroke.painting = true;
        }
        if !stroke.painting {
            return false;
        }
        let value = stroke.value;
        let changed = self.grid.get(row, col).is_some_and(|cell| cell != value)
            && self.grid.set(row, col, value);
        self.touched(changed)
    }

    pub fn end_stroke(&mut self) {
        self.stroke = None;
    }

    pub fn is_drawing(&self) -> bool {
        self.stroke.is_some()
    }

    /// Run a UI trigger. Returns true when the grid changed.
    pub fn execute(&mut self, command: Command) -> bool {
        match command {
            Command::ToggleRun => {
                let generation = self.generation();
                self.toggle_running();
                self.generation() != generation
            }
            Command::Step => self.step(),
            Command::Clear => self.clear(),
            Command::SpeedUp => {
                self.adjust_speed(1);
                false
            }
            Command::SpeedDown => {
                self.adjust_speed(-1);
                false
            }
            Command::Preset(choice) => self.apply_preset(choice),
            Command::ToggleLanguage => {
                self.toggle_language();
                false
            }
            Command::ToggleInfo => {
                self.toggle_info();
                false
            }
        }
    }

    pub fn toggle_language(&mut self) -> Language {
        self.language = self.language.toggle();
        log::info!("language switched to {}", self.language.code());
        self.language
    }

    pub fn toggle_info(&mut self) {
        self.show_info = !self.show_info;
    }
}

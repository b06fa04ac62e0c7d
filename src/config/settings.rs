//! Startup settings: window geometry, cell size and simulation knobs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::application::{SessionOptions, MAX_SPEED, MIN_SPEED, DEFAULT_SPEED};
use crate::domain::{DEFAULT_PARALLEL_THRESHOLD, DEFAULT_RANDOM_DENSITY};
use crate::error::{ConfigError, Result};
use crate::i18n::Language;
use crate::ui::{Panel, MIN_PANEL_WIDTH};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowConfig,
    pub grid: GridConfig,
    pub simulation: SimulationConfig,
    pub preferences_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Internal canvas size in pixels; the grid is derived from it
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub sidebar_width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub cell_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Steps per second, 1-30
    pub speed: u32,
    pub random_density: f64,
    pub parallel_threshold: usize,
    pub seed: Option<u64>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            sidebar_width: 280,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self { cell_size: 8 }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            random_density: DEFAULT_RANDOM_DENSITY,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            seed: None,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            grid: GridConfig::default(),
            simulation: SimulationConfig::default(),
            preferences_file: PathBuf::from("life_torus_prefs.json"),
        }
    }
}

/// Command line values that win over the settings file
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub cell_size: Option<u32>,
    pub speed: Option<u32>,
    pub seed: Option<u64>,
    pub preferences_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from a YAML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));
        if self.grid.cell_size == 0 {
            return invalid("cell size must be positive".into());
        }
        if self.window.canvas_width < self.grid.cell_size || self.window.canvas_height < self.grid.cell_size {
            return invalid(format!(
                "canvas {}x{} cannot hold a single {} px cell",
                self.window.canvas_width, self.window.canvas_height, self.grid.cell_size
            ));
        }
        if (self.window.sidebar_width as f32) < MIN_PANEL_WIDTH {
            return invalid(format!(
                "sidebar width {} below {MIN_PANEL_WIDTH}",
                self.window.sidebar_width
            ));
        }
        if !(MIN_SPEED..=MAX_SPEED).contains(&self.simulation.speed) {
            return invalid(format!(
                "speed {} outside {MIN_SPEED}-{MAX_SPEED}",
                self.simulation.speed
            ));
        }
        if !(0.0..=1.0).contains(&self.simulation.random_density) {
            return invalid(format!(
                "random density {} outside 0-1",
                self.simulation.random_density
            ));
        }
        Ok(())
    }

    pub fn merge_with_cli(&mut self, overrides: &CliOverrides) {
        if let Some(cell_size) = overrides.cell_size {
            self.grid.cell_size = cell_size;
        }
        if let Some(speed) = overrides.speed {
            self.simulation.speed = speed;
        }
        if let Some(seed) = overrides.seed {
            self.simulation.seed = Some(seed);
        }
        if let Some(ref path) = overrides.preferences_file {
            self.preferences_file = path.clone();
        }
    }

    /// Grid (rows, cols) that fits the canvas
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let cell = self.grid.cell_size.max(1);
        (
            (self.window.canvas_height / cell) as usize,
            (self.window.canvas_width / cell) as usize,
        )
    }

    /// Side panel sized from `window.sidebar_width`
    pub fn panel(&self) -> Panel {
        Panel::new(self.window.sidebar_width as f32)
    }

    pub fn session_options(&self, language: Language) -> SessionOptions {
        SessionOptions {
            speed: self.simulation.speed,
            random_density: self.simulation.random_density,
            parallel_threshold: self.simulation.parallel_threshold,
            seed: self.simulation.seed,
            language,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_desktop_layout() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.grid_dimensions(), (75, 100));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, "grid:\n  cell_size: 10\nsimulation:\n  speed: 20\n").unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.grid.cell_size, 10);
        assert_eq!(settings.simulation.speed, 20);
        assert_eq!(settings.window, WindowConfig::default());
        assert_eq!(settings.grid_dimensions(), (60, 80));
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        let mut settings = Settings::default();
        settings.simulation.seed = Some(42);
        settings.to_file(&path).unwrap();
        assert_eq!(Settings::from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut settings = Settings::default();
        settings.grid.cell_size = 0;
        assert!(matches!(settings.validate(), Err(ConfigError::Invalid(_))));

        let mut settings = Settings::default();
        settings.simulation.speed = 31;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.simulation.random_density = 1.5;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.grid.cell_size = 1000;
        assert!(settings.validate().is_err());

        let mut settings = Settings::default();
        settings.window.sidebar_width = 100;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_sidebar_width_sizes_the_panel() {
        let mut settings = Settings::default();
        settings.window.sidebar_width = 360;
        assert!(settings.validate().is_ok());

        let panel = settings.panel();
        assert_eq!(panel.width(), 360.0);
        // Window is canvas + sidebar wide, so the grid area is exactly the canvas
        let screen = ((settings.window.canvas_width + 360) as f32, settings.window.canvas_height as f32);
        let area = panel.grid_area_in(screen);
        assert_eq!((area.width, area.height), (800.0, 600.0));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::from_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "grid: [not, a, map").unwrap();
        assert!(matches!(Settings::from_file(&path), Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn test_cli_overrides_win() {
        let mut settings = Settings::default();
        settings.merge_with_cli(&CliOverrides {
            cell_size: Some(4),
            speed: Some(12),
            seed: Some(3),
            preferences_file: None,
        });
        assert_eq!(settings.grid.cell_size, 4);
        assert_eq!(settings.simulation.speed, 12);
        assert_eq!(settings.simulation.seed, Some(3));
        assert_eq!(settings.grid_dimensions(), (150, 200));
    }
}

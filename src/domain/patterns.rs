use rand::Rng;
use super::{Cell, GridState};

/// Fill probability used by the "Random" preset
pub const DEFAULT_RANDOM_DENSITY: f64 = 0.2;

/// Grouping shown in the preset panel
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    StillLife,
    Oscillator,
    Spaceship,
    Other,
}

impl Category {
    /// Panel order
    pub const ALL: [Category; 4] = [Self::StillLife, Self::Oscillator, Self::Spaceship, Self::Other];
}

/// Immutable preset pattern, stored row-major as 0/1 literals
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    /// Numeric shortcut 1-7
    pub id: u8,
    /// Lower-case lookup key
    pub key: &'static str,
    pub name: &'static str,
    pub category: Category,
    rows: &'static [&'static [u8]],
}

impl Pattern {
    pub const fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// (row, col) of every alive pattern cell
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &bit)| bit == 1)
                .map(move |(c, _)| (r, c))
        })
    }

    /// Top-left corner that centers the pattern on the grid.
    /// Patterns larger than the grid are anchored at 0 and clipped.
    pub fn centered_origin(&self, grid: &GridState) -> (usize, usize) {
        let (rows, cols) = grid.dimensions();
        (
            rows.saturating_sub(self.height()) / 2,
            cols.saturating_sub(self.width()) / 2,
        )
    }

    /// Stamp the alive cells onto the grid, centered. Dead pattern cells are
    /// not written, so existing cells are only ever turned on.
    /// Returns how many cells were written.
    pub fn place_on(&self, grid: &mut GridState) -> usize {
        let (r0, c0) = self.centered_origin(grid);
        self.alive_cells()
            .filter(|&(r, c)| grid.set(r0 + r, c0 + c, Cell::Alive))
            .count()
    }
}

/// Clear the grid, then set each cell alive with probability `density`
pub fn place_random<R: Rng + ?Sized>(grid: &mut GridState, density: f64, rng: &mut R) {
    let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
    grid.reset();
    grid.cells_mut()
        .iter_mut()
        .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(density)));
}

/// What a preset trigger resolves to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresetChoice {
    Pattern(&'static Pattern),
    Random,
}

impl PresetChoice {
    /// Case-insensitive lookup by key ("glider", "lwss", "random", ...)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("random") {
            return Some(Self::Random);
        }
        presets::ALL
            .iter()
            .copied()
            .find(|p| p.key.eq_ignore_ascii_case(name) || p.name.eq_ignore_ascii_case(name))
            .map(Self::Pattern)
    }

    /// Numeric shortcut 1-7
    pub fn from_id(id: u8) -> Option<Self> {
        presets::by_id(id).map(Self::Pattern)
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Pattern(pattern) => pattern.key,
            Self::Random => "random",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Self::Pattern(pattern) => pattern.category,
            Self::Random => Category::Other,
        }
    }

    /// Every choice of `category`, in shortcut order with Random last
    pub fn in_category(category: Category) -> impl Iterator<Item = PresetChoice> {
        presets::ALL
            .into_iter()
            .map(Self::Pattern)
            .chain(std::iter::once(Self::Random))
            .filter(move |choice| choice.category() == category)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    pub const BLOCK: Pattern = Pattern {
        id: 1,
        key: "block",
        name: "Block",
        category: Category::StillLife,
        rows: &[
            &[1, 1],
            &[1, 1],
        ],
    };

    pub const BLINKER: Pattern = Pattern {
        id: 2,
        key: "blinker",
        name: "Blinker",
        category: Category::Oscillator,
        rows: &[
            &[1, 1, 1],
        ],
    };

    pub const BEACON: Pattern = Pattern {
        id: 3,
        key: "beacon",
        name: "Beacon",
        category: Category::Oscillator,
        rows: &[
            &[1, 1, 0, 0],
            &[1, 1, 0, 0],
            &[0, 0, 1, 1],
            &[0, 0, 1, 1],
        ],
    };

    pub const TOAD: Pattern = Pattern {
        id: 4,
        key: "toad",
        name: "Toad",
        category: Category::Oscillator,
        rows: &[
            &[0, 0, 1, 1, 1, 0],
            &[1, 1, 1, 0, 0, 0],
        ],
    };

    pub const PULSAR: Pattern = Pattern {
        id: 5,
        key: "pulsar",
        name: "Pulsar",
        category: Category::Oscillator,
        rows: &[
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
        ],
    };

    /// Simplest spaceship, moves one cell down-right every 4 generations
    pub const GLIDER: Pattern = Pattern {
        id: 6,
        key: "glider",
        name: "Glider",
        category: Category::Spaceship,
        rows: &[
            &[0, 1, 0],
            &[0, 0, 1],
            &[1, 1, 1],
        ],
    };

    pub const LWSS: Pattern = Pattern {
        id: 7,
        key: "lwss",
        name: "LWSS",
        category: Category::Spaceship,
        rows: &[
            &[0, 1, 1, 0, 0, 0],
            &[1, 0, 0, 0, 1, 0],
            &[1, 0, 0, 0, 0, 1],
            &[1, 1, 1, 1, 0, 0],
        ],
    };

    /// All named presets in shortcut order 1-7
    pub const ALL: [&Pattern; 7] = [&BLOCK, &BLINKER, &BEACON, &TOAD, &PULSAR, &GLIDER, &LWSS];

    pub fn by_id(id: u8) -> Option<&'static Pattern> {
        ALL.iter().copied().find(|p| p.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SimulationEngine;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::BTreeSet;

    fn alive_set(grid: &GridState) -> BTreeSet<(usize, usize)> {
        grid.alive_cells().collect()
    }

    #[test]
    fn test_pattern_dimensions() {
        let dims: Vec<_> = presets::ALL.iter().map(|p| (p.height(), p.width())).collect();
        assert_eq!(dims, vec![(2, 2), (1, 3), (4, 4), (2, 6), (13, 13), (3, 3), (4, 6)]);
    }

    #[test]
    fn test_rows_are_rectangular() {
        for pattern in presets::ALL {
            assert!(pattern.rows.iter().all(|row| row.len() == pattern.width()), "{}", pattern.name);
        }
    }

    #[test]
    fn test_alive_counts() {
        let counts: Vec<_> = presets::ALL.iter().map(|p| p.alive_cells().count()).collect();
        assert_eq!(counts, vec![4, 3, 8, 6, 48, 5, 9]);
    }

    #[test]
    fn test_ids_match_shortcut_order() {
        let keys: Vec<_> = (1..=7).filter_map(presets::by_id).map(|p| p.key).collect();
        assert_eq!(keys, vec!["block", "blinker", "beacon", "toad", "pulsar", "glider", "lwss"]);
        assert!(presets::by_id(0).is_none());
        assert!(presets::by_id(8).is_none());
    }

    #[test]
    fn test_choice_lookup() {
        assert_eq!(PresetChoice::from_name("Glider"), Some(PresetChoice::Pattern(&presets::GLIDER)));
        assert_eq!(PresetChoice::from_name("LWSS"), Some(PresetChoice::Pattern(&presets::LWSS)));
        assert_eq!(PresetChoice::from_name(" random "), Some(PresetChoice::Random));
        assert_eq!(PresetChoice::from_name("gosper"), None);
        assert_eq!(PresetChoice::from_id(5).map(|c| c.key()), Some("pulsar"));
    }

    #[test]
    fn test_every_choice_has_one_category() {
        let grouped: Vec<Vec<&str>> = Category::ALL
            .iter()
            .map(|&c| PresetChoice::in_category(c).map(|choice| choice.key()).collect())
            .collect();
        assert_eq!(
            grouped,
            vec![
                vec!["block"],
                vec!["blinker", "beacon", "toad", "pulsar"],
                vec!["glider", "lwss"],
                vec!["random"],
            ]
        );
    }

    #[test]
    fn test_glider_centered_on_ten_by_ten() {
        let mut grid = GridState::new(10, 10);
        assert_eq!(presets::GLIDER.centered_origin(&grid), (3, 3));
        assert_eq!(presets::GLIDER.place_on(&mut grid), 5);

        let expected: BTreeSet<_> = [(3, 4), (4, 5), (5, 3), (5, 4), (5, 5)].into_iter().collect();
        assert_eq!(alive_set(&grid), expected);
    }

    #[test]
    fn test_glider_one_step_on_ten_by_ten() {
        let mut grid = GridState::new(10, 10);
        presets::GLIDER.place_on(&mut grid);
        SimulationEngine::new().advance(&mut grid);

        let expected: BTreeSet<_> = [(4, 3), (4, 5), (5, 4), (5, 5), (6, 4)].into_iter().collect();
        assert_eq!(alive_set(&grid), expected);
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn test_placement_is_additive() {
        let mut grid = GridState::new(20, 20);
        grid.set(0, 0, Cell::Alive);
        grid.set(19, 19, Cell::Alive);
        // Sits on a dead cell of the beacon's footprint
        let (r0, c0) = presets::BEACON.centered_origin(&grid);
        grid.set(r0, c0 + 3, Cell::Alive);

        presets::BEACON.place_on(&mut grid);

        assert!(grid.is_alive(0, 0));
        assert!(grid.is_alive(19, 19));
        assert!(grid.is_alive(r0, c0 + 3));
        assert_eq!(grid.population(), 3 + 8);
    }

    #[test]
    fn test_placement_keeps_generation() {
        let mut grid = GridState::new(10, 10);
        SimulationEngine::new().advance(&mut grid);
        presets::BLOCK.place_on(&mut grid);
        assert_eq!(grid.generation(), 1);
    }

    #[test]
    fn test_oversized_pattern_is_clipped() {
        let mut grid = GridState::new(5, 5);
        assert_eq!(presets::PULSAR.centered_origin(&grid), (0, 0));
        let written = presets::PULSAR.place_on(&mut grid);
        assert_eq!(written, grid.population());
        assert!(written < 48);
        // Row 0 of the pulsar has alive cells at cols 2..=4
        assert!(grid.is_alive(0, 2) && grid.is_alive(0, 3) && grid.is_alive(0, 4));
    }

    #[test]
    fn test_pulsar_has_period_three() {
        let engine = SimulationEngine::new();
        let mut grid = GridState::new(19, 19);
        presets::PULSAR.place_on(&mut grid);
        let start = alive_set(&grid);

        engine.advance(&mut grid);
        assert_ne!(alive_set(&grid), start);
        engine.advance(&mut grid);
        engine.advance(&mut grid);
        assert_eq!(alive_set(&grid), start);
    }

    #[test]
    fn test_random_density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = GridState::new(12, 15);

        place_random(&mut grid, 1.0, &mut rng);
        assert_eq!(grid.population(), 12 * 15);

        place_random(&mut grid, 0.0, &mut rng);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_random_resets_generation_and_clamps_density() {
        let engine = SimulationEngine::new();
        let mut rng = StdRng::seed_from_u64(2);
        let mut grid = GridState::new(8, 8);
        engine.advance(&mut grid);
        engine.advance(&mut grid);

        place_random(&mut grid, 3.5, &mut rng);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.population(), 64);

        place_random(&mut grid, f64::NAN, &mut rng);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_random_is_roughly_density() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = GridState::new(100, 100);
        place_random(&mut grid, DEFAULT_RANDOM_DENSITY, &mut rng);
        let population = grid.population();
        assert!((1500..2500).contains(&population), "population {population}");
    }
}

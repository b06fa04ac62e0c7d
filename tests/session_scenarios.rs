use std::collections::BTreeSet;
use std::time::Duration;
use life_torus::{
    domain::live_neighbors, map_pointer_to_cell, presets, CanvasGeometry, Cell, Command, GameState,
    GridState, PresetChoice, RunState, SessionOptions, SimulationEngine, SurfaceRect,
};

fn session(rows: usize, cols: usize) -> GameState {
    GameState::new(rows, cols, SessionOptions { seed: Some(11), ..SessionOptions::default() })
}

fn alive(grid: &GridState) -> BTreeSet<(usize, usize)> {
    grid.alive_cells().collect()
}

#[test]
fn startup_is_paused_glider_at_generation_zero() {
    let state = session(75, 100);
    assert_eq!(state.run_state(), RunState::Paused);
    assert_eq!(state.generation(), 0);
    assert_eq!(state.grid().population(), 5);
    // (75 - 3) / 2 = 36, (100 - 3) / 2 = 48
    assert!(state.grid().is_alive(36, 49));
    assert!(state.grid().is_alive(38, 48));
}

#[test]
fn glider_returns_to_start_after_full_lap() {
    // On an n x n torus the glider moves (1, 1) every 4 generations,
    // so 4n generations bring it home
    let n = 12;
    let mut grid = GridState::new(n, n);
    presets::GLIDER.place_on(&mut grid);
    let start = alive(&grid);

    let engine = SimulationEngine::new();
    for _ in 0..4 * n {
        engine.advance(&mut grid);
    }
    assert_eq!(alive(&grid), start);
    assert_eq!(grid.generation(), 4 * n as u64);
}

#[test]
fn lwss_keeps_its_population_while_travelling() {
    let mut grid = GridState::new(20, 30);
    presets::LWSS.place_on(&mut grid);
    let engine = SimulationEngine::new();
    for _ in 0..4 {
        engine.advance(&mut grid);
    }
    assert_eq!(grid.population(), 9);
}

#[test]
fn beacon_and_toad_have_period_two() {
    for pattern in [&presets::BEACON, &presets::TOAD] {
        let mut grid = GridState::new(12, 12);
        pattern.place_on(&mut grid);
        let start = alive(&grid);
        let engine = SimulationEngine::new();
        engine.advance(&mut grid);
        assert_ne!(alive(&grid), start, "{}", pattern.name);
        engine.advance(&mut grid);
        assert_eq!(alive(&grid), start, "{}", pattern.name);
    }
}

#[test]
fn corner_cell_sees_opposite_corner() {
    let mut grid = GridState::new(9, 9);
    grid.set(8, 8, Cell::Alive);
    assert_eq!(live_neighbors(&grid, 0, 0), 1);
}

#[test]
fn running_session_rejects_edits_but_keeps_ticking() {
    let mut state = session(10, 10);
    state.set_speed(10);
    state.execute(Command::ToggleRun);
    let snapshot = alive(state.grid());
    let generation = state.generation();

    assert!(!state.execute(Command::Clear));
    assert!(!state.execute(Command::Preset(PresetChoice::Pattern(&presets::PULSAR))));
    assert!(!state.execute(Command::Preset(PresetChoice::Random)));
    assert!(!state.begin_stroke((0, 0), true));
    assert_eq!(alive(state.grid()), snapshot);
    assert_eq!(state.generation(), generation);

    assert!(state.tick(Duration::from_millis(100)));
    assert_eq!(state.generation(), generation + 1);
}

#[test]
fn pause_step_clear_cycle() {
    let mut state = session(10, 10);
    assert!(state.execute(Command::Step));
    assert!(state.execute(Command::Step));
    assert_eq!(state.generation(), 2);

    assert!(state.execute(Command::Clear));
    assert_eq!(state.generation(), 0);
    assert_eq!(state.grid().population(), 0);

    // Stepping a dead grid still counts generations
    assert!(state.execute(Command::Step));
    assert_eq!(state.generation(), 1);
    assert_eq!(state.grid().population(), 0);
}

#[test]
fn click_on_scaled_surface_draws_the_mapped_cell() {
    let mut state = session(75, 100);
    state.execute(Command::Clear);
    let canvas = CanvasGeometry::for_grid(75, 100, 8.0);
    // Canvas shown at 1.5x with a 40 px letterbox on the left
    let surface = SurfaceRect::new(40.0, 0.0, 1200.0, 900.0);

    let cell = map_pointer_to_cell((40.0 + 12.0 * 3.0, 12.0 * 5.0), surface, &canvas).unwrap();
    assert_eq!(cell, (5, 3));
    assert!(state.begin_stroke(cell, false));
    state.end_stroke();
    assert_eq!(alive(state.grid()), [(5, 3)].into_iter().collect());
}

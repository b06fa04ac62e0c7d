use std::path::PathBuf;
use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use life_torus::{
    config::{CliOverrides, PreferenceStore, Settings},
    input, rendering, CanvasGeometry, Command, GameState, Language,
};

#[derive(Parser)]
#[command(name = "life_torus")]
#[command(about = "Conway's Game of Life on a wrap-around grid")]
#[command(version)]
struct Cli {
    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Cell size in pixels (overrides config)
    #[arg(long)]
    cell_size: Option<u32>,

    /// Steps per second, 1-30 (overrides config)
    #[arg(short, long)]
    speed: Option<u32>,

    /// Seed for the Random preset
    #[arg(long)]
    seed: Option<u64>,

    /// UI language for this run: de or en
    #[arg(long)]
    lang: Option<String>,

    /// Where the language preference is stored (overrides config)
    #[arg(long)]
    preferences: Option<PathBuf>,
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    settings.merge_with_cli(&CliOverrides {
        cell_size: cli.cell_size,
        speed: cli.speed,
        seed: cli.seed,
        preferences_file: cli.preferences.clone(),
    });
    settings.validate().context("Invalid settings after command line overrides")?;
    Ok(settings)
}

fn window_conf(settings: &Settings, language: Language) -> Conf {
    Conf {
        window_title: language.strings().title.to_owned(),
        window_width: (settings.window.canvas_width + settings.window.sidebar_width) as i32,
        window_height: settings.window.canvas_height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    let store = PreferenceStore::new(&settings.preferences_file);
    let language = match cli.lang.as_deref() {
        Some(code) => Language::from_code(code)
            .with_context(|| format!("Unknown language code: {code}"))?,
        None => store.preferred_language(),
    };

    let (rows, cols) = settings.grid_dimensions();
    log::info!(
        "starting {cols}x{rows} grid, {} px cells, {} steps/s, language {}",
        settings.grid.cell_size,
        settings.simulation.speed,
        language.code()
    );

    let conf = window_conf(&settings, language);
    macroquad::Window::from_config(conf, run(settings, store, language));
    Ok(())
}

async fn run(settings: Settings, store: PreferenceStore, language: Language) {
    let (rows, cols) = settings.grid_dimensions();
    let canvas = CanvasGeometry::for_grid(rows, cols, settings.grid.cell_size as f32);
    let mut state = GameState::new(rows, cols, settings.session_options(language));
    let panel = settings.panel();

    // Touch is handled on its own, without synthetic mouse events
    simulate_mouse_with_touch(false);

    loop {
        let mouse_pos = mouse_position();
        let surface = panel.grid_surface(&canvas);
        let layout = panel.layout(&state);

        let commands = input::button_commands(&layout.buttons, mouse_pos)
            .into_iter()
            .chain(input::keyboard_commands());
        for command in commands {
            state.execute(command);
            if command == Command::ToggleLanguage {
                store.remember_language(state.language);
            }
        }

        input::handle_mouse_paint(&mut state, surface, &canvas, mouse_pos);
        input::handle_touch_paint(&mut state, surface, &canvas);

        state.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(Color::from_rgba(0x1a, 0x1a, 0x20, 255));
        rendering::draw_grid(state.grid(), &canvas, surface);
        rendering::draw_controls(&state, &panel.layout(&state), mouse_pos);
        if state.show_info {
            rendering::draw_info_overlay(&state, panel);
        }

        next_frame().await;
    }
}

//! Serial vs rayon generation advance on growing random grids

use std::time::Instant;
use rand::{SeedableRng, rngs::StdRng};
use life_torus::domain::{GridState, SimulationEngine, place_random, DEFAULT_RANDOM_DENSITY};

fn random_grid(size: usize) -> GridState {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = GridState::new(size, size);
    place_random(&mut grid, DEFAULT_RANDOM_DENSITY, &mut rng);
    grid
}

/// Average milliseconds per generation
fn benchmark(engine: SimulationEngine, size: usize, iterations: u32) -> f64 {
    let mut grid = random_grid(size);
    let start = Instant::now();
    for _ in 0..iterations {
        engine.advance(&mut grid);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Generation Advance Benchmark ===\n");

    let serial = SimulationEngine::with_parallel_threshold(usize::MAX);
    let parallel = SimulationEngine::with_parallel_threshold(0);
    let sizes = [100, 250, 500, 1000, 2000, 4000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>10}", "Size", "Serial", "Parallel", "Speedup");
    println!("{:-<48}", "");

    for size in sizes {
        let serial_ms = benchmark(serial, size, iterations);
        let parallel_ms = benchmark(parallel, size, iterations);
        println!(
            "{:>10} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", size, size),
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }

    let size = 4000;
    let cells = (size * size) as f64;
    let ms = benchmark(SimulationEngine::new(), size, iterations);
    println!("\n=== Throughput at {size}x{size} (default engine) ===\n");
    println!("{:.2} ms/gen, {:.1}M cells/sec", ms, cells / (ms / 1000.0) / 1_000_000.0);
}

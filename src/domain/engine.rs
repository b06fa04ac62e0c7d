//! Generation transition on a toroidal grid.
//!
//! The engine reads the live buffer of a [`GridState`], writes every cell's
//! successor into the back buffer and then flips the buffers. Large grids
//! evaluate rows in parallel with rayon; the result is identical to the
//! serial path because each output row depends only on the live buffer.

use rayon::prelude::*;
use super::{Cell, GridState};

/// Grids with at least this many cells are evolved in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256 * 256;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationEngine {
    parallel_threshold: usize,
}

impl SimulationEngine {
    pub const fn new() -> Self {
        Self::with_parallel_threshold(DEFAULT_PARALLEL_THRESHOLD)
    }

    /// Engine that switches to rayon once `rows * cols >= threshold`
    pub const fn with_parallel_threshold(threshold: usize) -> Self {
        Self { parallel_threshold: threshold }
    }

    pub const fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Advance the grid by exactly one generation
    pub fn advance(&self, grid: &mut GridState) {
        let (rows, cols) = grid.dimensions();
        let parallel = rows * cols >= self.parallel_threshold;
        let (current, next) = grid.split_buffers();

        if parallel {
            next.par_chunks_mut(cols)
                .enumerate()
                .for_each(|(row, out)| evolve_row(current, rows, cols, row, out));
        } else {
            next.chunks_mut(cols)
                .enumerate()
                .for_each(|(row, out)| evolve_row(current, rows, cols, row, out));
        }

        grid.commit_generation();
    }
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Live neighbors of a cell, wrapping around every edge
pub fn live_neighbors(grid: &GridState, row: usize, col: usize) -> u8 {
    let (rows, cols) = grid.dimensions();
    count_live_neighbors(grid.cells(), rows, cols, row % rows, col % cols)
}

fn evolve_row(current: &[Cell], rows: usize, cols: usize, row: usize, out: &mut [Cell]) {
    let start = row * cols;
    out.iter_mut().enumerate().for_each(|(col, slot)| {
        let neighbors = count_live_neighbors(current, rows, cols, row, col);
        *slot = current[start + col].evolve(neighbors);
    });
}

fn count_live_neighbors(cells: &[Cell], rows: usize, cols: usize, row: usize, col: usize) -> u8 {
    (-1..=1)
        .flat_map(|dr| (-1..=1).map(move |dc| (dr, dc)))
        .filter(|&(dr, dc)| dr != 0 || dc != 0)
        .map(|(dr, dc)| {
            let r = wrap(row, dr, rows);
            let c = wrap(col, dc, cols);
            cells[r * cols + c]
        })
        .filter(|cell| cell.is_alive())
        .count() as u8
}

/// (idx + delta) mod len for delta in -1..=1
const fn wrap(idx: usize, delta: isize, len: usize) -> usize {
    ((idx + len) as isize + delta) as usize % len
}

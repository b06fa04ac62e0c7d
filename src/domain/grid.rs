use super::Cell;

/// Double-buffered cell matrix for one session.
///
/// Both buffers are allocated once in [`GridState::new`]; advancing a
/// generation only flips which of the two is live, so the renderer and the
/// algorithms always read `buffers[front]`.
#[derive(Clone, Debug)]
pub struct GridState {
    rows: usize,
    cols: usize,
    buffers: [Vec<Cell>; 2],
    front: usize,
    generation: u64,
}

impl GridState {
    /// Create a grid with every cell dead and the generation counter at 0.
    /// Zero dimensions are bumped to 1 so the torus is never empty.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        Self {
            rows,
            cols,
            buffers: [vec![Cell::Dead; rows * cols], vec![Cell::Dead; rows * cols]],
            front: 0,
            generation: 0,
        }
    }

    /// Kill every cell and reset the generation counter, keeping both buffers
    pub fn reset(&mut self) {
        self.buffers
            .iter_mut()
            .for_each(|buf| buf.iter_mut().for_each(|cell| *cell = Cell::Dead));
        self.front = 0;
        self.generation = 0;
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the live cell at position, `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.rows && col < self.cols).then(|| self.buffers[self.front][self.index(row, col)])
    }

    /// Out-of-range positions read as dead
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Cell::is_alive)
    }

    /// Write a cell into the live buffer. Returns false (and writes nothing)
    /// when the position is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        let idx = self.index(row, col);
        self.buffers[self.front][idx] = cell;
        true
    }

    /// Row-major view of the live buffer
    pub fn cells(&self) -> &[Cell] {
        &self.buffers[self.front]
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells().iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over (row, col) of every alive cell in row-major order
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells()
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(idx, _)| (idx / cols, idx % cols))
    }

    /// Mutable access to every cell of the live buffer
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.buffers[self.front]
    }

    /// Live buffer for reading, back buffer for writing the next generation
    pub(crate) fn split_buffers(&mut self) -> (&[Cell], &mut [Cell]) {
        let (first, second) = self.buffers.split_at_mut(1);
        if self.front == 0 {
            (first[0].as_slice(), second[0].as_mut_slice())
        } else {
            (second[0].as_slice(), first[0].as_mut_slice())
        }
    }

    /// Promote the back buffer to live and count the generation
    pub(crate) fn commit_generation(&mut self) {
        self.front ^= 1;
        self.generation += 1;
    }
}

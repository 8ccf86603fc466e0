//! This module contains logic for generating random Sudoku puzzles.
//!
//! Generation is done in two steps: first, a full solution grid is built by
//! seeding the three diagonal blocks with random permutations and completing
//! the rest with the [BacktrackingSolver]. Then, a number of cells
//! determined by the [Difficulty] is removed at random positions, and the
//! remaining clues are snapshotted into a [GivenMask](crate::GivenMask).
//!
//! Note that no uniqueness check is performed on the carved puzzle: it may
//! admit more than one solution, especially at high removal counts.

use crate::{BLOCK_SIZE, CELL_COUNT, GRID_SIZE, GivenMask, SudokuGrid};
use crate::error::{SudokuError, SudokuResult};
use crate::solver::BacktrackingSolver;

use log::debug;

use rand::Rng;
use rand::rngs::ThreadRng;

use serde::{Deserialize, Serialize};

/// The difficulty of a generated puzzle, expressed as the fraction of cells
/// that remain filled after carving. Lower fractions leave fewer clues and
/// therefore yield harder puzzles.
///
/// The fraction must be a finite number strictly between 0 and 1. Both
/// extremes are permitted in spirit but excluded as exact values: a
/// fraction near 1 may remove no cell at all and a fraction near 0 removes
/// almost every cell, which are both accepted outcomes.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct Difficulty(f64);

impl Difficulty {

    /// An easy puzzle, which keeps 80 % of the cells (65 clues).
    pub const EASY: Difficulty = Difficulty(0.8);

    /// A medium puzzle, which keeps 40 % of the cells (32 clues).
    pub const MEDIUM: Difficulty = Difficulty(0.4);

    /// A hard puzzle, which keeps 10 % of the cells (8 clues).
    pub const HARD: Difficulty = Difficulty(0.1);

    /// Creates a difficulty from the fraction of cells that shall remain
    /// filled.
    ///
    /// # Arguments
    ///
    /// * `fraction`: The fraction of cells to keep. Must be a finite number
    /// strictly between 0 and 1.
    ///
    /// # Errors
    ///
    /// If `fraction` is outside the specified range. In that case,
    /// `SudokuError::InvalidDifficulty` is returned.
    pub fn new(fraction: f64) -> SudokuResult<Difficulty> {
        if fraction.is_finite() && fraction > 0.0 && fraction < 1.0 {
            Ok(Difficulty(fraction))
        }
        else {
            Err(SudokuError::InvalidDifficulty)
        }
    }

    /// Gets the fraction of cells that remain filled at this difficulty.
    pub fn fraction(self) -> f64 {
        self.0
    }

    /// The number of cells removed from a full solution grid at this
    /// difficulty, i.e. `81 * (1 - fraction)`, rounded to the nearest
    /// integer.
    pub fn cells_to_remove(self) -> usize {
        (CELL_COUNT as f64 * (1.0 - self.0)).round() as usize
    }
}

impl Default for Difficulty {
    fn default() -> Difficulty {
        Difficulty::MEDIUM
    }
}

/// The product of puzzle generation: a carved [SudokuGrid] together with
/// the [GivenMask] that marks its clues. The mask is snapshotted before the
/// grid is handed out, so it is guaranteed to describe the puzzle's initial
/// state no matter what edits happen later.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Puzzle {
    grid: SudokuGrid,
    givens: GivenMask
}

impl Puzzle {

    /// Gets a reference to the puzzle grid.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a reference to the mask marking the puzzle's givens.
    pub fn givens(&self) -> &GivenMask {
        &self.givens
    }

    /// Decomposes this puzzle into its grid and its given mask.
    pub fn into_parts(self) -> (SudokuGrid, GivenMask) {
        (self.grid, self.givens)
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

/// A generator randomly generates Sudoku puzzles: full solution grids via
/// [Generator::generate_solved] and carved, playable puzzles via
/// [Generator::generate]. It uses a random number generator to decide the
/// content. For most cases, sensible defaults are provided by
/// [Generator::new_default].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_diagonal_block(&mut self, grid: &mut SudokuGrid, block: usize) {
        let numbers = shuffle(&mut self.rng, 1..=GRID_SIZE);
        let base = block * BLOCK_SIZE;
        let mut i = 0;

        for row in base..(base + BLOCK_SIZE) {
            for column in base..(base + BLOCK_SIZE) {
                grid.set_cell(column, row, numbers[i]).unwrap();
                i += 1;
            }
        }
    }

    /// Generates a new random full solution grid, i.e. one where every cell
    /// is filled and no row, column, or block contains a duplicate digit.
    ///
    /// The three diagonal blocks share no row, column, or block with each
    /// other, so each is seeded with an independent random permutation of
    /// the digits 1 to 9 without any validity check. The remaining cells
    /// are then filled by the [BacktrackingSolver].
    ///
    /// # Errors
    ///
    /// If the backtracking search cannot complete the seeded grid, which
    /// cannot happen for diagonal-only seeding,
    /// `SudokuError::UnsatisfiableGrid` is returned instead of retrying
    /// indefinitely.
    pub fn generate_solved(&mut self) -> SudokuResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();

        for block in 0..BLOCK_SIZE {
            self.fill_diagonal_block(&mut grid, block);
        }

        if BacktrackingSolver.complete(&mut grid) {
            debug!("generated a full solution grid");
            Ok(grid)
        }
        else {
            Err(SudokuError::UnsatisfiableGrid)
        }
    }

    fn remove_cells(&mut self, grid: &mut SudokuGrid, count: usize) {
        let mut removed = 0;

        while removed < count {
            let column = self.rng.gen_range(0..GRID_SIZE);
            let row = self.rng.gen_range(0..GRID_SIZE);

            if grid.get_cell(column, row).unwrap().is_some() {
                grid.clear_cell(column, row).unwrap();
                removed += 1;
            }
        }
    }

    /// Generates a new random [Puzzle] of the given difficulty. A full
    /// solution grid is generated first, then
    /// [Difficulty::cells_to_remove] cells at uniformly random positions
    /// are cleared. Cells that are already empty are rerolled, so the
    /// number of removed cells is always exact.
    ///
    /// No uniqueness check is performed; see the
    /// [module documentation](self).
    ///
    /// # Arguments
    ///
    /// * `difficulty`: The [Difficulty] deciding how many cells are
    /// removed.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsatisfiableGrid` If the underlying solution grid
    /// could not be generated (see [Generator::generate_solved]; defensive,
    /// not expected to occur).
    pub fn generate(&mut self, difficulty: Difficulty)
            -> SudokuResult<Puzzle> {
        let mut grid = self.generate_solved()?;
        let cells_to_remove = difficulty.cells_to_remove();

        self.remove_cells(&mut grid, cells_to_remove);
        debug!("carved {} cells, {} clues remain", cells_to_remove,
            grid.count_clues());

        let givens = GivenMask::of(&grid);

        Ok(Puzzle {
            grid,
            givens
        })
    }
}

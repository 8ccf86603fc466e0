//! This module contains the state management for one interactive puzzle.
//!
//! A [PuzzleSession] owns the live grid of a single puzzle together with
//! the immutable [GivenMask](crate::GivenMask) of its clues and the
//! currently selected cell. It is the handle a frontend holds on to: mouse
//! clicks become [PuzzleSession::select] calls, digit keys become
//! [PuzzleSession::set_selected] calls, and every frame the frontend can
//! query [PuzzleSession::conflicting_cells] for error highlighting and
//! [PuzzleSession::is_won] for the win condition.
//!
//! All rule logic is delegated to the [constraint](crate::constraint)
//! module; the session never rejects a rule-violating digit, it only
//! protects the given cells from being selected.

use crate::{GRID_SIZE, GivenMask, SudokuGrid};
use crate::constraint;
use crate::error::{SudokuError, SudokuResult};
use crate::generator::{Difficulty, Generator, Puzzle};

use log::debug;

use rand::Rng;

use std::collections::HashSet;

/// The interactive state of one puzzle: the current grid, the mask of its
/// given cells, and the current selection. See the
/// [module documentation](self) for an overview.
#[derive(Clone, Debug)]
pub struct PuzzleSession {
    grid: SudokuGrid,
    givens: GivenMask,
    selection: Option<(usize, usize)>
}

impl PuzzleSession {

    /// Creates a new session playing the given puzzle, with no cell
    /// selected.
    pub fn new(puzzle: Puzzle) -> PuzzleSession {
        let (grid, givens) = puzzle.into_parts();

        PuzzleSession {
            grid,
            givens,
            selection: None
        }
    }

    /// Creates a new session playing a freshly generated puzzle of the
    /// given difficulty.
    ///
    /// # Arguments
    ///
    /// * `generator`: The [Generator] used to create the puzzle.
    /// * `difficulty`: The [Difficulty] of the created puzzle.
    ///
    /// # Errors
    ///
    /// Any error raised by [Generator::generate].
    pub fn generate<R: Rng>(generator: &mut Generator<R>,
            difficulty: Difficulty) -> SudokuResult<PuzzleSession> {
        Ok(PuzzleSession::new(generator.generate(difficulty)?))
    }

    /// Gets a reference to the current grid of this session.
    pub fn grid(&self) -> &SudokuGrid {
        &self.grid
    }

    /// Gets a reference to the mask marking this session's given cells.
    pub fn givens(&self) -> &GivenMask {
        &self.givens
    }

    /// Gets the currently selected cell as a `(column, row)` pair, or
    /// `None` if no cell is selected.
    pub fn selection(&self) -> Option<(usize, usize)> {
        self.selection
    }

    /// Indicates whether the cell at the specified position is a given,
    /// i.e. a fixed clue which must not be edited.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn is_given(&self, column: usize, row: usize) -> SudokuResult<bool> {
        self.givens.is_given(column, row)
    }

    /// Selects the cell at the specified position, if it is not a given.
    /// Given cells cannot be selected; in that case the previous selection
    /// remains unchanged and `false` is returned.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the selected cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the selected cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn select(&mut self, column: usize, row: usize)
            -> SudokuResult<bool> {
        if self.givens.is_given(column, row)? {
            Ok(false)
        }
        else {
            self.selection = Some((column, row));
            Ok(true)
        }
    }

    /// Removes the selection, if any. Afterwards,
    /// [PuzzleSession::selection] returns `None`.
    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// Sets the content of the cell at the specified position, where a
    /// `value` of 0 clears the cell and any other value is entered as a
    /// digit. Entering a digit that violates the rules is *not* an error -
    /// the conflict is reported by [PuzzleSession::conflicting_cells]
    /// instead.
    ///
    /// Note that this method does *not* check the given mask; callers that
    /// do not go through [PuzzleSession::select] and
    /// [PuzzleSession::set_selected] must check [PuzzleSession::is_given]
    /// themselves before editing.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the edited cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the edited cell. Must be in the
    /// range `[0, 9[`.
    /// * `value`: The new cell content. Must be in the range `[0, 9]`,
    /// where 0 stands for an empty cell.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `value` is not in the specified
    /// range. The grid is unchanged in this case.
    pub fn set_cell(&mut self, column: usize, row: usize, value: usize)
            -> SudokuResult<()> {
        if value > GRID_SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        if value == 0 {
            self.grid.clear_cell(column, row)
        }
        else {
            self.grid.set_cell(column, row, value)
        }
    }

    /// Sets the content of the currently selected cell, with the same
    /// semantics as [PuzzleSession::set_cell]. Returns `true` if a cell was
    /// selected and edited, and `false` if no cell is selected, in which
    /// case the grid is unchanged. Since givens can never be selected, this
    /// path cannot overwrite a clue.
    ///
    /// # Arguments
    ///
    /// * `value`: The new cell content. Must be in the range `[0, 9]`,
    /// where 0 stands for an empty cell.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidNumber` If `value` is not in the specified
    /// range. The grid is unchanged in this case.
    pub fn set_selected(&mut self, value: usize) -> SudokuResult<bool> {
        if let Some((column, row)) = self.selection {
            self.set_cell(column, row, value)?;
            Ok(true)
        }
        else {
            Ok(false)
        }
    }

    /// Indicates whether the grid is complete, i.e. every cell is filled
    /// with a digit. Completeness makes no statement about correctness; see
    /// [PuzzleSession::is_won] for the full win condition.
    pub fn is_complete(&self) -> bool {
        self.grid.is_full()
    }

    /// Indicates whether the grid currently matches the classic rules, i.e.
    /// no row, column, or block contains a duplicate digit.
    pub fn is_valid(&self) -> bool {
        constraint::is_valid(&self.grid)
    }

    /// Computes the set of all cells which currently participate in a rule
    /// violation, as `(column, row)` pairs. See
    /// [conflicting_cells](crate::constraint::conflicting_cells).
    pub fn conflicting_cells(&self) -> HashSet<(usize, usize)> {
        constraint::conflicting_cells(&self.grid)
    }

    /// Indicates whether the puzzle is won, i.e. the grid is complete *and*
    /// valid. A grid with even a single empty cell is never won, no matter
    /// how valid it is.
    pub fn is_won(&self) -> bool {
        self.is_complete() && self.is_valid()
    }

    /// Replaces this session's puzzle with a freshly generated one of the
    /// given difficulty and removes the selection. On error, the session is
    /// unchanged.
    ///
    /// # Arguments
    ///
    /// * `generator`: The [Generator] used to create the new puzzle.
    /// * `difficulty`: The [Difficulty] of the new puzzle.
    ///
    /// # Errors
    ///
    /// Any error raised by [Generator::generate].
    pub fn reset<R: Rng>(&mut self, generator: &mut Generator<R>,
            difficulty: Difficulty) -> SudokuResult<()> {
        let puzzle = generator.generate(difficulty)?;
        let (grid, givens) = puzzle.into_parts();

        self.grid = grid;
        self.givens = givens;
        self.selection = None;
        debug!("session reset with {} givens", self.givens.count());
        Ok(())
    }
}

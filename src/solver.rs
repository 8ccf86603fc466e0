//! This module contains the logic for solving Sudoku grids.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally
//! usable implementation.
//!
//! Note that this solver family makes no statement about uniqueness: a
//! [Completion::Filled] outcome wraps *some* solution, which is not
//! necessarily the only one. The [generator](crate::generator) does not
//! check uniqueness either, so carved puzzles may admit multiple solutions.

use crate::{GRID_SIZE, SudokuGrid};
use crate::constraint;

/// An enumeration of the possible outcomes of a completion search on a
/// Sudoku grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Completion {

    /// Indicates that the grid could be completed. The full grid, which
    /// contains all digits of the input grid, is wrapped in this instance.
    Filled(SudokuGrid),

    /// Indicates that the grid cannot be completed at all, i.e. every
    /// branch of the search was exhausted without finding a full grid that
    /// matches the classic rules.
    Infeasible
}

/// A trait for structs which have the ability to complete partially filled
/// Sudoku grids. Implementers do not need to prove anything about the
/// uniqueness of the solution they find - any full grid that matches the
/// classic rules and contains all input digits is acceptable.
pub trait Solver {

    /// Solves, or attempts to solve, the provided grid. If some assignment
    /// of the empty cells satisfies the classic rules, a [Completion::Filled]
    /// with the completed grid shall be returned, otherwise
    /// [Completion::Infeasible]. The input grid is not modified.
    fn solve(&self, grid: &SudokuGrid) -> Completion;
}

/// A perfect [Solver](trait.Solver.html) which completes grids by
/// recursively testing all valid digits for each empty cell. This means two
/// things:
///
/// * Its worst-case runtime is exponential, i.e. it may be slow if the grid
/// has many missing digits. In practice the
/// [can_place](crate::constraint::can_place) gate prunes failing branches
/// immediately, so completion is near-instant at 9x9 scale.
/// * It finds a solution for every solveable grid.
///
/// Cells are visited in row-major order and candidates are tried in
/// ascending order, so the search itself is deterministic - all variety in
/// generated puzzles comes from the random block seeding performed by the
/// [Generator](crate::generator::Generator).
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn solve_rec(grid: &mut SudokuGrid, column: usize, row: usize) -> bool {
        let last_cell = row == GRID_SIZE;

        if last_cell {
            return true;
        }

        let next_column = (column + 1) % GRID_SIZE;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if grid.get_cell(column, row).unwrap().is_some() {
            return BacktrackingSolver::solve_rec(grid, next_column,
                next_row);
        }

        for number in 1..=GRID_SIZE {
            if constraint::can_place(grid, column, row, number).unwrap() {
                grid.set_cell(column, row, number).unwrap();

                if BacktrackingSolver::solve_rec(grid, next_column,
                        next_row) {
                    return true;
                }

                grid.clear_cell(column, row).unwrap();
            }
        }

        false
    }

    /// Completes the given grid in place, filling every empty cell such
    /// that the full grid matches the classic rules. Returns `true` if a
    /// solution was found. Otherwise `false` is returned and the grid is
    /// left unchanged, since every tentative assignment has been undone
    /// during backtracking.
    pub fn complete(&self, grid: &mut SudokuGrid) -> bool {
        BacktrackingSolver::solve_rec(grid, 0, 0)
    }
}

impl Solver for BacktrackingSolver {

    /// Solves the provided grid by backtracking. An example of solving a
    /// classic puzzle is provided below.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    /// use sudoku_classic::solver::{BacktrackingSolver, Completion, Solver};
    ///
    /// let grid = SudokuGrid::parse("\
    ///     5,3, , ,7, , , , ,\
    ///     6, , ,1,9,5, , , ,\
    ///      ,9,8, , , , ,6, ,\
    ///     8, , , ,6, , , ,3,\
    ///     4, , ,8, ,3, , ,1,\
    ///     7, , , ,2, , , ,6,\
    ///      ,6, , , , ,2,8, ,\
    ///      , , ,4,1,9, , ,5,\
    ///      , , , ,8, , ,7,9").unwrap();
    /// let solution = BacktrackingSolver.solve(&grid);
    ///
    /// let expected = SudokuGrid::parse("\
    ///     5,3,4,6,7,8,9,1,2,\
    ///     6,7,2,1,9,5,3,4,8,\
    ///     1,9,8,3,4,2,5,6,7,\
    ///     8,5,9,7,6,1,4,2,3,\
    ///     4,2,6,8,5,3,7,9,1,\
    ///     7,1,3,9,2,4,8,5,6,\
    ///     9,6,1,5,3,7,2,8,4,\
    ///     2,8,7,4,1,9,6,3,5,\
    ///     3,4,5,2,8,6,1,7,9").unwrap();
    ///
    /// assert_eq!(Completion::Filled(expected), solution);
    /// ```
    fn solve(&self, grid: &SudokuGrid) -> Completion {
        let mut clone = grid.clone();

        if BacktrackingSolver::solve_rec(&mut clone, 0, 0) {
            Completion::Filled(clone)
        }
        else {
            Completion::Infeasible
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    // The example puzzle is taken from the World Puzzle Federation Sudoku
    // Grand Prix, GP 2020 Round 8 (Puzzle 2).
    // Puzzles: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8.pdf
    // Solutions: https://gp.worldpuzzle.org/sites/default/files/Puzzles/2020/2020_SudokuRound8_SB.pdf

    const CLASSIC_PUZZLE: &str = "\
         , , , ,8,1, , , ,\
         , ,2, , ,7,8, , ,\
         ,5,3, , , ,1,7, ,\
        3,7, , , , , , , ,\
        6, , , , , , , ,3,\
         , , , , , , ,2,4,\
         ,6,9, , , ,2,3, ,\
         , ,5,9, , ,4, , ,\
         , , ,6,5, , , , ";

    const CLASSIC_SOLUTION: &str = "\
        7,4,6,2,8,1,3,5,9,\
        9,1,2,5,3,7,8,4,6,\
        8,5,3,4,9,6,1,7,2,\
        3,7,4,1,2,5,6,9,8,\
        6,2,8,7,4,9,5,1,3,\
        5,9,1,3,6,8,7,2,4,\
        1,6,9,8,7,4,2,3,5,\
        2,8,5,9,1,3,4,6,7,\
        4,3,7,6,5,2,9,8,1";

    #[test]
    fn backtracking_solves_classic_puzzle() {
        let grid = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
        let solver = BacktrackingSolver;
        let found_solution = solver.solve(&grid);

        if let Completion::Filled(solution) = found_solution {
            let expected = SudokuGrid::parse(CLASSIC_SOLUTION).unwrap();
            assert_eq!(expected, solution, "Solver gave wrong grid.");
        }
        else {
            panic!("Solveable grid marked as infeasible.");
        }
    }

    #[test]
    fn full_grid_returned_unchanged() {
        let grid = SudokuGrid::parse(CLASSIC_SOLUTION).unwrap();
        let solver = BacktrackingSolver;

        assert_eq!(Completion::Filled(grid.clone()), solver.solve(&grid));
    }

    #[test]
    fn solved_grid_is_valid_and_full() {
        let grid = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();

        if let Completion::Filled(solution) =
                BacktrackingSolver.solve(&grid) {
            assert!(solution.is_full());
            assert!(constraint::is_valid(&solution));
        }
        else {
            panic!("Solveable grid marked as infeasible.");
        }
    }

    #[test]
    fn solution_keeps_input_digits() {
        let grid = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();

        if let Completion::Filled(solution) =
                BacktrackingSolver.solve(&grid) {
            for row in 0..GRID_SIZE {
                for column in 0..GRID_SIZE {
                    if let Some(number) =
                            grid.get_cell(column, row).unwrap() {
                        assert_eq!(Some(number),
                            solution.get_cell(column, row).unwrap());
                    }
                }
            }
        }
        else {
            panic!("Solveable grid marked as infeasible.");
        }
    }

    #[test]
    fn contradictory_grid_infeasible() {
        // The top row already contains every digit but 4, while the 4 in
        // the row below blocks the remaining cell.
        let mut grid = SudokuGrid::new();

        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(1, 0, 2).unwrap();
        grid.set_cell(2, 0, 3).unwrap();
        grid.set_cell(4, 0, 5).unwrap();
        grid.set_cell(5, 0, 6).unwrap();
        grid.set_cell(6, 0, 7).unwrap();
        grid.set_cell(7, 0, 8).unwrap();
        grid.set_cell(8, 0, 9).unwrap();
        grid.set_cell(3, 1, 4).unwrap();

        assert_eq!(Completion::Infeasible,
            BacktrackingSolver.solve(&grid));
    }

    #[test]
    fn failed_completion_leaves_grid_unchanged() {
        let mut grid = SudokuGrid::new();

        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(1, 0, 2).unwrap();
        grid.set_cell(2, 0, 3).unwrap();
        grid.set_cell(4, 0, 5).unwrap();
        grid.set_cell(5, 0, 6).unwrap();
        grid.set_cell(6, 0, 7).unwrap();
        grid.set_cell(7, 0, 8).unwrap();
        grid.set_cell(8, 0, 9).unwrap();
        grid.set_cell(3, 1, 4).unwrap();

        let before = grid.clone();

        assert!(!BacktrackingSolver.complete(&mut grid));
        assert_eq!(before, grid);
    }

    #[test]
    fn complete_fills_in_place() {
        let mut grid = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();

        assert!(BacktrackingSolver.complete(&mut grid));
        assert_eq!(SudokuGrid::parse(CLASSIC_SOLUTION).unwrap(), grid);
    }
}

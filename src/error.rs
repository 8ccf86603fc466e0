//! This module contains some error and result definitions used in this crate.

use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in this crate. This
/// does not include errors that occur when parsing Sudoku grids, see
/// [SudokuParseError](enum.SudokuParseError.html) for that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some number is invalid for a cell. This is the case if
    /// it is greater than 9, or - for operations which do not interpret 0 as
    /// clearing the cell - if it is 0.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the Sudoku grid. This is the case if either is greater than or equal
    /// to 9.
    OutOfBounds,

    /// Indicates that a difficulty fraction is invalid, that is, not a
    /// finite number strictly between 0 and 1.
    InvalidDifficulty,

    /// An error that is raised whenever a grid shall be completed which has
    /// no solution, i.e. the backtracking search exhausted every branch.
    /// Grids seeded only on the diagonal blocks are always completable, so
    /// this is a defensive error which is not expected to occur during
    /// generation.
    UnsatisfiableGrid
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a grid code with
/// [SudokuGrid::parse](crate::SudokuGrid::parse).
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell contents could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more
    /// than 9).
    InvalidNumber
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements the core of a classic 9x9 Sudoku game. It supports
//! the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking validity of grids and computing the set of conflicting cells
//! for error highlighting
//! * Solving grids using a perfect backtracking algorithm
//! * Generating random puzzles with a configurable difficulty
//! * Managing an interactive play session which tracks the current grid, the
//! immutable given cells, and the selected cell
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and
//! display a grid is provided below.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! The [constraint] module contains the checking logic for the classic
//! rules: no duplicate digit in any row, column, or block. Conflicts are
//! never rejected when they are entered - they are reported as a set of
//! conflicting cells which a frontend can highlight.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//! use sudoku_classic::constraint;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 4).unwrap();
//! grid.set_cell(5, 0, 4).unwrap();
//!
//! assert!(!constraint::is_valid(&grid));
//! assert!(constraint::conflicting_cells(&grid).contains(&(0, 0)));
//! assert!(constraint::conflicting_cells(&grid).contains(&(5, 0)));
//! ```
//!
//! # Generating puzzles
//!
//! A [Generator](generator::Generator) first builds a random full solution
//! and then removes a number of cells determined by the
//! [Difficulty](generator::Difficulty). The result is a
//! [Puzzle](generator::Puzzle), which couples the carved grid with the
//! immutable [GivenMask] of its clues.
//!
//! ```
//! use sudoku_classic::generator::{Difficulty, Generator};
//!
//! // new_default yields a generator with rand::thread_rng()
//! let mut generator = Generator::new_default();
//! let puzzle = generator.generate(Difficulty::EASY).unwrap();
//!
//! assert_eq!(65, puzzle.grid().count_clues());
//! ```
//!
//! # Play sessions
//!
//! A [PuzzleSession](session::PuzzleSession) owns the live grid of one
//! puzzle together with its given mask and the currently selected cell. All
//! rule logic is delegated to the [constraint] module.
//!
//! ```
//! use sudoku_classic::generator::{Difficulty, Generator};
//! use sudoku_classic::session::PuzzleSession;
//!
//! let mut generator = Generator::new_default();
//! let mut session =
//!     PuzzleSession::generate(&mut generator, Difficulty::MEDIUM).unwrap();
//!
//! // A freshly carved puzzle never contains conflicts.
//! assert!(session.conflicting_cells().is_empty());
//! assert!(!session.is_won());
//! ```
//!
//! # Note regarding performance
//!
//! Generating a puzzle requires a backtracking search over the grid. While
//! this is near-instant at 9x9 scale, it is still recommended to use at
//! least `opt-level = 2` in tests that generate many puzzles.

pub mod constraint;
pub mod error;
pub mod generator;
pub mod session;
pub mod solver;
pub mod util;


use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Serialize};

use std::fmt::{self, Display, Formatter};

/// The width and height of one block of the grid, which is also the number
/// of blocks that compose the grid along each axis.
pub const BLOCK_SIZE: usize = 3;

/// The number of cells along each axis of the grid, which is also the
/// largest digit that can occupy a cell.
pub const GRID_SIZE: usize = BLOCK_SIZE * BLOCK_SIZE;

/// The total number of cells in the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// A Sudoku grid is composed of 81 cells that are organized into nine rows,
/// nine columns, and nine 3x3 blocks. Each cell may or may not be occupied
/// by a digit from 1 to 9.
///
/// The grid itself only stores the digits. Which rules they have to fulfill
/// is checked by the [constraint] module, which digits are fixed clues is
/// tracked by a [GivenMask], and the interactive state around the grid is
/// held by a [PuzzleSession](session::PuzzleSession).
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        ('0' as u8 + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..GRID_SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ',
        '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..GRID_SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * GRID_SIZE + column
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid, i.e. one where every cell is empty.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of 81 entries, which are either empty or a digit from 1 to 9.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the
    /// entries is ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code `5,3, ,[...], ,7,9` with 81 entries parses to
    /// a grid whose top-left cell contains a 5, whose bottom-right cell
    /// contains a 9, and whose third cell in the top row is empty.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<usize>()?;

            if number == 0 || number > GRID_SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string
    /// and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position contains the
    /// given number. This will return `false` if there is a different number
    /// in that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, 9]`, `false` will always be
    /// returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > GRID_SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Gets the 9 cell contents of the requested row, ordered by column.
    ///
    /// # Arguments
    ///
    /// * `row`: The row (y-coordinate) to extract. Must be in the range
    /// `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If `row` is not in the specified range. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn row_cells(&self, row: usize)
            -> SudokuResult<[Option<usize>; GRID_SIZE]> {
        if row >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        let mut cells = [None; GRID_SIZE];

        for column in 0..GRID_SIZE {
            cells[column] = self.cells[index(column, row)];
        }

        Ok(cells)
    }

    /// Gets the 9 cell contents of the requested column, ordered by row.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) to extract. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If `column` is not in the specified range. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn column_cells(&self, column: usize)
            -> SudokuResult<[Option<usize>; GRID_SIZE]> {
        if column >= GRID_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        let mut cells = [None; GRID_SIZE];

        for row in 0..GRID_SIZE {
            cells[row] = self.cells[index(column, row)];
        }

        Ok(cells)
    }

    /// Gets the 9 cell contents of the requested 3x3 block, in
    /// left-to-right, top-to-bottom order. Blocks are addressed by their
    /// block coordinates, i.e. the block with origin (3, 6) has the block
    /// coordinates (1, 2).
    ///
    /// # Arguments
    ///
    /// * `block_column`: The block-column (x-coordinate) of the extracted
    /// block. Must be in the range `[0, 3[`.
    /// * `block_row`: The block-row (y-coordinate) of the extracted block.
    /// Must be in the range `[0, 3[`.
    ///
    /// # Errors
    ///
    /// If either `block_column` or `block_row` are not in the specified
    /// range. In that case, `SudokuError::OutOfBounds` is returned.
    pub fn block_cells(&self, block_column: usize, block_row: usize)
            -> SudokuResult<[Option<usize>; GRID_SIZE]> {
        if block_column >= BLOCK_SIZE || block_row >= BLOCK_SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        let base_column = block_column * BLOCK_SIZE;
        let base_row = block_row * BLOCK_SIZE;
        let mut cells = [None; GRID_SIZE];
        let mut i = 0;

        for row in base_row..(base_row + BLOCK_SIZE) {
            for column in base_column..(base_column + BLOCK_SIZE) {
                cells[i] = self.cells[index(column, row)];
                i += 1;
            }
        }

        Ok(cells)
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .filter(|c| c.is_some())
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Gets a reference to the vector which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &Vec<Option<usize>> {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

/// An immutable snapshot of which cells of a [SudokuGrid] were filled at the
/// time the snapshot was taken. It is created once per puzzle, directly
/// after generation, and distinguishes the fixed clues (givens) from cells
/// the player may edit. A mask cannot be changed after its creation.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GivenMask {
    givens: Vec<bool>
}

impl GivenMask {

    /// Creates a mask which marks exactly the non-empty cells of the given
    /// grid as givens.
    pub fn of(grid: &SudokuGrid) -> GivenMask {
        GivenMask {
            givens: grid.cells.iter()
                .map(|c| c.is_some())
                .collect()
        }
    }

    /// Indicates whether the cell at the specified position is a given, i.e.
    /// was filled when this mask was created.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn is_given(&self, column: usize, row: usize) -> SudokuResult<bool> {
        if column >= GRID_SIZE || row >= GRID_SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.givens[index(column, row)])
        }
    }

    /// Gets the number of givens marked in this mask.
    pub fn count(&self) -> usize {
        self.givens.iter()
            .filter(|g| **g)
            .count()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let grid_res = SudokuGrid::parse("\
             1, , ,2, , , , , ,\
             , ,3, , , ,4, , ,\
             , , , ,5, , , , ,\
             ,2, , , , , , , ,\
             , , ,3, , , , , ,\
             , , , , , , ,1, ,\
             , , , , ,6, , , ,\
            9, , , , , , , , ,\
             , , , , , , , ,8");

        if let Ok(grid) = grid_res {
            assert_eq!(Some(1), grid.get_cell(0, 0).unwrap());
            assert_eq!(Some(2), grid.get_cell(3, 0).unwrap());
            assert_eq!(Some(3), grid.get_cell(2, 1).unwrap());
            assert_eq!(Some(4), grid.get_cell(6, 1).unwrap());
            assert_eq!(Some(5), grid.get_cell(4, 2).unwrap());
            assert_eq!(Some(2), grid.get_cell(1, 3).unwrap());
            assert_eq!(Some(3), grid.get_cell(3, 4).unwrap());
            assert_eq!(Some(1), grid.get_cell(7, 5).unwrap());
            assert_eq!(Some(6), grid.get_cell(5, 6).unwrap());
            assert_eq!(Some(9), grid.get_cell(0, 7).unwrap());
            assert_eq!(Some(8), grid.get_cell(8, 8).unwrap());
            assert_eq!(None, grid.get_cell(1, 0).unwrap());
            assert_eq!(None, grid.get_cell(8, 0).unwrap());
            assert_eq!(None, grid.get_cell(4, 4).unwrap());
            assert_eq!(11, grid.count_clues());
        }
        else {
            panic!("Parsing valid grid failed.");
        }
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse("1,2,3"));

        let code_82 = ",".repeat(81);
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse(code_82.as_str()));
    }

    #[test]
    fn parse_number_format_error() {
        let mut code = String::from("#");
        code.push_str(",".repeat(80).as_str());
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn parse_invalid_number() {
        let mut code = String::from("10");
        code.push_str(",".repeat(80).as_str());
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(code.as_str()));

        let mut code = String::from("0");
        code.push_str(",".repeat(80).as_str());
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(4, 4, 5).unwrap();
        grid.set_cell(8, 8, 9).unwrap();

        let code = grid.to_parseable_string();
        assert_eq!(grid, SudokuGrid::parse(code.as_str()).unwrap());
    }

    #[test]
    fn cell_accessors() {
        let mut grid = SudokuGrid::new();

        assert_eq!(None, grid.get_cell(3, 4).unwrap());

        grid.set_cell(3, 4, 7).unwrap();

        assert_eq!(Some(7), grid.get_cell(3, 4).unwrap());
        assert!(grid.has_number(3, 4, 7).unwrap());
        assert!(!grid.has_number(3, 4, 6).unwrap());
        assert!(!grid.has_number(4, 3, 7).unwrap());

        grid.clear_cell(3, 4).unwrap();

        assert_eq!(None, grid.get_cell(3, 4).unwrap());
    }

    #[test]
    fn out_of_bounds_rejected() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(0, 9));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(9, 0, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(0, 9));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.row_cells(9));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.column_cells(9));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.block_cells(3, 0));
    }

    #[test]
    fn invalid_number_rejected() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 10));
        assert_eq!(None, grid.get_cell(0, 0).unwrap());
    }

    #[test]
    fn row_extraction() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 2, 4).unwrap();
        grid.set_cell(5, 2, 9).unwrap();

        let row = grid.row_cells(2).unwrap();

        assert_eq!(Some(4), row[0]);
        assert_eq!(Some(9), row[5]);
        assert_eq!(7, row.iter().filter(|c| c.is_none()).count());
    }

    #[test]
    fn column_extraction() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(6, 0, 2).unwrap();
        grid.set_cell(6, 8, 3).unwrap();

        let column = grid.column_cells(6).unwrap();

        assert_eq!(Some(2), column[0]);
        assert_eq!(Some(3), column[8]);
    }

    #[test]
    fn block_extraction() {
        let mut grid = SudokuGrid::new();

        // Block (1, 2) covers columns 3 to 5 and rows 6 to 8.
        grid.set_cell(3, 6, 5).unwrap();
        grid.set_cell(4, 7, 6).unwrap();
        grid.set_cell(5, 8, 7).unwrap();

        let block = grid.block_cells(1, 2).unwrap();

        assert_eq!(Some(5), block[0]);
        assert_eq!(Some(6), block[4]);
        assert_eq!(Some(7), block[8]);
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = SudokuGrid::new();
        let mut partial = SudokuGrid::new();
        partial.set_cell(0, 0, 1).unwrap();
        partial.set_cell(8, 0, 2).unwrap();
        partial.set_cell(4, 4, 3).unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(3, partial.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());

        let mut full = SudokuGrid::new();

        for row in 0..GRID_SIZE {
            for column in 0..GRID_SIZE {
                full.set_cell(column, row, 1).unwrap();
            }
        }

        assert!(full.is_full());
        assert_eq!(CELL_COUNT, full.count_clues());
    }

    #[test]
    fn given_mask_snapshot() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(5, 3, 2).unwrap();

        let mask = GivenMask::of(&grid);

        assert!(mask.is_given(0, 0).unwrap());
        assert!(mask.is_given(5, 3).unwrap());
        assert!(!mask.is_given(1, 0).unwrap());
        assert_eq!(2, mask.count());

        // Later changes to the grid do not affect the snapshot.
        grid.set_cell(1, 0, 3).unwrap();
        grid.clear_cell(0, 0).unwrap();

        assert!(mask.is_given(0, 0).unwrap());
        assert!(!mask.is_given(1, 0).unwrap());
    }

    #[test]
    fn given_mask_out_of_bounds() {
        let mask = GivenMask::of(&SudokuGrid::new());

        assert_eq!(Err(SudokuError::OutOfBounds), mask.is_given(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), mask.is_given(0, 9));
    }

    #[test]
    fn serde_round_trip() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(2, 7, 6).unwrap();
        grid.set_cell(8, 1, 4).unwrap();

        let json = serde_json::to_string(&grid).unwrap();
        let deserialized: SudokuGrid =
            serde_json::from_str(json.as_str()).unwrap();

        assert_eq!(grid, deserialized);
    }
}

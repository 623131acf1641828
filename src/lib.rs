//! Generate perfect mazes over a rectangular grid
//!
//! A perfect maze is a spanning tree of the grid graph: every cell can be
//! reached from every other cell through exactly one sequence of passages.
//! The [`carve`] module provides two ways to get there: randomized
//! depth-first backtracking, which favours long winding corridors, and
//! randomized Kruskal's algorithm, which spreads branch points evenly.
//! [`render`] turns the finished grid into underscore-and-pipe ASCII art.
//!
//! # Examples
//! ```
//! use mazify::{carve, render, Grid};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut grid = Grid::new(6, 9).unwrap();
//! let mut rng = StdRng::seed_from_u64(13);
//! carve::kruskal(&mut grid, &mut rng);
//! print!("{}", render::render(&grid));
//! ```

use anyhow::bail;

pub mod carve;
pub mod render;

/// Cardinal directions between neighbouring cells.
///
/// Each direction doubles as one flag in a cell's wall mask; a set flag
/// means the wall towards that direction has been carved open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The four directions, in fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Flag bit for this direction in a cell's wall mask.
    const fn bit(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::East => 2,
            Direction::South => 4,
            Direction::West => 8,
        }
    }

    /// The direction pointing back at this one.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Row delta of a step in this direction.
    const fn row_offset(self) -> isize {
        match self {
            Direction::North => -1,
            Direction::South => 1,
            Direction::East | Direction::West => 0,
        }
    }

    /// Column delta of a step in this direction.
    const fn col_offset(self) -> isize {
        match self {
            Direction::East => 1,
            Direction::West => -1,
            Direction::North | Direction::South => 0,
        }
    }
}

/// Rectangular grid of cells tracking which walls have been opened.
///
/// Freshly constructed grids are fully walled; a carving algorithm from
/// [`carve`] opens passages until the grid is a perfect maze, after which
/// the grid is only read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    row_count: usize,
    col_count: usize,
    /// Wall mask per cell; zero means no wall has been opened yet.
    data: Vec<Vec<u8>>,
}

impl Grid {
    /// Create a fully walled grid.
    ///
    /// Both dimensions must be positive.
    ///
    /// # Examples
    /// ```
    /// use mazify::Grid;
    ///
    /// let grid = Grid::new(10, 10).unwrap();
    /// assert!(Grid::new(0, 10).is_err());
    /// ```
    pub fn new(row_count: usize, col_count: usize) -> anyhow::Result<Self> {
        if row_count == 0 || col_count == 0 {
            bail!("invalid maze dimensions {row_count}x{col_count}: both must be positive");
        }
        Ok(Grid {
            row_count,
            col_count,
            data: vec![vec![0; col_count]; row_count],
        })
    }

    /// Number of cell rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of cell columns.
    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Flat row-major cell index, unique per cell.
    pub fn cell_id(&self, row: usize, col: usize) -> usize {
        row * self.col_count + col
    }

    /// Coordinates of the neighbouring cell towards `dir`, or `None` when
    /// the step leaves the grid.
    pub fn neighbor(&self, row: usize, col: usize, dir: Direction) -> Option<(usize, usize)> {
        let row = row.checked_add_signed(dir.row_offset())?;
        let col = col.checked_add_signed(dir.col_offset())?;
        (row < self.row_count && col < self.col_count).then_some((row, col))
    }

    /// Whether the wall from `(row, col)` towards `dir` has been opened.
    pub fn has_passage(&self, row: usize, col: usize, dir: Direction) -> bool {
        self.data[row][col] & dir.bit() != 0
    }

    /// Open the wall between `(row, col)` and its neighbour towards `dir`.
    ///
    /// Both sides of the wall are updated in the same step, so the two
    /// cells always agree on the passage between them.
    ///
    /// # Panics
    /// Panics if the neighbour lies outside the grid; callers validate
    /// bounds before carving.
    pub fn open_passage(&mut self, row: usize, col: usize, dir: Direction) {
        let (next_row, next_col) = match self.neighbor(row, col, dir) {
            Some(cell) => cell,
            None => panic!("cell ({row}, {col}) has no neighbour towards {dir:?}"),
        };
        self.data[row][col] |= dir.bit();
        self.data[next_row][next_col] |= dir.opposite().bit();
    }

    /// Whether any passage has been opened from this cell.
    ///
    /// The depth-first carver uses this as its "visited" test: a cell
    /// joins the maze the moment its first wall opens.
    pub fn is_carved(&self, row: usize, col: usize) -> bool {
        self.data[row][col] != 0
    }
}

//! Maze carving algorithms
//!
//! Both carvers turn a fully walled [`Grid`] into a perfect maze, opening
//! exactly `cells - 1` walls so that a single path connects any two cells.
//! They differ in texture: [`recursive_backtracker`] digs long winding
//! corridors, [`kruskal`] produces evenly scattered branch points.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Direction, Grid};

/// Carve a maze by randomized depth-first search.
///
/// Starting from `(start_row, start_col)`, repeatedly step through a wall
/// into a randomly chosen unvisited neighbour, and backtrack once every
/// direction from the current cell is exhausted. Every cell ends up in the
/// maze after being entered exactly once.
///
/// Call depth grows with corridor length, up to the cell count for a fully
/// serpentine maze; for very large grids prefer [`kruskal`].
///
/// ## Arguments
/// - `grid`: Fully walled grid to carve in place.
/// - `start_row`, `start_col`: Cell where carving begins; must be in bounds.
/// - `rng`: Randomness source; seed it for reproducible mazes.
pub fn recursive_backtracker(
    grid: &mut Grid,
    start_row: usize,
    start_col: usize,
    rng: &mut impl Rng,
) {
    carve_from(grid, start_row, start_col, &mut || {
        let mut dirs = Direction::ALL;
        dirs.shuffle(rng);
        dirs
    });
}

/// Depth-first carving step; `pick_order` decides the order in which the
/// four directions are tried at each visited cell.
fn carve_from(
    grid: &mut Grid,
    row: usize,
    col: usize,
    pick_order: &mut impl FnMut() -> [Direction; 4],
) {
    for dir in pick_order() {
        if let Some((next_row, next_col)) = grid.neighbor(row, col, dir) {
            if !grid.is_carved(next_row, next_col) {
                grid.open_passage(row, col, dir);
                carve_from(grid, next_row, next_col, pick_order);
            }
        }
    }
}

/// One candidate passage, from a cell towards its neighbour in `dir`.
#[derive(Debug, Clone, Copy)]
struct Edge {
    row: usize,
    col: usize,
    dir: Direction,
}

/// Disjoint-set forest over flat cell ids.
///
/// Tracks which cells are already connected while Kruskal's algorithm
/// consumes the shuffled edge list.
struct DisjointSets {
    parent: Vec<usize>,
}

impl DisjointSets {
    fn new(size: usize) -> Self {
        DisjointSets {
            parent: (0..size).collect(),
        }
    }

    /// Representative of `id`'s set, flattening the parent chain on the
    /// way for near-constant future lookups.
    fn find(&mut self, id: usize) -> usize {
        if self.parent[id] == id {
            return id;
        }
        let root = self.find(self.parent[id]);
        self.parent[id] = root;
        root
    }

    /// Merge the sets holding `a` and `b`.
    ///
    /// Returns `false` when both already share a representative.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_b] = root_a;
        true
    }
}

/// Carve a maze with randomized Kruskal's algorithm.
///
/// Every wall between two in-bounds neighbours becomes a candidate edge;
/// the edges are shuffled, then opened one by one whenever their two cells
/// are not yet connected. Once all cells share one set, the remaining
/// edges are skipped.
///
/// ## Arguments
/// - `grid`: Fully walled grid to carve in place.
/// - `rng`: Randomness source; seed it for reproducible mazes.
pub fn kruskal(grid: &mut Grid, rng: &mut impl Rng) {
    // Each wall shows up twice, once from either side; the second copy
    // always fails the union below, so the duplication is harmless.
    let mut edges = Vec::new();
    for row in 0..grid.row_count() {
        for col in 0..grid.col_count() {
            for dir in Direction::ALL {
                if grid.neighbor(row, col, dir).is_some() {
                    edges.push(Edge { row, col, dir });
                }
            }
        }
    }
    edges.shuffle(rng);

    let mut sets = DisjointSets::new(grid.row_count() * grid.col_count());
    for edge in edges {
        if let Some((next_row, next_col)) = grid.neighbor(edge.row, edge.col, edge.dir) {
            let a = grid.cell_id(edge.row, edge.col);
            let b = grid.cell_id(next_row, next_col);
            if sets.union(a, b) {
                grid.open_passage(edge.row, edge.col, edge.dir);
            }
        }
    }
}

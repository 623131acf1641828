//! Text rendering of a carved grid
//!
//! Compact underscore-and-pipe output: one text line per maze row, with
//! south walls drawn as `_` and east walls as `|`, plus a top border.
//! A carved 2x2 grid renders for instance as:
//!
//! ```text
//!  ___
//! |_  |
//! |___|
//! ```

use itertools::Itertools;

use crate::{Direction, Grid};

/// Render the grid as ASCII art.
///
/// Purely a read-only traversal; rendering the same grid twice yields
/// identical text. The result always ends with a newline.
pub fn render(grid: &Grid) -> String {
    let mut lines = vec![format!(" {}", "_".repeat(2 * grid.col_count() - 1))];
    for row in 0..grid.row_count() {
        let mut line = String::from("|");
        for col in 0..grid.col_count() {
            let south_open = grid.has_passage(row, col, Direction::South);
            line.push(if south_open { ' ' } else { '_' });
            if grid.has_passage(row, col, Direction::East) {
                // Checking the east neighbour's floor keeps corridor
                // floors visually continuous; connectivity does not
                // depend on it.
                let gap_open = south_open || grid.has_passage(row, col + 1, Direction::South);
                line.push(if gap_open { ' ' } else { '_' });
            } else {
                line.push('|');
            }
        }
        lines.push(line);
    }
    let mut text = lines.iter().join("\n");
    text.push('\n');
    text
}

//! Winning line detection via directional adjacency walks

use super::state::{Cell, Player};

/// One of the eight compass directions used to walk along a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    SouthEast,
    SouthWest,
    NorthWest,
}

impl Direction {
    /// (row delta, col delta) for one adjacency step.
    ///
    /// The table is total and geometrically consistent: north decreases the
    /// row, east increases the column, and the diagonals compose the two.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// The 8 winning lines as (origin row, origin col, walk direction).
///
/// Scan order is fixed and observable: rows top to bottom, columns left to
/// right, main diagonal, anti-diagonal. [`LineScanner::winner`] reports the
/// first match in this order.
pub const LINE_ORIGINS: [(usize, usize, Direction); 8] = [
    (0, 0, Direction::East),
    (1, 0, Direction::East),
    (2, 0, Direction::East),
    (0, 0, Direction::South),
    (0, 1, Direction::South),
    (0, 2, Direction::South),
    (0, 0, Direction::SouthEast),
    (2, 0, Direction::NorthEast),
];

/// Utility for scanning winning lines on a cell grid
pub struct LineScanner;

impl LineScanner {
    /// Walk one adjacency step, or None when the step leaves the grid
    fn step(row: usize, col: usize, direction: Direction) -> Option<(usize, usize)> {
        let (dr, dc) = direction.delta();
        let row = row as i8 + dr;
        let col = col as i8 + dc;
        if (0..3).contains(&row) && (0..3).contains(&col) {
            Some((row as usize, col as usize))
        } else {
            None
        }
    }

    /// Check a single line for three identical non-empty marks.
    ///
    /// Walks two adjacency steps from the origin; any step off the grid or
    /// any mismatch terminates the match.
    fn line_match(
        cells: &[Cell; 9],
        origin_row: usize,
        origin_col: usize,
        direction: Direction,
    ) -> Option<Player> {
        let first = cells[origin_row * 3 + origin_col].player()?;

        let (row, col) = Self::step(origin_row, origin_col, direction)?;
        if cells[row * 3 + col].player() != Some(first) {
            return None;
        }

        let (row, col) = Self::step(row, col, direction)?;
        if cells[row * 3 + col].player() != Some(first) {
            return None;
        }

        Some(first)
    }

    /// The first matching line's mark in the fixed scan order, if any
    pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
        LINE_ORIGINS
            .iter()
            .find_map(|&(row, col, direction)| Self::line_match(cells, row, col, direction))
    }

    /// Count matching lines across the full scan (not just the first).
    ///
    /// Legal play can produce at most one; more indicates an unreachable
    /// state.
    pub fn matching_line_count(cells: &[Cell; 9]) -> usize {
        LINE_ORIGINS
            .iter()
            .filter(|&&(row, col, direction)| {
                Self::line_match(cells, row, col, direction).is_some()
            })
            .count()
    }
}

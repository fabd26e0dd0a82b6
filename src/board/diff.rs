//! Move inference by diffing two board states.
//!
//! Rather than tracking moves explicitly, the engine recovers "what move
//! transforms state A into state B" from the states themselves: subtract the
//! raw numeric codes cell by cell and re-bias the result back into code
//! space. A legal single placement leaves exactly one non-empty cell in the
//! diff board; any other kind of transition (mark overwritten, mark removed,
//! several cells changed inconsistently) pushes some code out of range and
//! invalidates the diff. This keeps the engine interoperable with states
//! produced independently of it.

use super::state::{BoardState, Cell};
use crate::moves::Move;
use crate::{Error, Result};

impl BoardState {
    /// Structural diff treating `other` as a candidate successor.
    ///
    /// Per cell, computes `other - self` on raw codes and re-biases by +1
    /// (the Empty code) so an unchanged cell reads as Empty and an
    /// Empty-to-mark transition reads as the placed mark. Returns `None`
    /// when any re-biased code falls outside the cell value space.
    ///
    /// This check alone does not guarantee a single changed cell; see
    /// [`is_single_cell_transition`](Self::is_single_cell_transition).
    pub fn diff(&self, other: &BoardState) -> Option<BoardState> {
        let mut cells = [Cell::Empty; 9];
        for (idx, (a, b)) in self.cells.iter().zip(other.cells.iter()).enumerate() {
            let code = b.code() as i8 - a.code() as i8 + Cell::Empty.code() as i8;
            cells[idx] = u8::try_from(code).ok().and_then(Cell::from_code)?;
        }
        Some(BoardState { cells })
    }

    /// True iff the diff is defined and exactly one cell changed
    pub fn is_single_cell_transition(&self, other: &BoardState) -> bool {
        self.diff(other)
            .is_some_and(|diff| diff.occupied_count() == 1)
    }

    /// Recover the move that transforms `self` into `other`.
    ///
    /// Scans the diff board row-major and returns the lone non-empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidTransition`] unless the two states differ by
    /// exactly one legal placement.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::{BoardState, Player};
    ///
    /// let board = BoardState::new();
    /// let next = board.set(2, 1, Player::X).unwrap();
    /// let mv = board.extract_move(&next).unwrap();
    /// assert_eq!((mv.row, mv.col, mv.player), (2, 1, Player::X));
    /// ```
    pub fn extract_move(&self, other: &BoardState) -> Result<Move> {
        let invalid = || Error::InvalidTransition {
            from: self.encode(),
            to: other.encode(),
        };

        let diff = self.diff(other).ok_or_else(invalid)?;
        if diff.occupied_count() != 1 {
            return Err(invalid());
        }

        for row in 0..3 {
            for col in 0..3 {
                if let Some(player) = diff.cells[Self::index(row, col)].player() {
                    return Ok(Move { row, col, player });
                }
            }
        }

        Err(invalid())
    }
}

//! Move representation and legal move enumeration

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Result;
use crate::board::{BoardState, Player};

/// A single placement: which cell is filled and by whom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
    pub player: Player,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({}, {})",
            self.player.to_cell().to_char(),
            self.row,
            self.col
        )
    }
}

/// Enumerate the legal moves in a position.
///
/// Derived entirely from [`BoardState::next_states`]: each successor is
/// reduced back to a concrete move via [`BoardState::extract_move`],
/// preserving row-major order.
///
/// # Errors
///
/// Propagates [`InvalidTransition`](crate::Error::InvalidTransition), though
/// successors produced by `next_states` always extract cleanly.
pub fn legal_moves(state: &BoardState) -> Result<Vec<Move>> {
    state
        .next_states()
        .iter()
        .map(|next| state.extract_move(next))
        .collect()
}

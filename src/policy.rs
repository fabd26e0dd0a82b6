//! One-ply lookahead move selection.
//!
//! The policy values a candidate successor by simulating only the opponent's
//! immediate replies: a reply that ends the game for the opponent marks the
//! candidate as a trap. This deliberately stops short of full minimax; a
//! fork that forces a loss two plies out is invisible here, and that
//! blindness is part of the contract rather than something to fix.

use rand::Rng;
use rand::prelude::IndexedRandom;

use crate::board::{BoardState, Player};
use crate::moves::Move;
use crate::{Error, Result};

/// Value of a candidate successor from `owner`'s perspective.
///
/// Terminal states score 1 when `owner` won and 0 otherwise. Non-terminal
/// states score -1 when any immediate opponent reply wins for someone other
/// than `owner`, else 0.
pub fn score(state: &BoardState, owner: Player) -> i32 {
    if state.is_terminal() {
        return if state.winner() == Some(owner) { 1 } else { 0 };
    }

    let trapped = state
        .next_states()
        .iter()
        .any(|reply| matches!(reply.winner(), Some(winner) if winner != owner));

    if trapped { -1 } else { 0 }
}

/// Score every successor of `state` for the player about to move.
///
/// Candidates appear in the same row-major order as
/// [`BoardState::next_states`].
pub fn score_candidates(state: &BoardState) -> Vec<(BoardState, i32)> {
    let owner = state.next_to_move();
    state
        .next_states()
        .into_iter()
        .map(|candidate| {
            let value = score(&candidate, owner);
            (candidate, value)
        })
        .collect()
}

/// Pick a move for the player about to move, breaking ties uniformly at
/// random among the best-scoring candidates.
///
/// The random source is injected so callers can seed it; with a fixed seed
/// the selection is fully deterministic.
///
/// # Errors
///
/// Returns [`Error::NoValidMoves`] when the board has no empty cells.
pub fn select_move<R: Rng>(state: &BoardState, rng: &mut R) -> Result<Move> {
    let candidates = score_candidates(state);
    let best = candidates
        .iter()
        .map(|&(_, value)| value)
        .max()
        .ok_or(Error::NoValidMoves)?;

    let tied: Vec<&BoardState> = candidates
        .iter()
        .filter(|&&(_, value)| value == best)
        .map(|(candidate, _)| candidate)
        .collect();

    let chosen = tied.choose(rng).ok_or(Error::NoValidMoves)?;
    state.extract_move(chosen)
}

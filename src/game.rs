//! Game records built on top of the board engine

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::moves::Move;
use crate::{Error, Result};

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(crate::board::Player),
    Draw,
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: BoardState,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Game {
            initial: BoardState::new(),
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Play a move for whoever is next to move
    ///
    /// # Errors
    ///
    /// Returns [`Error::GameOver`] once an outcome is recorded, or
    /// [`Error::IllegalMove`] for a bad placement.
    pub fn play(&mut self, row: usize, col: usize) -> Result<()> {
        if self.outcome.is_some() {
            return Err(Error::GameOver);
        }

        let current = self.current_state()?;
        let player = current.next_to_move();
        let next = current.set(row, col, player)?;

        self.moves.push(Move { row, col, player });

        if next.is_terminal() {
            self.outcome = Some(match next.winner() {
                Some(winner) => GameOutcome::Win(winner),
                None => GameOutcome::Draw,
            });
        }

        Ok(())
    }

    /// Get the current board state by replaying the move history
    ///
    /// # Errors
    ///
    /// Returns an error if any recorded move is invalid for the state it is
    /// replayed onto, which indicates corrupted game data.
    pub fn current_state(&self) -> Result<BoardState> {
        let mut state = self.initial;
        for mv in &self.moves {
            state = state.set(mv.row, mv.col, mv.player)?;
        }
        Ok(state)
    }

    /// Get the sequence of board states from the initial position onward
    ///
    /// # Errors
    ///
    /// Same conditions as [`current_state`](Self::current_state).
    pub fn state_sequence(&self) -> Result<Vec<BoardState>> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut state = self.initial;
        states.push(state);

        for mv in &self.moves {
            state = state.set(mv.row, mv.col, mv.player)?;
            states.push(state);
        }

        Ok(states)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

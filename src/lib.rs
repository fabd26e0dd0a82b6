//! Tic-tac-toe board state engine.
//!
//! This crate provides:
//! - A canonical 3x3 board representation with validated cell mutation
//! - A 9-digit string encoding as the sole interchange format
//! - Move inference by diffing two board states
//! - Line-based terminal detection via directional adjacency walks
//! - Legal move enumeration derived from successor states
//! - A one-ply lookahead policy with injectable random tie-breaking
//!
//! The engine is single-threaded and purely functional over immutable
//! snapshots; turn-taking loops, rendering surfaces, and human input are
//! external collaborators built on the public contract.

pub mod board;
pub mod error;
pub mod game;
pub mod moves;
pub mod policy;

pub use board::{BoardState, Cell, Direction, LINE_ORIGINS, LineScanner, Player};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome};
pub use moves::{Move, legal_moves};

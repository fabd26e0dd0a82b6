//! Board state representation and operations

pub mod diff;
pub mod lines;
pub mod state;
pub mod validation;

pub use lines::{Direction, LINE_ORIGINS, LineScanner};
pub use state::{BoardState, Cell, Player};

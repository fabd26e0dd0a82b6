//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::{Error, Result};

/// A cell on the tic-tac-toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Numeric code used by the string encoding: Empty=1, X=2, O=3
    pub fn code(self) -> u8 {
        match self {
            Cell::Empty => 1,
            Cell::X => 2,
            Cell::O => 3,
        }
    }

    /// Inverse of [`code`](Self::code)
    pub fn from_code(code: u8) -> Option<Cell> {
        match code {
            1 => Some(Cell::Empty),
            2 => Some(Cell::X),
            3 => Some(Cell::O),
            _ => None,
        }
    }

    /// Character used by the console rendering
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to the cell value it places
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Complete 3x3 board state, addressed by (row, col) with both in 0..3.
///
/// The grid is stored row-major. A board is immutable by convention: every
/// generative operation ([`set`], [`next_states`], [`step`]) returns a new
/// value, so parallel explorations of the state space never alias. The type
/// is `Copy` since it is only 9 bytes.
///
/// [`set`]: Self::set
/// [`next_states`]: Self::next_states
/// [`step`]: Self::step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    /// Cells in row-major order (0-8)
    pub cells: [Cell; 9],
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; 9],
        }
    }

    fn check_bounds(row: usize, col: usize) -> Result<()> {
        if row >= 3 || col >= 3 {
            return Err(Error::OutOfRange { row, col });
        }
        Ok(())
    }

    pub(crate) fn index(row: usize, col: usize) -> usize {
        row * 3 + col
    }

    /// Get the cell at (row, col)
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if row or col is not in 0..3.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell> {
        Self::check_bounds(row, col)?;
        Ok(self.cells[Self::index(row, col)])
    }

    /// Check whether the cell at (row, col) is empty
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if row or col is not in 0..3.
    pub fn empty(&self, row: usize, col: usize) -> Result<bool> {
        Self::check_bounds(row, col)?;
        Ok(self.cells[Self::index(row, col)] == Cell::Empty)
    }

    /// Place a player's mark on an empty cell and return the new board state
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] if the coordinates are out of range or
    /// the cell is already occupied.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::{BoardState, Cell, Player};
    ///
    /// let board = BoardState::new();
    /// let next = board.set(1, 1, Player::X).unwrap();
    /// assert_eq!(next.get(1, 1).unwrap(), Cell::X);
    /// assert_eq!(board.get(1, 1).unwrap(), Cell::Empty); // original unchanged
    /// ```
    #[must_use = "set returns a new board state; the original is unchanged"]
    pub fn set(&self, row: usize, col: usize, player: Player) -> Result<BoardState> {
        if row >= 3 || col >= 3 {
            return Err(Error::IllegalMove {
                row,
                col,
                reason: "cell is out of range".to_string(),
            });
        }
        if self.cells[Self::index(row, col)] != Cell::Empty {
            return Err(Error::IllegalMove {
                row,
                col,
                reason: "cell is already occupied".to_string(),
            });
        }

        let mut next = *self;
        next.cells[Self::index(row, col)] = player.to_cell();
        Ok(next)
    }

    /// Count of (X, O) marks on the board
    pub fn mark_counts(&self) -> (usize, usize) {
        let mut x = 0;
        let mut o = 0;
        for cell in &self.cells {
            match cell {
                Cell::X => x += 1,
                Cell::O => o += 1,
                Cell::Empty => {}
            }
        }
        (x, o)
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        let (x, o) = self.mark_counts();
        x + o
    }

    /// The player whose turn it is: X whenever X does not lead the count.
    ///
    /// Ties go to X, so the empty board starts with X.
    pub fn next_to_move(&self) -> Player {
        let (x, o) = self.mark_counts();
        if x <= o { Player::X } else { Player::O }
    }

    /// Enumerate every state reachable by one placement of
    /// [`next_to_move`](Self::next_to_move)'s mark.
    ///
    /// Successors are produced in row-major scan order (row 0 col 0..2, then
    /// row 1, then row 2). This ordering is part of the contract: downstream
    /// tie-breaking and move extraction iterate it directly. The sequence
    /// length always equals the number of empty cells.
    pub fn next_states(&self) -> Vec<BoardState> {
        let mark = self.next_to_move().to_cell();
        let mut states = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                let idx = Self::index(row, col);
                if self.cells[idx] == Cell::Empty {
                    let mut next = *self;
                    next.cells[idx] = mark;
                    states.push(next);
                }
            }
        }
        states
    }

    /// Canonical 9-digit string encoding: Empty=1, X=2, O=3, row-major.
    ///
    /// This string is the sole interchange format between the engine and any
    /// external caller.
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .map(|cell| char::from(b'0' + cell.code()))
            .collect()
    }

    /// Inverse of [`encode`](Self::encode).
    ///
    /// Decoding is purely structural: it accepts any well-formed digit
    /// string, including states unreachable by legal play. Use
    /// [`is_reachable`](Self::is_reachable) as a diagnostic if reachability
    /// matters.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEncoding`] unless the input is exactly 9
    /// characters, each one of '1', '2', or '3'.
    ///
    /// # Examples
    ///
    /// ```
    /// use noughts::BoardState;
    ///
    /// let board = BoardState::decode("211131112").unwrap();
    /// assert_eq!(board.encode(), "211131112");
    /// ```
    pub fn decode(input: &str) -> Result<BoardState> {
        let chars: Vec<char> = input.chars().collect();
        if chars.len() != 9 {
            return Err(Error::InvalidEncoding {
                input: input.to_string(),
                reason: format!("expected 9 characters, got {}", chars.len()),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            let code = c.to_digit(10).and_then(|d| u8::try_from(d).ok());
            cells[i] = code.and_then(Cell::from_code).ok_or_else(|| {
                Error::InvalidEncoding {
                    input: input.to_string(),
                    reason: format!("character '{c}' at position {i} is not in 1-3"),
                }
            })?;
        }

        Ok(BoardState { cells })
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// The winning player, if a line is complete.
    ///
    /// Lines are scanned in fixed order (rows top to bottom, columns left to
    /// right, main diagonal, anti-diagonal) and only the first match is
    /// reported, even on boards where several lines match.
    pub fn winner(&self) -> Option<Player> {
        super::lines::LineScanner::winner(&self.cells)
    }

    /// Check if the game is over (full board or completed line)
    pub fn is_terminal(&self) -> bool {
        self.is_full() || self.winner().is_some()
    }

    /// Apply a move and return (successor, reward, terminated).
    ///
    /// The reward is 1000 when the placement completes a winning line for
    /// the moving player and 0 otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IllegalMove`] under the same conditions as
    /// [`set`](Self::set).
    pub fn step(&self, mv: Move) -> Result<(BoardState, i32, bool)> {
        let next = self.set(mv.row, mv.col, mv.player)?;
        let reward = if next.winner() == Some(mv.player) {
            1000
        } else {
            0
        };
        Ok((next, reward, next.is_terminal()))
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    /// Console rendering: cells joined by '|', rows separated by a rule of
    /// underscores, empty cells shown as spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                write!(f, "{}", self.cells[Self::index(row, col)].to_char())?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            writeln!(f)?;
            if row < 2 {
                writeln!(f, "_____")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = BoardState::new();
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board.get(row, col).unwrap(), Cell::Empty);
            }
        }
        assert_eq!(board.next_to_move(), Player::X);
    }

    #[test]
    fn test_get_out_of_range() {
        let board = BoardState::new();
        assert!(matches!(
            board.get(3, 0),
            Err(Error::OutOfRange { row: 3, col: 0 })
        ));
        assert!(matches!(
            board.empty(0, 3),
            Err(Error::OutOfRange { row: 0, col: 3 })
        ));
    }

    #[test]
    fn test_set_returns_new_state() {
        let board = BoardState::new();
        let next = board.set(0, 0, Player::X).unwrap();
        assert_eq!(next.get(0, 0).unwrap(), Cell::X);
        assert_eq!(board.get(0, 0).unwrap(), Cell::Empty);
        for idx in 1..9 {
            assert_eq!(next.cells[idx], Cell::Empty, "only one cell may change");
        }
    }

    #[test]
    fn test_set_rejects_occupied_cell() {
        let board = BoardState::new().set(1, 1, Player::X).unwrap();
        let err = board.set(1, 1, Player::O).unwrap_err();
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_set_rejects_out_of_range() {
        let board = BoardState::new();
        let err = board.set(5, 0, Player::X).unwrap_err();
        assert!(matches!(err, Error::IllegalMove { row: 5, col: 0, .. }));
    }

    #[test]
    fn test_next_to_move_alternation() {
        let board = BoardState::new();
        assert_eq!(board.next_to_move(), Player::X);

        let board = board.set(0, 0, Player::X).unwrap();
        assert_eq!(board.next_to_move(), Player::O);

        let board = board.set(1, 1, Player::O).unwrap();
        assert_eq!(board.next_to_move(), Player::X);
    }

    #[test]
    fn test_next_states_row_major_order() {
        let board = BoardState::new().set(0, 0, Player::X).unwrap();
        let states = board.next_states();
        assert_eq!(states.len(), 8);

        // First successor fills (0, 1), last fills (2, 2)
        assert_eq!(states[0].get(0, 1).unwrap(), Cell::O);
        assert_eq!(states[7].get(2, 2).unwrap(), Cell::O);
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let board = BoardState::new()
            .set(0, 0, Player::X)
            .unwrap()
            .set(1, 1, Player::O)
            .unwrap();
        assert_eq!(board.encode(), "211131111");
        assert_eq!(BoardState::decode("211131111").unwrap(), board);
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        let err = BoardState::decode("12312").unwrap_err();
        assert!(matches!(err, Error::InvalidEncoding { .. }));

        let err = BoardState::decode("1231231231").unwrap_err();
        assert!(matches!(err, Error::InvalidEncoding { .. }));
    }

    #[test]
    fn test_decode_rejects_bad_symbols() {
        for input in ["111111110", "11111111x", "411111111", "1111.1111"] {
            let err = BoardState::decode(input).unwrap_err();
            assert!(
                matches!(err, Error::InvalidEncoding { .. }),
                "expected InvalidEncoding for '{input}'"
            );
        }
    }

    #[test]
    fn test_step_rewards_winning_placement() {
        // X has (0,0) and (0,1); completing the top row pays out
        let board = BoardState::decode("221331111").unwrap();
        let mv = Move {
            row: 0,
            col: 2,
            player: Player::X,
        };
        let (next, reward, done) = board.step(mv).unwrap();
        assert_eq!(reward, 1000);
        assert!(done);
        assert_eq!(next.winner(), Some(Player::X));
    }

    #[test]
    fn test_step_neutral_placement() {
        let board = BoardState::new();
        let mv = Move {
            row: 1,
            col: 1,
            player: Player::X,
        };
        let (_, reward, done) = board.step(mv).unwrap();
        assert_eq!(reward, 0);
        assert!(!done);
    }

    #[test]
    fn test_display_format() {
        let board = BoardState::decode("231121113").unwrap();
        let rendered = format!("{board}");
        assert_eq!(rendered, "X|O| \n_____\n |X| \n_____\n | |O\n");
    }
}

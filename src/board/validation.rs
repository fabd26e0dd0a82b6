//! Reachability diagnostics for board states

use super::lines::LineScanner;
use super::state::BoardState;

impl BoardState {
    /// Check whether the line structure is consistent with legal play.
    ///
    /// Legal alternating play can complete at most one line, so a board
    /// with two or more matching lines was never reached by a real game.
    /// This is a diagnostic only; mutation never enforces it, and
    /// [`decode`](Self::decode) deliberately accepts unreachable states.
    pub fn is_reachable(&self) -> bool {
        LineScanner::matching_line_count(&self.cells) <= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;

    #[test]
    fn test_empty_board_is_reachable() {
        assert!(BoardState::new().is_reachable());
    }

    #[test]
    fn test_single_winning_line_is_reachable() {
        let board = BoardState::decode("222331131").unwrap();
        assert_eq!(board.winner(), Some(Player::X));
        assert!(board.is_reachable());
    }

    #[test]
    fn test_two_completed_lines_are_unreachable() {
        // Decodes structurally, then fails the diagnostic
        let board = BoardState::decode("222333111").unwrap();
        assert!(!board.is_reachable());
    }
}

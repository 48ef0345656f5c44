//! The reference engine: classic 3×3 tic-tac-toe.

use parlor_protocol::{Board, Mark};
use serde::{Deserialize, Serialize};

use crate::GameRules;

/// The eight winning lines: rows, columns, diagonals.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3×3 tic-tac-toe game. X moves first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicTacToe {
    cells: Board,
    turn: Mark,
    move_count: u8,
}

impl TicTacToe {
    /// `true` if all nine cells are filled without a winner.
    pub fn is_draw(&self) -> bool {
        self.move_count == 9 && self.winner().is_none()
    }
}

impl GameRules for TicTacToe {
    fn new_game() -> Self {
        Self {
            cells: [None; 9],
            turn: Mark::X,
            move_count: 0,
        }
    }

    fn apply(&mut self, cell: usize) -> bool {
        if cell >= 9 || self.cells[cell].is_some() || self.is_over() {
            return false;
        }

        self.cells[cell] = Some(self.turn);
        self.move_count += 1;
        self.turn = self.turn.opponent();
        true
    }

    fn current_turn(&self) -> Mark {
        self.turn
    }

    fn is_over(&self) -> bool {
        self.winner().is_some() || self.move_count == 9
    }

    fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|line| {
            let first = self.cells[line[0]]?;
            (line.iter().all(|&i| self.cells[i] == Some(first)))
                .then_some(first)
        })
    }

    fn board(&self) -> Board {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Plays the given cells in order, panicking on a rejected move.
    fn play(moves: &[usize]) -> TicTacToe {
        let mut game = TicTacToe::new_game();
        for &cell in moves {
            assert!(game.apply(cell), "move at cell {cell} was rejected");
        }
        game
    }

    #[test]
    fn test_new_game_is_empty_and_x_moves_first() {
        let game = TicTacToe::new_game();
        assert_eq!(game.board(), [None; 9]);
        assert_eq!(game.current_turn(), Mark::X);
        assert!(!game.is_over());
        assert_eq!(game.winner(), None);
    }

    #[test]
    fn test_apply_alternates_turns() {
        let game = play(&[0, 3]);
        assert_eq!(game.board()[0], Some(Mark::X));
        assert_eq!(game.board()[3], Some(Mark::O));
        assert_eq!(game.current_turn(), Mark::X);
    }

    #[test]
    fn test_apply_rejects_occupied_cell() {
        let mut game = play(&[0]);
        assert!(!game.apply(0));
        // State untouched: still O's turn, cell still X.
        assert_eq!(game.current_turn(), Mark::O);
        assert_eq!(game.board()[0], Some(Mark::X));
    }

    #[test]
    fn test_apply_rejects_out_of_range() {
        let mut game = TicTacToe::new_game();
        assert!(!game.apply(9));
        assert_eq!(game.current_turn(), Mark::X);
    }

    #[test]
    fn test_x_wins_top_row() {
        // X: 0, 1, 2 — O: 3, 4
        let game = play(&[0, 3, 1, 4, 2]);
        assert!(game.is_over());
        assert_eq!(game.winner(), Some(Mark::X));
        assert!(!game.is_draw());
    }

    #[test]
    fn test_o_wins_column() {
        // O: 2, 5, 8 — X: 0, 1, 3
        let game = play(&[0, 2, 1, 5, 3, 8]);
        assert_eq!(game.winner(), Some(Mark::O));
    }

    #[test]
    fn test_diagonal_wins_detected() {
        let game = play(&[0, 1, 4, 2, 8]);
        assert_eq!(game.winner(), Some(Mark::X));

        let game = play(&[0, 2, 1, 4, 8, 6]);
        assert_eq!(game.winner(), Some(Mark::O));
    }

    #[test]
    fn test_draw_on_full_board() {
        // X O X / X O X / O X O — nine moves, no line.
        let game = play(&[0, 1, 2, 4, 3, 6, 5, 8, 7]);
        assert!(game.is_over());
        assert_eq!(game.winner(), None);
        assert!(game.is_draw());
    }

    #[test]
    fn test_apply_rejects_after_win() {
        let mut game = play(&[0, 3, 1, 4, 2]);
        assert!(!game.apply(5));
        assert_eq!(game.board()[5], None);
    }
}

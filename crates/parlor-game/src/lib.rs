//! The game rule engine capability.
//!
//! The room layer arbitrates *who* may move and *when*; the engine decides
//! whether a move is legal on the board and when the game ends. Swapping in
//! a different two-player marking game means implementing [`GameRules`] —
//! nothing in the room, registry, or coordinator changes.

mod tictactoe;

pub use tictactoe::TicTacToe;

use parlor_protocol::{Board, Mark};

/// The rules of a two-player, turn-based marking game on nine cells.
///
/// Implementations own the board representation. All methods are
/// synchronous and cheap — a room calls them while holding its lock.
pub trait GameRules: Send + Sync + 'static {
    /// A fresh game, no moves made, X to move.
    fn new_game() -> Self
    where
        Self: Sized;

    /// Applies the current player's mark to `cell` (0–8, row-major).
    ///
    /// Returns `false` and leaves the state untouched if the cell is out
    /// of range or occupied, or the game is already over. On success the
    /// turn passes to the opponent.
    fn apply(&mut self, cell: usize) -> bool;

    /// The mark that moves next.
    fn current_turn(&self) -> Mark;

    /// `true` once the game has a winner or the board is full.
    fn is_over(&self) -> bool;

    /// The winning mark, or `None` while undecided or drawn.
    fn winner(&self) -> Option<Mark>;

    /// A point-in-time copy of the board.
    fn board(&self) -> Board;
}

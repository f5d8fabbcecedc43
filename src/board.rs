use std::fmt::Debug;

/// The central trait of the library, defining the interface for a game state.
///
/// To run the minimax search on a custom game, this trait must be implemented.
/// It gives the search engine everything it needs: terminal detection and
/// scoring via [`Board::outcome`], move enumeration via
/// [`Board::available_moves`], and state transition via [`Board::apply_move`].
pub trait Board: Clone {
    /// The type representing a move in the game. For a grid game this is
    /// typically a coordinate pair; equality and hashing should follow the
    /// coordinate values.
    type Move: Clone + Debug;

    /// Returns the current outcome of the game.
    ///
    /// `Win` and `Lose` are judged from the perspective of the player the
    /// search is acting for, fixed when the root board is constructed. The
    /// perspective does not change as moves are applied.
    fn outcome(&self) -> GameOutcome;

    /// Returns all legal moves available from the current state, or an empty
    /// list if the game is over.
    ///
    /// The enumeration order must be stable: it decides which of several
    /// equally scored moves the selector returns.
    fn available_moves(&self) -> Vec<Self::Move>;

    /// Applies a move for the player whose turn it is, then passes the turn
    /// to the other player.
    fn apply_move(&mut self, mv: &Self::Move);
}

/// Represents the possible outcomes of a game.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum GameOutcome {
    /// The game is still ongoing.
    InProgress,
    /// The root player has a completed winning line.
    Win,
    /// The opponent of the root player has a completed winning line.
    Lose,
    /// No moves remain and nobody won.
    Draw,
}

impl GameOutcome {
    /// Returns `true` if no further moves can be played from this state.
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }
}

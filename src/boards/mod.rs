/// An implementation of the `Board` trait for the game of Tic-Tac-Toe.
pub mod tic_tac_toe;

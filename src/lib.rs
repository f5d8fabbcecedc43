//! A small and simple library for exhaustive minimax game-tree search.
//!
//! This library provides a generic implementation of the minimax algorithm for
//! deterministic, perfect-information, two-player games. Given a board state,
//! it materializes the full tree of reachable future states, backs terminal
//! outcomes up through alternating maximize/minimize levels, and selects the
//! move with the best guaranteed outcome for the acting player. The search is
//! deliberately exhaustive (no pruning, no heuristics), so it only suits
//! boards small enough to enumerate completely, such as 3x3 Tic-Tac-Toe.
//!
//! # Example
//!
//! ```rust
//! use minimax_lib::boards::tic_tac_toe::TicTacToeBoard;
//! use minimax_lib::minimax::{DEFAULT_NODE_CAPACITY, MinimaxSearch};
//!
//! // Create a new Tic-Tac-Toe board; X is about to move.
//! let board = TicTacToeBoard::default();
//!
//! // Create and configure a new search instance using the builder.
//! let mut search = MinimaxSearch::builder(board)
//!     .with_node_capacity(DEFAULT_NODE_CAPACITY)
//!     .build();
//!
//! // Build the full game tree and back the terminal scores up to the root.
//! search.expand();
//! let score = search.evaluate();
//!
//! // Get the optimal move.
//! let best_move = search.best_move().unwrap();
//!
//! println!("The best move is {best_move:?}, with guaranteed score {score}");
//! ```

/// Contains the `Board` trait and related enums that define the interface for a game.
pub mod board;
/// Contains pre-made implementations of the `Board` trait for common games.
pub mod boards;
/// The core module of the library, containing the `MinimaxSearch` implementation.
pub mod minimax;
/// Contains traits and implementations for random move generation, used by
/// baseline opponents.
pub mod random;
/// Contains the `TreeNode` struct, which represents a node in the game tree.
pub mod tree_node;

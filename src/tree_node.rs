use crate::board::{Board, GameOutcome};

/// The objective a tree node optimizes when backing up child scores.
///
/// Roles alternate strictly with depth: the root is a maximizer, its children
/// are minimizers, and so on, regardless of which physical player moves.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Role {
    /// Takes the largest of its children's scores.
    Maximizer,
    /// Takes the smallest of its children's scores.
    Minimizer,
}

impl Role {
    /// Returns the role of the next tree level.
    pub fn flipped(self) -> Role {
        match self {
            Role::Maximizer => Role::Minimizer,
            Role::Minimizer => Role::Maximizer,
        }
    }
}

/// Represents a single node in the minimax game tree.
///
/// Each node owns a private copy of the game state, the move that produced it,
/// and, once the tree has been evaluated, its backed-up score.
#[derive(Debug, Clone)]
pub struct TreeNode<T: Board> {
    /// The game state that this node represents.
    pub board: Box<T>,
    /// The move that led to this node's state from its parent. `None` for the
    /// root node.
    pub prev_move: Option<T::Move>,
    /// Whether this node backs up the maximum or the minimum of its children.
    pub role: Role,
    /// The depth of the node in the tree.
    pub height: i32,
    /// The outcome of the game at this node, captured once when the node is
    /// created.
    pub outcome: GameOutcome,
    /// The backed-up minimax score. `None` until the tree is evaluated.
    pub score: Option<i32>,
}

impl<T: Board> TreeNode<T> {
    /// Creates the root node of a search tree. The root always optimizes for
    /// the acting player, so its role is [`Role::Maximizer`].
    pub fn root(boxed_board: Box<T>) -> Self {
        let outcome = boxed_board.outcome();
        TreeNode {
            board: boxed_board,
            prev_move: None,
            role: Role::Maximizer,
            height: 0,
            outcome,
            score: None,
        }
    }

    /// Creates a child node produced by playing `prev_move` from its parent.
    pub fn child(boxed_board: Box<T>, prev_move: T::Move, role: Role, height: i32) -> Self {
        let outcome = boxed_board.outcome();
        TreeNode {
            board: boxed_board,
            prev_move: Some(prev_move),
            role,
            height,
            outcome,
            score: None,
        }
    }
}

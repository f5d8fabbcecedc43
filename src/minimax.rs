use crate::board::{Board, GameOutcome};
use crate::tree_node::{Role, TreeNode};
use ego_tree::{NodeId, NodeRef, Tree};
use thiserror::Error;

/// Terminal utility of a state won by the root player.
pub const WIN_SCORE: i32 = 1;
/// Terminal utility of a state lost by the root player.
pub const LOSS_SCORE: i32 = -1;
/// Terminal utility of a drawn state.
pub const DRAW_SCORE: i32 = 0;

/// Default number of tree slots reserved up front.
pub const DEFAULT_NODE_CAPACITY: usize = 4096;

/// Errors reported by the search entry points.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The search was asked for a move on a board with no legal moves left.
    /// Callers must guarantee the board is non-terminal.
    #[error("cannot select a move: the root position is already terminal")]
    TerminalRoot,
}

/// The main struct for running an exhaustive minimax search.
///
/// It owns the game tree for a single move decision. The tree is built with
/// [`MinimaxSearch::expand`], scored with [`MinimaxSearch::evaluate`], and read
/// out with [`MinimaxSearch::best_move`]; [`choose_move`] bundles the three.
pub struct MinimaxSearch<T: Board> {
    tree: Tree<TreeNode<T>>,
    root_id: NodeId,
}

/// A builder for creating instances of `MinimaxSearch`.
pub struct MinimaxSearchBuilder<T: Board> {
    board: T,
    node_capacity: usize,
}

impl<T: Board> MinimaxSearchBuilder<T> {
    /// Creates a new builder with the given root board state.
    pub fn new(board: T) -> Self {
        Self {
            board,
            node_capacity: DEFAULT_NODE_CAPACITY,
        }
    }

    /// Sets the number of tree slots reserved before the search starts.
    pub fn with_node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    /// Builds the `MinimaxSearch` instance with the configured parameters.
    pub fn build(self) -> MinimaxSearch<T> {
        MinimaxSearch::new(self.board, self.node_capacity)
    }
}

impl<T: Board> MinimaxSearch<T> {
    /// Returns a new builder for `MinimaxSearch`.
    pub fn builder(board: T) -> MinimaxSearchBuilder<T> {
        MinimaxSearchBuilder::new(board)
    }

    /// Creates a new search rooted at `board`.
    ///
    /// The root node always optimizes for the player about to move on
    /// `board`, and terminal outcomes are scored from that player's
    /// perspective.
    pub fn new(board: T, node_capacity: usize) -> Self {
        let root_node = TreeNode::root(Box::new(board));
        let tree = Tree::with_capacity(root_node, node_capacity);
        let root_id = tree.root().id();
        Self { tree, root_id }
    }

    /// Returns an immutable reference to the underlying game tree.
    pub fn tree(&self) -> &Tree<TreeNode<T>> {
        &self.tree
    }

    /// Returns a reference to the root node of the game tree.
    pub fn root(&self) -> NodeRef<'_, TreeNode<T>> {
        self.tree.root()
    }

    /// Returns the total number of nodes currently in the tree.
    pub fn node_count(&self) -> usize {
        self.tree.root().descendants().count()
    }

    /// Materializes the full game tree below the root.
    ///
    /// Works through an explicit stack of pending nodes rather than call-stack
    /// recursion, so the depth of the game never limits the search. Terminal
    /// states become leaves; every other state gets one child per available
    /// move, in the order the board enumerates them. Roles alternate at every
    /// level.
    pub fn expand(&mut self) {
        if self.tree.root().has_children() {
            panic!("BUG: expanding an already expanded tree");
        }

        let mut pending = vec![self.root_id];
        while let Some(node_id) = pending.pop() {
            let (board, child_role, child_height) = {
                let data = self.tree.get(node_id).unwrap().value();
                if data.outcome.is_terminal() {
                    continue;
                }
                (data.board.clone(), data.role.flipped(), data.height + 1)
            };

            for next_move in board.available_moves() {
                let mut next_board = board.clone();
                next_board.apply_move(&next_move);
                let child = TreeNode::child(next_board, next_move, child_role, child_height);
                let child_id = self.tree.get_mut(node_id).unwrap().append(child).id();
                pending.push(child_id);
            }
        }
    }

    /// Backs up terminal utilities through the tree and returns the root's
    /// minimax score.
    ///
    /// Nodes are visited children-first, so every node's score is the terminal
    /// utility at a leaf, the maximum of its children's scores at a maximizer,
    /// and the minimum at a minimizer. After this returns, every node in the
    /// tree carries a score.
    pub fn evaluate(&mut self) -> i32 {
        let preorder: Vec<NodeId> =
            self.tree.root().descendants().map(|node| node.id()).collect();

        // A node precedes its descendants in preorder, so the reversed order
        // scores every child before its parent.
        for node_id in preorder.into_iter().rev() {
            let node = self.tree.get(node_id).unwrap();
            let score = if node.has_children() {
                let role = node.value().role;
                let child_scores = node.children().map(|child| {
                    child
                        .value()
                        .score
                        .expect("BUG: child not scored before its parent")
                });
                match role {
                    Role::Maximizer => child_scores.max().unwrap(),
                    Role::Minimizer => child_scores.min().unwrap(),
                }
            } else {
                match node.value().outcome {
                    GameOutcome::Win => WIN_SCORE,
                    GameOutcome::Lose => LOSS_SCORE,
                    GameOutcome::Draw => DRAW_SCORE,
                    GameOutcome::InProgress => {
                        panic!("BUG: leaf node with the game still in progress")
                    }
                }
            };
            self.tree.get_mut(node_id).unwrap().value().score = Some(score);
        }

        self.tree
            .root()
            .value()
            .score
            .expect("BUG: root left unscored")
    }

    /// Returns the move leading to the child of the root with the highest
    /// backed-up score, breaking ties by first-encountered order.
    ///
    /// Fails with [`SearchError::TerminalRoot`] if the root has no children,
    /// i.e. the search was started from an already finished game.
    pub fn best_move(&self) -> Result<T::Move, SearchError> {
        let mut best: Option<(i32, T::Move)> = None;
        for child in self.tree.root().children() {
            let score = child
                .value()
                .score
                .expect("BUG: best_move called before evaluate");
            let child_move = child
                .value()
                .prev_move
                .clone()
                .expect("BUG: non-root node without a move");
            match best {
                Some((best_score, _)) if best_score >= score => {}
                _ => best = Some((score, child_move)),
            }
        }

        best.map(|(_, child_move)| child_move)
            .ok_or(SearchError::TerminalRoot)
    }
}

/// Selects the optimal move for the player about to move on `board`.
///
/// Builds the full game tree, evaluates it, and picks the best root move in
/// one call. The tree is discarded before this returns.
pub fn choose_move<T: Board>(board: T) -> Result<T::Move, SearchError> {
    let mut search = MinimaxSearch::builder(board).build();
    search.expand();
    search.evaluate();
    search.best_move()
}

use crate::board::{Board, GameOutcome};
use std::fmt;

/// A (row, column) coordinate on the grid.
///
/// Two cells are equal exactly when both coordinates match, so moves can be
/// compared and used as hash-map keys.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub struct Cell {
    /// Row index, `0..3` from the top.
    pub row: usize,
    /// Column index, `0..3` from the left.
    pub col: usize,
}

/// One of the two marks placed on the grid.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Returns the mark of the other player.
    pub fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mark::X => "X",
            Mark::O => "O",
        })
    }
}

/// All eight winning lines of the 3x3 grid.
const WINNING_LINES: [[Cell; 3]; 8] = [
    // Rows.
    [
        Cell { row: 0, col: 0 },
        Cell { row: 0, col: 1 },
        Cell { row: 0, col: 2 },
    ],
    [
        Cell { row: 1, col: 0 },
        Cell { row: 1, col: 1 },
        Cell { row: 1, col: 2 },
    ],
    [
        Cell { row: 2, col: 0 },
        Cell { row: 2, col: 1 },
        Cell { row: 2, col: 2 },
    ],
    // Columns.
    [
        Cell { row: 0, col: 0 },
        Cell { row: 1, col: 0 },
        Cell { row: 2, col: 0 },
    ],
    [
        Cell { row: 0, col: 1 },
        Cell { row: 1, col: 1 },
        Cell { row: 2, col: 1 },
    ],
    [
        Cell { row: 0, col: 2 },
        Cell { row: 1, col: 2 },
        Cell { row: 2, col: 2 },
    ],
    // Diagonals.
    [
        Cell { row: 0, col: 0 },
        Cell { row: 1, col: 1 },
        Cell { row: 2, col: 2 },
    ],
    [
        Cell { row: 0, col: 2 },
        Cell { row: 1, col: 1 },
        Cell { row: 2, col: 0 },
    ],
];

/// An implementation of the `Board` trait for the game of Tic-Tac-Toe.
///
/// The grid is a 3x3 array of optional marks and a move is a [`Cell`]. X
/// always moves first. Outcomes are judged from the side of `root_player`,
/// the player a search on this board acts for.
#[derive(Debug, Clone)]
pub struct TicTacToeBoard {
    root_player: Mark,
    to_move: Mark,
    grid: [[Option<Mark>; 3]; 3],
    outcome: GameOutcome,
}

impl TicTacToeBoard {
    /// Creates an empty board whose outcome is judged from `root_player`'s
    /// side. X is the first to move.
    pub fn new(root_player: Mark) -> Self {
        Self {
            root_player,
            to_move: Mark::X,
            grid: [[None; 3]; 3],
            outcome: GameOutcome::InProgress,
        }
    }

    /// Returns the mark of the player whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the mark placed at `cell`, if any.
    pub fn mark_at(&self, cell: Cell) -> Option<Mark> {
        self.grid[cell.row][cell.col]
    }

    /// Returns the same position judged from `root_player`'s side instead.
    ///
    /// A search always maximizes for the board's root player, so a turn
    /// controller re-anchors the perspective to whichever player is about to
    /// move before asking for a decision.
    pub fn with_perspective(&self, root_player: Mark) -> Self {
        let mut board = self.clone();
        board.root_player = root_player;
        board.outcome = board.compute_outcome();
        board
    }

    fn winner(&self) -> Option<Mark> {
        WINNING_LINES.iter().find_map(|line| {
            let first = self.grid[line[0].row][line[0].col]?;
            line[1..]
                .iter()
                .all(|cell| self.grid[cell.row][cell.col] == Some(first))
                .then_some(first)
        })
    }

    fn compute_outcome(&self) -> GameOutcome {
        if let Some(winner) = self.winner() {
            if winner == self.root_player {
                GameOutcome::Win
            } else {
                GameOutcome::Lose
            }
        } else if self.grid.iter().flatten().all(Option::is_some) {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }
}

impl Default for TicTacToeBoard {
    /// Creates an empty board judged from X's side.
    fn default() -> Self {
        TicTacToeBoard::new(Mark::X)
    }
}

impl Board for TicTacToeBoard {
    type Move = Cell;

    fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Empty cells in row-major scan order. The fixed order pins down which
    /// of several equally scored moves a search returns.
    fn available_moves(&self) -> Vec<Cell> {
        if self.outcome.is_terminal() {
            return Vec::new();
        }

        let mut moves = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                if self.grid[row][col].is_none() {
                    moves.push(Cell { row, col });
                }
            }
        }
        moves
    }

    fn apply_move(&mut self, mv: &Cell) {
        if self.grid[mv.row][mv.col].is_some() {
            panic!("BUG: move targets an occupied cell: {mv:?}");
        }
        self.grid[mv.row][mv.col] = Some(self.to_move);
        self.to_move = self.to_move.other();
        self.outcome = self.compute_outcome();
    }
}

impl fmt::Display for TicTacToeBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for cell in row {
                match cell {
                    Some(mark) => write!(f, " {mark}")?,
                    None => write!(f, " .")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Board, GameOutcome};
    use crate::boards::tic_tac_toe::{Cell, Mark, TicTacToeBoard};
    use crate::minimax::choose_move;
    use crate::random::{RandomGenerator, SeededRandomGenerator};

    fn play(board: &mut TicTacToeBoard, moves: &[(usize, usize)]) {
        for &(row, col) in moves {
            board.apply_move(&Cell { row, col });
        }
    }

    #[test]
    fn detects_a_row_win() {
        let mut board = TicTacToeBoard::new(Mark::X);
        play(&mut board, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(board.outcome(), GameOutcome::Win);
        assert_eq!(board.with_perspective(Mark::O).outcome(), GameOutcome::Lose);
    }

    #[test]
    fn detects_a_column_win() {
        let mut board = TicTacToeBoard::new(Mark::X);
        play(&mut board, &[(0, 1), (0, 0), (1, 1), (0, 2), (2, 1)]);
        assert_eq!(board.outcome(), GameOutcome::Win);
    }

    #[test]
    fn detects_a_diagonal_win() {
        let mut board = TicTacToeBoard::new(Mark::X);
        play(&mut board, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
        // X completed the main diagonal.
        assert_eq!(board.outcome(), GameOutcome::Win);

        let mut board = TicTacToeBoard::new(Mark::O);
        play(&mut board, &[(0, 0), (0, 2), (0, 1), (1, 1), (2, 2), (2, 0)]);
        // O completed the anti-diagonal; from O's side this is a win.
        assert_eq!(board.outcome(), GameOutcome::Win);
    }

    #[test]
    fn detects_a_draw() {
        let mut board = TicTacToeBoard::new(Mark::X);
        play(
            &mut board,
            &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 2),
                (1, 0),
                (2, 0),
                (1, 1),
                (2, 2),
                (2, 1),
            ],
        );
        assert_eq!(board.outcome(), GameOutcome::Draw);
        assert_eq!(board.with_perspective(Mark::O).outcome(), GameOutcome::Draw);
    }

    #[test]
    fn enumerates_empty_cells_in_row_major_order() {
        let mut board = TicTacToeBoard::new(Mark::X);
        play(&mut board, &[(0, 0), (1, 1)]);
        assert_eq!(
            board.available_moves(),
            vec![
                Cell { row: 0, col: 1 },
                Cell { row: 0, col: 2 },
                Cell { row: 1, col: 0 },
                Cell { row: 1, col: 2 },
                Cell { row: 2, col: 0 },
                Cell { row: 2, col: 1 },
                Cell { row: 2, col: 2 },
            ]
        );
    }

    #[test]
    fn no_moves_remain_after_the_game_ends() {
        let mut board = TicTacToeBoard::new(Mark::X);
        play(&mut board, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn turns_alternate() {
        let mut board = TicTacToeBoard::default();
        assert_eq!(board.to_move(), Mark::X);
        board.apply_move(&Cell { row: 1, col: 1 });
        assert_eq!(board.to_move(), Mark::O);
        assert_eq!(board.mark_at(Cell { row: 1, col: 1 }), Some(Mark::X));
    }

    #[test]
    #[should_panic(expected = "BUG")]
    fn placing_on_an_occupied_cell_is_a_bug() {
        let mut board = TicTacToeBoard::default();
        board.apply_move(&Cell { row: 1, col: 1 });
        board.apply_move(&Cell { row: 1, col: 1 });
    }

    #[test]
    fn perfect_play_from_an_empty_board_draws() {
        let mut game = TicTacToeBoard::default();
        while !game.outcome().is_terminal() {
            let view = game.with_perspective(game.to_move());
            let cell = choose_move(view).unwrap();
            game.apply_move(&cell);
        }
        assert_eq!(game.with_perspective(Mark::X).outcome(), GameOutcome::Draw);
        assert_eq!(game.with_perspective(Mark::O).outcome(), GameOutcome::Draw);
    }

    /// Plays one game where `minimax_mark` moves by search and the other side
    /// picks uniformly at random. Returns the outcome from the search's side.
    fn play_against_random(minimax_mark: Mark, rng: &mut SeededRandomGenerator) -> GameOutcome {
        let mut game = TicTacToeBoard::new(minimax_mark);
        while !game.outcome().is_terminal() {
            let cell = if game.to_move() == minimax_mark {
                choose_move(game.clone()).unwrap()
            } else {
                let moves = game.available_moves();
                *rng.pick(&moves)
            };
            game.apply_move(&cell);
        }
        game.outcome()
    }

    #[test]
    fn never_loses_to_a_random_opponent() {
        let mut rng = SeededRandomGenerator::new(7);
        for _ in 0..3 {
            assert_ne!(play_against_random(Mark::X, &mut rng), GameOutcome::Lose);
            assert_ne!(play_against_random(Mark::O, &mut rng), GameOutcome::Lose);
        }
    }
}

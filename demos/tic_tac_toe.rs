extern crate minimax_lib;

use minimax_lib::board::{Board, GameOutcome};
use minimax_lib::boards::tic_tac_toe::TicTacToeBoard;
use minimax_lib::minimax::choose_move;

/// Plays a full game of Tic-Tac-Toe with both sides moving by minimax search.
/// With perfect play on both sides the game always ends in a draw.
fn main() {
    let mut game = TicTacToeBoard::default();
    println!("{game}");

    while !game.outcome().is_terminal() {
        let mover = game.to_move();

        // The search maximizes for the board's root player, so re-anchor the
        // perspective to whoever is about to move.
        let view = game.with_perspective(mover);
        let cell = choose_move(view).expect("a running game always has a move");

        game.apply_move(&cell);
        println!("{mover} plays ({}, {})", cell.row, cell.col);
        println!("{game}");
    }

    // The game board was created from X's perspective.
    match game.outcome() {
        GameOutcome::Win => println!("X wins"),
        GameOutcome::Lose => println!("O wins"),
        GameOutcome::Draw => println!("The game is a draw"),
        GameOutcome::InProgress => unreachable!(),
    }
}

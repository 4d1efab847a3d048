use std::env;
use std::process;

use chess_rules::board::{Board, GameStatus};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: game_status <move1> <move2> ...   (moves like e2e4)");
        return;
    }

    let mut board = Board::new();
    for notation in args.iter().skip(1) {
        if let Err(err) = board.make_move_notation(notation) {
            eprintln!("{err}");
            process::exit(1);
        }
    }

    let legal_moves = board.generate_moves();
    println!("{board}");
    println!(
        "side_to_move: {}",
        if board.white_to_move() { "white" } else { "black" }
    );
    println!("in_check: {}", board.is_in_check(board.side_to_move()));
    println!("legal_moves: {}", legal_moves.len());
    println!("checkmate: {}", board.status() == Some(GameStatus::Checkmate));
    println!("stalemate: {}", board.status() == Some(GameStatus::Stalemate));
    for mv in legal_moves.iter() {
        println!("{mv}");
    }
}

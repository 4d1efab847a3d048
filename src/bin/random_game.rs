use std::env;

use rand::prelude::*;

use chess_rules::board::{Board, GameStatus};

const DEFAULT_MAX_PLIES: usize = 200;

fn main() {
    let mut args = env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| thread_rng().gen());
    let max_plies: usize = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_PLIES);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::new();
    println!("seed: {seed}");

    for ply in 0..max_plies {
        let moves = board.generate_moves();
        let Some(&mv) = moves.as_slice().choose(&mut rng) else {
            break;
        };
        println!("{:>3}. {} {}", ply / 2 + 1, board.side_to_move(), mv);
        board.make_move(mv);
    }

    board.generate_moves();
    println!("{board}");
    match board.status() {
        Some(GameStatus::Checkmate) => {
            println!("checkmate, {} wins", board.side_to_move().opponent());
        }
        Some(GameStatus::Stalemate) => println!("stalemate"),
        _ => println!("stopped after {} plies", board.history().len()),
    }
}

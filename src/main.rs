//! Scacchiera console game entry point.

use clap::Parser;
use env_logger::Env;
use scacchiera::{game, Board, Color, Player};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Name of the player moving the white pieces (bottom rows)
    #[arg(short, long, default_value_t = String::from("Player 1"))]
    white: String,

    /// Name of the player moving the black pieces (top rows)
    #[arg(short, long, default_value_t = String::from("Player 2"))]
    black: String,
}

fn main() {
    env_logger::Builder::from_env(Env::default().filter_or("SCACCHIERA_LOG", "warn")).init();
    let args = Args::parse();

    let mut board = Board::with_players(
        Player::new(args.white, Color::White),
        Player::new(args.black, Color::Black),
    );
    board.reset_board();

    println!("Enter moves as: fromRow fromCol toRow toCol (1-8), or 'quit'");
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    if let Err(e) = game::run_game(&mut board, stdin.lock(), &mut stdout) {
        eprintln!("Game loop failed: {:?}", e);
    }
}

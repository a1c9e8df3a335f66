use std::io::Cursor;

use scacchiera::game::{parse_command, run_game, Command, InputError, Outcome};
use scacchiera::{Board, Color, Player, Position};

fn named_board() -> Board {
    let mut board = Board::with_players(
        Player::new("Alice", Color::White),
        Player::new("Bob", Color::Black),
    );
    board.reset_board();
    board
}

fn play(board: &mut Board, script: &str) -> (Outcome, String) {
    let mut out = Vec::new();
    let outcome = run_game(board, Cursor::new(script.to_string()), &mut out).unwrap();
    (outcome, String::from_utf8(out).unwrap())
}

#[test]
fn test_parse_command() {
    assert_eq!(
        parse_command("7 5 5 5"),
        Ok(Command::Move {
            from: Position::new(6, 4),
            to: Position::new(4, 4),
        })
    );
    assert_eq!(parse_command("  quit "), Ok(Command::Quit));
    assert_eq!(parse_command("7 5 5"), Err(InputError::WrongArity(3)));
    assert_eq!(
        parse_command("7 e 5 5"),
        Err(InputError::NotANumber("e".to_string()))
    );
    assert_eq!(
        parse_command("-2147483648 1 1 1"),
        Err(InputError::OutOfRange(i32::MIN))
    );
    assert_eq!(
        parse_command("2147483647 0 -5 1"),
        Ok(Command::Move {
            from: Position::new(i32::MAX - 1, -1),
            to: Position::new(-6, 0),
        })
    );
}

#[test]
fn test_extreme_numbers_do_not_stop_the_game() {
    let mut board = named_board();
    let script = "-2147483648 1 1 1\n2147483647 2147483647 1 1\n7 5 5 5\n";
    let (outcome, text) = play(&mut board, script);
    assert_eq!(outcome, Outcome::EndOfInput);
    assert!(text.contains("Invalid input: number out of range: -2147483648"));
    assert!(text.contains("Invalid move: position is off the board"));
    assert!(text.contains("Alice moved p from (7, 5) to (5, 5)"));
}

#[test]
fn test_illegal_moves_are_reported_and_skipped() {
    let mut board = named_board();
    let (outcome, text) = play(&mut board, "7 5 4 5\nhello\n7 5 5 5\nquit\n7 4 5 4\n");
    assert_eq!(outcome, Outcome::Quit);
    assert!(text.contains("Invalid move: the piece cannot move that way"));
    assert!(text.contains("Invalid input: expected four numbers"));
    assert!(text.contains("Alice moved p from (7, 5) to (5, 5)"));
    assert!(board.is_empty(Position::new(6, 4)));
    assert!(!board.is_empty(Position::new(6, 3)));
}

#[test]
fn test_capture_is_announced() {
    let mut board = named_board();
    let (outcome, text) = play(&mut board, "7 5 5 5\n2 4 4 4\n5 5 4 4\n");
    assert_eq!(outcome, Outcome::EndOfInput);
    assert!(text.contains("Bob moved p from (2, 4) to (4, 4)"));
    assert!(text.contains("Alice moved p from (5, 5) to (4, 4)\nAnd has captured p of Bob"));
}

#[test]
fn test_king_capture_ends_the_game() {
    let mut board = named_board();
    // il re nero è in (0,3): si aprono le diagonali e la donna bianca lo cattura
    let script = "7 4 5 4\n2 3 4 3\n8 5 4 1\n4 1 1 4\n1 4 2 5\n";
    let (outcome, text) = play(&mut board, script);
    assert_eq!(
        outcome,
        Outcome::KingCaptured {
            winner: "Alice".to_string()
        }
    );
    assert!(text.contains("Alice moved q from (4, 1) to (1, 4)\nAnd has captured K of Bob"));
    assert!(text.trim_end().ends_with("Alice wins!"));
    assert!(board.is_king_dead());
}

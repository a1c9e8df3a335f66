//! Console driver for a two-player game
//!
//! Reads moves as four 1-based numbers (`fromRow fromCol toRow toCol`), asks the
//! board whether they are legal, plays them and stops when a king falls.
//! There is no turn order: whoever types a legal move plays it.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::Board;
use crate::position::Position;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("expected four numbers (fromRow fromCol toRow toCol), got {0} values")]
    WrongArity(usize),
    #[error("not a number: {0:?}")]
    NotANumber(String),
    #[error("number out of range: {0}")]
    OutOfRange(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { from: Position, to: Position },
    Quit,
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    KingCaptured { winner: String },
    Quit,
    EndOfInput,
}

/// Parse one input line. Numbers are 1-based as printed on the board.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("q") {
        return Ok(Command::Quit);
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();
    if parts.len() != 4 {
        return Err(InputError::WrongArity(parts.len()));
    }
    // da 1-based a 0-based
    let mut values = [0i32; 4];
    for (slot, part) in values.iter_mut().zip(&parts) {
        let number = part
            .parse::<i32>()
            .map_err(|_| InputError::NotANumber(part.to_string()))?;
        *slot = number
            .checked_sub(1)
            .ok_or(InputError::OutOfRange(number))?;
    }
    Ok(Command::Move {
        from: Position::new(values[0], values[1]),
        to: Position::new(values[2], values[3]),
    })
}

/// Play from `input` until a king is captured, `quit` is typed or input runs out.
pub fn run_game<R: BufRead, W: Write>(
    board: &mut Board,
    input: R,
    out: &mut W,
) -> io::Result<Outcome> {
    writeln!(out, "{}", board)?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (from, to) = match parse_command(&line) {
            Ok(Command::Quit) => return Ok(Outcome::Quit),
            Ok(Command::Move { from, to }) => (from, to),
            Err(e) => {
                writeln!(out, "Invalid input: {}", e)?;
                continue;
            }
        };
        if let Err(reason) = board.validate_move(from, to) {
            writeln!(out, "Invalid move: {}", reason)?;
            continue;
        }

        // nome del vincitore da leggere prima che il pezzo si sposti
        let mover = board.get_player_name(from).map(str::to_string);
        if let Some(text) = board.describe_move(from, to) {
            writeln!(out, "{}", text)?;
        }
        board.move_piece(from.row, from.column, to.row, to.column);
        writeln!(out, "{}", board)?;

        if board.is_king_dead() {
            let winner = mover.unwrap_or_default();
            debug!("game over, winner {winner}");
            writeln!(out, "{} wins!", winner)?;
            return Ok(Outcome::KingCaptured { winner });
        }
    }
    Ok(Outcome::EndOfInput)
}

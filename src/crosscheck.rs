//! Compare board verdicts with shakmaty's attack tables.
//!
//! Row 0 is the black back rank, so `rank = 7 - row`; white pawns walk
//! towards row 0, which is towards rank 8 in shakmaty terms.

use shakmaty::{attacks, Bitboard, Square};

use crate::board::Board;
use crate::piece::{Color, Piece, PieceKind};
use crate::position::{Position, BOARD_SIZE};

pub fn to_square(position: Position) -> Square {
    let index = (BOARD_SIZE - 1 - position.row) * BOARD_SIZE + position.column;
    Square::new(index as u32)
}

fn to_shakmaty_color(color: Color) -> shakmaty::Color {
    match color {
        Color::White => shakmaty::Color::White,
        Color::Black => shakmaty::Color::Black,
    }
}

pub fn all_positions() -> impl Iterator<Item = Position> {
    (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |column| Position::new(row, column)))
}

/// Destinations shakmaty would allow for `mover` at `from` when every square
/// in `occupied` holds an enemy. Pawns only report their captures.
pub fn reference_targets(mover: Piece, from: Position, occupied: Bitboard) -> Bitboard {
    let sq = to_square(from);
    match mover.kind {
        PieceKind::Rook => attacks::rook_attacks(sq, occupied),
        PieceKind::Bishop => attacks::bishop_attacks(sq, occupied),
        PieceKind::Queen => attacks::queen_attacks(sq, occupied),
        PieceKind::Knight => attacks::knight_attacks(sq),
        PieceKind::King => attacks::king_attacks(sq),
        PieceKind::Pawn => attacks::pawn_attacks(to_shakmaty_color(mover.color), sq) & occupied,
    }
}

/// Squares where `Board::is_valid_move` and shakmaty disagree for `mover`
/// standing on `from` among enemy `blockers`.
pub fn mismatches(mover: Piece, from: Position, blockers: &[Position]) -> Vec<Position> {
    let mut board = Board::new();
    let enemy = mover.color.opposite();
    let mut bits = 0u64;
    for &blocker in blockers.iter().filter(|&&b| b != from && b.is_on_board()) {
        board.place(blocker, Piece::new(enemy, PieceKind::Pawn));
        bits |= 1u64 << (to_square(blocker) as u32);
    }
    board.place(from, mover);

    let expected = reference_targets(mover, from, Bitboard(bits));
    all_positions()
        .filter(|&to| mover.kind != PieceKind::Pawn || to.column != from.column)
        .filter(|&to| {
            board.is_valid_move(from.row, from.column, to.row, to.column)
                != expected.contains(to_square(to))
        })
        .collect()
}

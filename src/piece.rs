//! Pieces and their board-independent movement geometry.
//!
//! A `Piece` never looks at the board. Everything that depends on occupancy
//! (path blocking, pawn captures, initial double step) is supplied by the
//! `Board`, either by its own checks or through `PawnContext`.

use std::fmt;

use crate::position::{Position, BOARD_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a forward pawn move: white walks towards row 0.
    #[inline]
    pub const fn forward(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Column offset of the forward-left diagonal, seen from the pawn's side.
    #[inline]
    pub const fn left(self) -> i32 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub const fn back_rank(self) -> i32 {
        match self {
            Color::White => BOARD_SIZE - 1,
            Color::Black => 0,
        }
    }

    pub const fn pawn_rank(self) -> i32 {
        match self {
            Color::White => BOARD_SIZE - 2,
            Color::Black => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "W"),
            Color::Black => write!(f, "B"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Display glyph. Only the king is upper case; the knight shares `k`.
    pub const fn glyph(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Rook => 'r',
            PieceKind::Knight => 'k',
            PieceKind::Bishop => 'b',
            PieceKind::Queen => 'q',
            PieceKind::King => 'K',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Board facts a pawn needs beyond its own geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PawnContext {
    pub at_initial_position: bool,
    pub opponent_at_forward_left: bool,
    pub opponent_at_forward_right: bool,
    pub destination_occupied: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Pure geometry: can this piece reach `to` from `from` on an empty board?
    ///
    /// For pawns this is only the shape of the move (one or two forward, one
    /// forward-diagonal); `is_valid_move_given_context` decides the rest.
    pub fn is_valid_move_geometry(&self, from: Position, to: Position) -> bool {
        let dr = from.row_delta(to);
        let dc = from.column_delta(to);
        if dr == 0 && dc == 0 {
            return false;
        }
        match self.kind {
            PieceKind::Rook => from.row == to.row || from.column == to.column,
            PieceKind::Bishop => dr == dc,
            PieceKind::Queen => dr == dc || from.row == to.row || from.column == to.column,
            PieceKind::Knight => (dr == 1 && dc == 2) || (dr == 2 && dc == 1),
            PieceKind::King => dr.max(dc) == 1,
            PieceKind::Pawn => {
                let step = from.row_step(to);
                let forward = i64::from(self.color.forward());
                (dc == 0 && (step == forward || step == 2 * forward))
                    || (dc == 1 && step == forward)
            }
        }
    }

    /// Pawn rules that need the board:
    /// - one square forward onto an empty square
    /// - two squares forward onto an empty square, only from the initial rank
    /// - one square forward-diagonal, only onto an opponent piece
    ///
    /// Always false for non-pawns.
    pub fn is_valid_move_given_context(
        &self,
        from: Position,
        to: Position,
        ctx: PawnContext,
    ) -> bool {
        if self.kind != PieceKind::Pawn {
            return false;
        }
        let forward = i64::from(self.color.forward());
        let step = from.row_step(to);
        let side = from.column_step(to);

        if side == 0 {
            if step == forward {
                return !ctx.destination_occupied;
            }
            if step == 2 * forward {
                return ctx.at_initial_position && !ctx.destination_occupied;
            }
            return false;
        }

        if step != forward {
            return false;
        }
        let left = i64::from(self.color.left());
        if side == left {
            ctx.opponent_at_forward_left
        } else if side == -left {
            ctx.opponent_at_forward_right
        } else {
            false
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.glyph())
    }
}

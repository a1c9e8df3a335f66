// Board 8x8 a celle: ogni cella ha un colore di sfondo fisso e al più un pezzo.
// La legalità delle mosse è un predicato totale: ogni input non valido dà false.

use std::fmt;

use log::{debug, info, trace};

use crate::piece::{Color, PawnContext, Piece, PieceKind};
use crate::player::Player;
use crate::position::{Position, BOARD_SIZE};

const SIZE: usize = BOARD_SIZE as usize;

// Ordine della traversa: re in colonna 3, donna in colonna 4
pub const BACK_RANK: [PieceKind; SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Why `validate_move` refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejection {
    #[error("source and destination are the same square")]
    NullMove,
    #[error("position is off the board")]
    OutOfBounds,
    #[error("there is no piece to move")]
    EmptySource,
    #[error("destination holds a piece of the same color")]
    OwnPieceAtDestination,
    #[error("the piece cannot move that way")]
    Geometry,
    #[error("another piece is in the way")]
    BlockedPath,
    #[error("pawn move not allowed from here")]
    PawnRule,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    shade: Color,
    piece: Option<Piece>,
}

impl Cell {
    pub const fn new(shade: Color) -> Self {
        Self { shade, piece: None }
    }

    /// Checkerboard shading, display only.
    pub fn shade(&self) -> Color {
        self.shade
    }

    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    pub fn set_piece(&mut self, piece: Piece) {
        self.piece = Some(piece);
    }

    pub fn remove_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }
}

// "Wr", "BK", oppure vuoto, centrato su tre colonne
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self.piece {
            Some(piece) => format!("{}{}", piece.color, piece.kind.glyph()),
            None => String::new(),
        };
        write!(f, "{:^3}", text)
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
    king_captured: bool,
    players: [Player; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Empty board with default player names. Call `reset_board` to set up pieces.
    pub fn new() -> Self {
        Self::with_players(
            Player::new("Player 1", Color::White),
            Player::new("Player 2", Color::Black),
        )
    }

    /// Empty board for two named players. If both claim the same color the
    /// first one owns it and the second takes the other side.
    pub fn with_players(first: Player, second: Player) -> Self {
        let mut cells = [[Cell::new(Color::White); SIZE]; SIZE];
        for (row, line) in cells.iter_mut().enumerate() {
            for (column, cell) in line.iter_mut().enumerate() {
                let shade = if (row + column) % 2 == 0 {
                    Color::White
                } else {
                    Color::Black
                };
                *cell = Cell::new(shade);
            }
        }
        let (white, black) = match first.color {
            Color::White => (first, Player::new(second.name, Color::Black)),
            Color::Black => (Player::new(second.name, Color::White), first),
        };
        Self {
            cells,
            king_captured: false,
            players: [white, black],
        }
    }

    /// Board in the standard opening layout.
    pub fn new_game() -> Self {
        let mut board = Self::new();
        board.reset_board();
        board
    }

    /// Clears every cell, places both sides in the opening layout and revives the king.
    pub fn reset_board(&mut self) {
        self.clear();
        for color in [Color::White, Color::Black] {
            self.place_pieces(color);
        }
        self.king_captured = false;
        debug!("board reset to opening layout");
    }

    fn place_pieces(&mut self, color: Color) {
        let back = color.back_rank() as usize;
        let pawns = color.pawn_rank() as usize;
        for (column, kind) in BACK_RANK.iter().enumerate() {
            self.cells[back][column].set_piece(Piece::new(color, *kind));
            self.cells[pawns][column].set_piece(Piece::new(color, PieceKind::Pawn));
        }
    }

    /// Puts `piece` at `position`, replacing whatever was there. Off-board is ignored.
    pub fn place(&mut self, position: Position, piece: Piece) {
        if let Some(cell) = self.cell_mut(position) {
            cell.set_piece(piece);
        }
    }

    /// Removes and returns the piece at `position`.
    pub fn remove(&mut self, position: Position) -> Option<Piece> {
        self.cell_mut(position).and_then(Cell::remove_piece)
    }

    /// Removes every piece; the king-captured flag is left alone.
    pub fn clear(&mut self) {
        for cell in self.cells.iter_mut().flatten() {
            cell.remove_piece();
        }
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        if !position.is_on_board() {
            return None;
        }
        Some(&self.cells[position.row as usize][position.column as usize])
    }

    fn cell_mut(&mut self, position: Position) -> Option<&mut Cell> {
        if !position.is_on_board() {
            return None;
        }
        Some(&mut self.cells[position.row as usize][position.column as usize])
    }

    /// True when `position` is off the board or its cell holds no piece.
    pub fn is_empty(&self, position: Position) -> bool {
        self.cell(position).map_or(true, Cell::is_empty)
    }

    pub fn get_piece(&self, position: Position) -> Option<Piece> {
        self.cell(position).and_then(Cell::piece)
    }

    pub fn player(&self, color: Color) -> &Player {
        &self.players[color.index()]
    }

    /// Name of the player owning the piece at `position`.
    pub fn get_player_name(&self, position: Position) -> Option<&str> {
        self.get_piece(position)
            .map(|piece| self.player(piece.color).name.as_str())
    }

    pub fn is_valid_move(&self, from_row: i32, from_column: i32, to_row: i32, to_column: i32) -> bool {
        let from = Position::new(from_row, from_column);
        let to = Position::new(to_row, to_column);
        match self.validate_move(from, to) {
            Ok(()) => true,
            Err(reason) => {
                trace!("rejected {from} -> {to}: {reason}");
                false
            }
        }
    }

    /// Same checks as `is_valid_move`, in the same order, but says which one failed.
    pub fn validate_move(&self, from: Position, to: Position) -> Result<(), MoveRejection> {
        if from == to {
            return Err(MoveRejection::NullMove);
        }
        if !from.is_on_board() || !to.is_on_board() {
            return Err(MoveRejection::OutOfBounds);
        }
        let piece = self.get_piece(from).ok_or(MoveRejection::EmptySource)?;
        if let Some(target) = self.get_piece(to) {
            if target.color == piece.color {
                return Err(MoveRejection::OwnPieceAtDestination);
            }
        }
        if !piece.is_valid_move_geometry(from, to) {
            return Err(MoveRejection::Geometry);
        }
        if !self.has_no_piece_in_path(piece, from, to) {
            return Err(MoveRejection::BlockedPath);
        }
        if piece.kind == PieceKind::Pawn && !self.is_valid_pawn_move(piece, from, to) {
            return Err(MoveRejection::PawnRule);
        }
        Ok(())
    }

    // I cavalli saltano; una mossa non in linea retta per gli altri pezzi è bloccata
    fn has_no_piece_in_path(&self, piece: Piece, from: Position, to: Position) -> bool {
        if piece.kind == PieceKind::Knight {
            return true;
        }
        if !from.is_straight_line_to(to) {
            return false;
        }
        from.squares_between(to)
            .into_iter()
            .all(|square| self.is_empty(square))
    }

    fn is_valid_pawn_move(&self, pawn: Piece, from: Position, to: Position) -> bool {
        let forward_row = from.row + pawn.color.forward();
        let forward_left = Position::new(forward_row, from.column + pawn.color.left());
        let forward_right = Position::new(forward_row, from.column - pawn.color.left());
        let is_opponent = |position: Position| {
            self.get_piece(position)
                .map_or(false, |other| other.color != pawn.color)
        };
        let ctx = PawnContext {
            at_initial_position: from.row == pawn.color.pawn_rank(),
            opponent_at_forward_left: is_opponent(forward_left),
            opponent_at_forward_right: is_opponent(forward_right),
            destination_occupied: !self.is_empty(to),
        };
        pawn.is_valid_move_given_context(from, to, ctx)
    }

    /// Announcement for a move about to be played; `None` when `from` is empty.
    /// A second line names the captured piece, if any.
    pub fn describe_move(&self, from: Position, to: Position) -> Option<String> {
        let piece = self.get_piece(from)?;
        let mover = self.player(piece.color).name.as_str();
        let mut text = format!("{mover} moved {piece} from {from} to {to}");
        if let Some(target) = self.get_piece(to) {
            if target.color != piece.color {
                let victim = self.player(target.color).name.as_str();
                text.push_str(&format!("\nAnd has captured {target} of {victim}"));
            }
        }
        Some(text)
    }

    /// Applies a move already accepted by `is_valid_move`. Nothing is re-checked.
    ///
    /// # Panics
    ///
    /// If either position is off the board. An empty source clears the destination.
    pub fn move_piece(&mut self, from_row: i32, from_column: i32, to_row: i32, to_column: i32) {
        let from = Position::new(from_row, from_column);
        let to = Position::new(to_row, to_column);
        assert!(
            from.is_on_board() && to.is_on_board(),
            "move_piece called with off-board squares {from} -> {to}"
        );
        self.update_is_king_dead(to);

        let (fr, fc) = (from.row as usize, from.column as usize);
        let (tr, tc) = (to.row as usize, to.column as usize);
        let captured = self.cells[tr][tc].remove_piece();
        let moving = self.cells[fr][fc].remove_piece();
        if let Some(piece) = moving {
            self.cells[tr][tc].set_piece(piece);
        }
        debug!("moved {moving:?} {from} -> {to}, captured {captured:?}");
    }

    fn update_is_king_dead(&mut self, to: Position) {
        if let Some(piece) = self.get_piece(to) {
            if piece.kind == PieceKind::King {
                self.king_captured = true;
                info!("{} king captured at {to}", piece.color);
            }
        }
    }

    pub fn is_king_dead(&self) -> bool {
        self.king_captured
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for column in 0..SIZE {
            write!(f, "  {}  ", column + 1)?;
        }
        writeln!(f)?;
        for (row, line) in self.cells.iter().enumerate() {
            write!(f, "{}", row + 1)?;
            for cell in line {
                write!(f, " {} ", cell)?;
            }
            writeln!(f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

pub mod board;
pub mod crosscheck;
pub mod game;
pub mod piece;
pub mod player;
pub mod position;

pub use board::{Board, Cell, MoveRejection};
pub use piece::{Color, PawnContext, Piece, PieceKind};
pub use player::Player;
pub use position::{Direction, Position, BOARD_SIZE};

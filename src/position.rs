// Coordinate su scacchiera 8x8: row 0 è la traversa del nero, row 7 quella del bianco.
// Nessun controllo di bounds qui; è compito della Board.

use std::fmt;

/// Board edge length. Rows and columns live in `0..BOARD_SIZE`.
pub const BOARD_SIZE: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: i32,
    pub column: i32,
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.column >= 0 && self.column < BOARD_SIZE
    }

    pub fn translated(self, direction: Direction) -> Self {
        Self::new(self.row + direction.row_offset, self.column + direction.column_offset)
    }

    /// Signed row change towards `to`, widened so extreme coordinates cannot overflow.
    pub fn row_step(self, to: Position) -> i64 {
        i64::from(to.row) - i64::from(self.row)
    }

    pub fn column_step(self, to: Position) -> i64 {
        i64::from(to.column) - i64::from(self.column)
    }

    pub fn row_delta(self, to: Position) -> i64 {
        self.row_step(to).abs()
    }

    pub fn column_delta(self, to: Position) -> i64 {
        self.column_step(to).abs()
    }

    /// Same row, same column or a true diagonal: a line a slider could travel.
    pub fn is_straight_line_to(self, to: Position) -> bool {
        self.row == to.row
            || self.column == to.column
            || self.row_delta(to) == self.column_delta(to)
    }

    /// Squares strictly between `self` and `to`, walked one unit step at a time.
    /// Empty when the two positions are not on a common line or either is off the board.
    pub fn squares_between(self, to: Position) -> Vec<Position> {
        let mut out = Vec::new();
        if self == to || !self.is_on_board() || !to.is_on_board() || !self.is_straight_line_to(to) {
            return out;
        }
        let direction = Direction::towards(self, to);
        let mut current = self.translated(direction);
        while current != to {
            out.push(current);
            current = current.translated(direction);
        }
        out
    }
}

// 1-based, come la stampa della board
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", i64::from(self.row) + 1, i64::from(self.column) + 1)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

/// Unit step along a line, each offset in `{-1, 0, 1}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub row_offset: i32,
    pub column_offset: i32,
}

impl Direction {
    pub fn towards(from: Position, to: Position) -> Self {
        Self {
            row_offset: from.row_step(to).signum() as i32,
            column_offset: from.column_step(to).signum() as i32,
        }
    }
}

use std::sync::atomic::{AtomicUsize, Ordering};

use log::{LevelFilter, Log, Metadata, Record};
use scacchiera::{Board, Color, Piece, PieceKind, Position};

// Formats every record so Display impls on the logged values actually run.
struct CountingLogger {
    records: AtomicUsize,
}

impl Log for CountingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let _ = record.args().to_string();
        self.records.fetch_add(1, Ordering::SeqCst);
    }

    fn flush(&self) {}
}

static LOGGER: CountingLogger = CountingLogger {
    records: AtomicUsize::new(0),
};

fn install_trace_logger() {
    // può essere già installato da un altro test dello stesso binario
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
}

#[test]
fn test_extreme_coordinates_are_rejected_with_trace_logging() {
    install_trace_logger();
    let board = Board::new_game();
    let before = LOGGER.records.load(Ordering::SeqCst);

    let extremes = [i32::MIN, -1, 8, i32::MAX];
    for &value in &extremes {
        assert!(!board.is_valid_move(6, 4, value, 4));
        assert!(!board.is_valid_move(6, 4, 4, value));
        assert!(!board.is_valid_move(value, 4, 4, 4));
        assert!(!board.is_valid_move(4, value, 4, 4));
        assert!(!board.is_valid_move(value, value, value, value));
    }
    assert!(!board.is_valid_move(i32::MIN, i32::MIN, i32::MAX, i32::MAX));
    assert!(!board.is_valid_move(i32::MAX, i32::MAX, i32::MIN, i32::MIN));

    assert!(LOGGER.records.load(Ordering::SeqCst) > before);
}

#[test]
fn test_king_capture_is_logged_without_side_effects() {
    install_trace_logger();
    let mut board = Board::new();
    board.place(Position::new(0, 0), Piece::new(Color::White, PieceKind::Rook));
    board.place(Position::new(0, 7), Piece::new(Color::Black, PieceKind::King));
    assert!(board.is_valid_move(0, 0, 0, 7));
    board.move_piece(0, 0, 0, 7);
    assert!(board.is_king_dead());
}

use clap::Parser;
use env_logger::Env;
use scacchiera::crosscheck::{all_positions, mismatches};
use scacchiera::{Color, Piece, PieceKind, Position};

#[derive(Parser, Debug)]
#[command(author, version, about = "Cross-check move legality against shakmaty attack tables", long_about = None)]
struct Args {
    /// Print every mismatching from/to pair
    #[arg(short, long)]
    verbose: bool,

    /// Seed of the scattered blocker pattern (0 = empty board only)
    #[arg(short, long, default_value_t = 7)]
    pattern: i32,
}

fn blockers(pattern: i32) -> Vec<Position> {
    if pattern == 0 {
        return Vec::new();
    }
    all_positions()
        .filter(|p| (p.row * 3 + p.column * 5) % pattern == 0)
        .collect()
}

fn main() {
    env_logger::Builder::from_env(Env::default().filter_or("SCACCHIERA_LOG", "warn")).init();
    let args = Args::parse();

    let layouts = [Vec::new(), blockers(args.pattern)];
    let kinds = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    let start = std::time::Instant::now();
    let mut checked = 0u64;
    let mut failures = 0u64;
    for layout in &layouts {
        for color in [Color::White, Color::Black] {
            for kind in kinds {
                let mover = Piece::new(color, kind);
                for from in all_positions() {
                    checked += 1;
                    let bad = mismatches(mover, from, layout);
                    failures += bad.len() as u64;
                    if args.verbose {
                        for to in bad {
                            println!("{:?} {:?}: {} -> {}", color, kind, from, to);
                        }
                    }
                }
            }
        }
    }

    println!(
        "Checked {} origins in {} ms, {} mismatches",
        checked,
        start.elapsed().as_millis(),
        failures
    );
    if failures > 0 {
        std::process::exit(1);
    }
}

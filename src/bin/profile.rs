use std::hint::black_box;

use knights_tour::{find_knight_tour, Square};

/// Runs the standard-board search from every start square. Build with
/// `--features hotpath` to get a timing report on exit.
#[hotpath::main]
fn main() {
    for _ in 0..20 {
        for row in 0..8 {
            for col in 0..8 {
                if let Ok(report) = find_knight_tour(Square::new(row, col)) {
                    black_box(report);
                }
            }
        }
    }
}

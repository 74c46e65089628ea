//! Enumerate the eight queens puzzle
//! Usage:
//!
//! ```bash
//! cargo run --release
//! ```
//!
//! Prints every solution as an 8×8 grid of `Q` and `.` characters, one blank
//! line between solutions. Set `RUST_LOG=debug` to trace the search on
//! stderr.

use eight_queens::{solve, Board};

fn main() {
    env_logger::init();

    log::info!("Searching for eight queens placements.");

    let mut board = Board::empty();
    solve(&mut board, 0, &mut |solution| {
        println!("{}", solution);
        println!();
    });

    log::info!("Search space exhausted.");
}

//! Drives a short board session and prints the grid after each step.
//!
//! This is the textual stand-in for a real renderer: it mutates the board
//! only through the propagator and pulls state back through the read API.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p pencilmark-grid --example session
//! RUST_LOG=debug cargo run -p pencilmark-grid --example session
//! ```

use pencilmark_core::{Digit, Position};
use pencilmark_grid::{GridState, propagator};

fn print_candidates(grid: &GridState, pos: Position) {
    let list: Vec<String> = grid.domain_at(pos).iter().map(|d| d.to_string()).collect();
    println!("candidates at {pos}: [{}]", list.join(", "));
}

fn main() {
    env_logger::init();

    let givens = [
        (Position::new(0, 0), Digit::D5),
        (Position::new(4, 0), Digit::D7),
        (Position::new(8, 4), Digit::D1),
    ];
    let mut grid = GridState::from_givens(givens);
    println!("{grid}");

    let pos = Position::new(1, 0);
    print_candidates(&grid, pos);

    let outcome = propagator::assign(&mut grid, pos, Digit::D3);
    println!("assign 3 at {pos}: {outcome}");
    println!("{grid}");

    // Occupied cells refuse a different value.
    let outcome = propagator::assign(&mut grid, pos, Digit::D4);
    println!("assign 4 at {pos}: {outcome}");

    let outcome = propagator::retract(&mut grid, pos);
    println!("retract {pos}: {outcome}");
    print_candidates(&grid, pos);

    println!("assigned cells: {}", grid.assigned_count());
}

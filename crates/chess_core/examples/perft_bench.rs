//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p chess_core -- [depth]
//!
//! Runs perft from the initial position for white, then black.

use chess_core::{Board, Color, perft};
use std::env;
use std::time::Instant;

fn main() {
    let depth: u8 = env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(4);

    println!("=== Perft Benchmark ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for side in [Color::White, Color::Black] {
        let mut board = Board::new();

        print!("{:.<30}", format!("Initial position, {side} first"));

        let start = Instant::now();
        let nodes = perft(&mut board, side, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}

//! Demonstrates tracing output from filtering and persistence
//!
//! Run with: cargo run --example tracing_demo --features tracing

use sift::predicate::*;
use sift::{filter, partition, save_lines};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    let readings = [12, 48, 7, 95, 33, 61];
    let normal = between(10, 60);

    let kept = filter(&readings, &normal);
    tracing::info!("within range: {:?}", kept);

    let (_, outliers) = partition(&readings, &normal);
    let lines: Vec<String> = outliers.iter().map(|r| r.to_string()).collect();

    let path = std::env::temp_dir().join("outliers.txt");
    match save_lines(&lines, &path) {
        Ok(()) => tracing::info!("outliers written to {}", path.display()),
        Err(e) => tracing::error!("could not write outliers: {}", e),
    }
}

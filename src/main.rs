//! Walks through the basics of [`Sequence`]: pushing, indexing and both cursor directions.
//!
//! Set `RUST_LOG=trace` to see the Sequence grow.

use dynamic_array::collections::contiguous::Sequence;
use tracing_subscriber::{EnvFilter, fmt};

fn main() {
    // Default to WARN if RUST_LOG isn't set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let mut seq = Sequence::new();
    for i in 0..10 {
        seq.push(i + 1);
    }

    for i in 0..seq.len() {
        seq[i] *= 2;
    }

    println!("{seq:?}");

    println!("\n[Forward]");
    let mut cursor = seq.cursor();
    while let Some(value) = cursor.current() {
        println!("{value}");
        cursor.move_next();
    }

    println!("\n[Reverse]");
    for value in seq.cursor_rev() {
        println!("{value}");
    }

    seq.insert(1, 15);
    println!("\nAfter insert(1, 15): {seq}");
    seq.remove(0);
    println!("After remove(0): {seq}");
}

//! Generates a centered-cube fixture and prints each depth slice.
//!
//! Run with `RUST_LOG=debug` to see the generator's log records.

use volume_fixture::{create_centered_cube, init_logging, Result};

fn main() -> Result<()> {
    init_logging();

    let volume = create_centered_cube(&[6, 5, 7], 3)?;
    let shape = volume.shape();
    println!("shape {shape}, {} cells at -1", volume.count(&-1));

    for d in 0..shape.depth() {
        println!("depth {d}:");
        if let Some(slice) = volume.slice_depth(d) {
            for row in slice.chunks(shape.width()) {
                let line: Vec<String> = row.iter().map(|v| format!("{v:>2}")).collect();
                println!("  {}", line.join(" "));
            }
        }
    }

    Ok(())
}

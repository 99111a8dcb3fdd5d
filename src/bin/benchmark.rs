//! Step throughput: serial vs parallel, wrapped vs bounded

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use toroidal_life::domain::{Algorithm, Grid, seeder, step};

fn seeded_grid(size: usize, wrap: bool) -> Grid {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut grid = Grid::new(size, size, wrap);
    seeder::seed_default(&mut grid, &mut rng);
    grid
}

fn benchmark(size: usize, wrap: bool, algorithm: Algorithm, iterations: u32) -> f64 {
    let mut grid = seeded_grid(size, wrap);

    let start = Instant::now();
    for _ in 0..iterations {
        step::advance(&mut grid, algorithm);
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Life Step Benchmark ===\n");

    let sizes = [25, 100, 250, 500, 1000];
    let iterations = 20;

    println!(
        "{:>10} {:>6} {:>12} {:>12} {:>10}",
        "Size", "Wrap", "Serial", "Parallel", "Speedup"
    );
    println!("{:-<56}", "");

    for size in sizes {
        for wrap in [true, false] {
            let serial_ms = benchmark(size, wrap, Algorithm::Serial, iterations);
            let parallel_ms = benchmark(size, wrap, Algorithm::Parallel, iterations);

            println!(
                "{:>10} {:>6} {:>12.3} {:>12.3} {:>9.1}x",
                format!("{}x{}", size, size),
                if wrap { "on" } else { "off" },
                serial_ms,
                parallel_ms,
                serial_ms / parallel_ms.max(f64::EPSILON),
            );
        }
    }

    let size = 1000;
    let cells = (size * size) as f64;
    let ms = benchmark(size, true, Algorithm::Parallel, iterations);
    println!(
        "\nParallel at {size}x{size}: {:.2} ms/gen, {:.1}M cells/sec",
        ms,
        cells / (ms / 1000.0) / 1_000_000.0
    );
}

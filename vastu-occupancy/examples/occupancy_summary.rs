//! Occupancy summary for a synthetic recording.
//!
//! This example demonstrates:
//! - Loading an occupancy configuration (YAML), or using defaults
//! - Generating a reflected random walk in a 100 cm arena at 50 Hz
//! - Computing the occupancy map and coverage
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=info cargo run --example occupancy_summary -- configs/occupancy.yaml
//! ```

use std::path::Path;

use vastu_occupancy::{ArenaSize, OccupancyConfig, spatial_occupancy};

const ARENA: f64 = 100.0;
const SAMPLES: usize = 30_000;
const FRAME: f64 = 0.02;

fn main() {
    env_logger::init();

    let mut config = match std::env::args().nth(1) {
        Some(path) => match OccupancyConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => OccupancyConfig::default(),
    };
    if config.arena_size.is_none() {
        config.arena_size = Some(ArenaSize::Scalar(ARENA));
    }
    config.debug = true;

    let (time, position, speed) = random_walk(SAMPLES);

    match spatial_occupancy(&time, &position, &speed, &config) {
        Ok(result) => {
            println!("=== Occupancy ===");
            println!("Arena:           {} {:?}", config.arena_shape, config.arena_size);
            println!("Bins:            {:?}", result.edges.bin_counts());
            println!("Frame duration:  {:.4}", result.frame_duration);
            println!(
                "Samples:         {} total, {} moving, {} binned",
                result.stats.num_samples, result.stats.moving_samples, result.stats.frames_included
            );
            println!("Time in map:     {:.1}", result.stats.total_time);
            println!("Visited bins:    {}", result.map.visited_bins());
            println!("Coverage:        {:.2}%", result.coverage * 100.0);
        }
        Err(e) => {
            eprintln!("Occupancy failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Reflected random walk starting at the arena centre.
fn random_walk(n: usize) -> (Vec<f64>, Vec<Vec<f64>>, Vec<f64>) {
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    let mut next = || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 11) as f64 / (1u64 << 53) as f64
    };
    let reflect = |v: f64| v.abs().min(2.0 * ARENA - v.abs() - 1e-9);

    let (mut x, mut y) = (ARENA / 2.0, ARENA / 2.0);
    let mut xs = Vec::with_capacity(n);
    let mut ys = Vec::with_capacity(n);
    let mut speed = Vec::with_capacity(n);
    for _ in 0..n {
        let (dx, dy) = ((next() - 0.5) * 2.0, (next() - 0.5) * 2.0);
        x = reflect(x + dx);
        y = reflect(y + dy);
        xs.push(x);
        ys.push(y);
        speed.push(dx.hypot(dy) / FRAME);
    }

    let time = (0..n).map(|i| i as f64 * FRAME).collect();
    (time, vec![xs, ys], speed)
}

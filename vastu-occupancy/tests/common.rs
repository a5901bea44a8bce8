//! Test utilities for VastuOccupancy.
//!
//! Deterministic synthetic trajectories so tests need no data files.

#![allow(dead_code)]

use std::f64::consts::PI;

/// Simple 64-bit LCG for reproducible uniform samples in [0, 1).
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }

    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

/// Timestamps 0, dt, 2*dt, ...
pub fn regular_time(n: usize, dt: f64) -> Vec<f64> {
    (0..n).map(|i| i as f64 * dt).collect()
}

/// Same speed for every sample.
pub fn constant_speed(n: usize, speed: f64) -> Vec<f64> {
    vec![speed; n]
}

/// `[x, y]` rows uniformly distributed over `[lo, hi)^2`.
pub fn uniform_square(n: usize, lo: f64, hi: f64, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = Lcg::new(seed);
    let x = (0..n).map(|_| rng.uniform(lo, hi)).collect();
    let y = (0..n).map(|_| rng.uniform(lo, hi)).collect();
    vec![x, y]
}

/// `[x, y]` rows uniformly distributed over a disc centred on the origin.
pub fn uniform_disc(n: usize, radius: f64, seed: u64) -> Vec<Vec<f64>> {
    let mut rng = Lcg::new(seed);
    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for _ in 0..n {
        let r = radius * rng.next_f64().sqrt();
        let theta = 2.0 * PI * rng.next_f64();
        x.push(r * theta.cos());
        y.push(r * theta.sin());
    }
    vec![x, y]
}

/// Speeds alternating between still (0) and moving (`speed`) in blocks.
pub fn stop_and_go_speed(n: usize, block: usize, speed: f64) -> Vec<f64> {
    (0..n)
        .map(|i| if (i / block) % 2 == 0 { speed } else { 0.0 })
        .collect()
}

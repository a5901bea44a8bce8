//! # VastuOccupancy
//!
//! Spatial occupancy maps for animal tracking data (place-cell and grid-cell
//! analysis).
//!
//! ## Overview
//!
//! Given timestamps, positions and instantaneous speeds, VastuOccupancy bins
//! the arena into a regular grid and reports how long the animal spent in
//! each bin:
//!
//! - **Spatial Accumulation**: 1D/2D histogram of position samples
//! - **Speed Filtering**: immobile samples do not count
//! - **Time Conversion**: frame counts scaled by the tracking frame duration
//! - **Masking**: unvisited bins flagged explicitly
//! - **Coverage**: visited fraction of reachable bins (square or circular arena)
//!
//! ## Quick Start
//!
//! ```rust
//! use vastu_occupancy::{OccupancyConfig, spatial_occupancy};
//!
//! let time: Vec<f64> = (0..4).map(|i| i as f64 * 0.02).collect();
//! let x = vec![10.0, 12.0, 55.0, 90.0];
//! let y = vec![10.0, 11.0, 40.0, 95.0];
//! let speed = vec![5.0, 5.0, 5.0, 5.0];
//!
//! let config = OccupancyConfig::new(100.0).with_limits(vec![0.0, 100.0, 0.0, 100.0]);
//! let result = spatial_occupancy(&time, &[x, y], &speed, &config).unwrap();
//!
//! assert_eq!(result.edges.bin_counts(), vec![40, 40]);
//! assert!(result.coverage > 0.0 && result.coverage <= 1.0);
//! ```
//!
//! ## Coordinate System
//!
//! Positions are passed row-per-axis: `[x]` or `[x, y]`. 2D maps are
//! image-style, rows along y and columns along x, with bin edges ordered
//! `[y_edges, x_edges]`. Circular arenas are assumed to be centred on the
//! coordinate origin.

#![warn(missing_docs)]

// Core types
pub mod core;

// Error types
pub mod error;

// Spatial accumulation (histogram engine)
pub mod grid;

// Occupancy maps and coverage
pub mod occupancy;

// Configuration loading
pub mod config;

// Re-export commonly used types
pub use crate::core::{ArenaShape, ArenaSize, AxisRange, BinEdges, GridShape, Histogram};

pub use error::{Error, Result};

pub use grid::{AccumulateConfig, MAX_BINS, UpperEdge, accumulate_spatial};

pub use occupancy::{MaskedMap, OccupancyMap, OccupancyStats, spatial_occupancy};

pub use config::{ConfigLoadError, OccupancyConfig};

//! Spatial accumulation: turning position samples into bin counts.
//!
//! This is the generic binning engine underneath the occupancy map. It knows
//! nothing about time or speed; it only counts how many samples fall into
//! each bin.
//!
//! ## Pipeline
//!
//! ```text
//!   arena_size / bin_width ──► bins per axis
//!   limits or data min/max ──► range per axis ──► linspace edges
//!                                                      │
//!   [x] or [x, y] samples ──► validity ──► bin index ──┴──► Histogram<u64>
//! ```
//!
//! ## Key Components
//!
//! - [`accumulate_spatial`]: Histogram 1D or 2D positions
//! - [`AccumulateConfig`]: Bin width, arena size, limits
//! - [`UpperEdge`]: Treatment of samples on the upper limit

mod accumulate;
mod config;

pub use accumulate::accumulate_spatial;
pub use config::{AccumulateConfig, MAX_BINS, UpperEdge};

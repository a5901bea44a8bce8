//! Occupancy maps: where the animal spent its time.
//!
//! Built on [`accumulate_spatial`](crate::grid::accumulate_spatial):
//!
//! 1. Drop samples with non-finite coordinates
//! 2. Keep samples faster than the speed cutoff
//! 3. Count samples per bin
//! 4. Convert counts to time using the frame duration
//! 5. Mask bins below the time threshold
//! 6. Measure coverage for the arena shape
//!
//! Smoothing is left to the caller.

mod coverage;
mod frame;
mod map;

pub use coverage::{circular_coverage, in_field_mask, rectangular_coverage};
pub use frame::infer_frame_duration;
pub use map::{MaskedMap, OccupancyMap, OccupancyStats, spatial_occupancy};

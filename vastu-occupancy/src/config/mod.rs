//! Configuration loading for VastuOccupancy.
//!
//! All options live in a single YAML document with sensible defaults. Only
//! `arena_size` is required, and its absence is reported when a map is
//! computed rather than when the file is read.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vastu_occupancy::config::OccupancyConfig;
//!
//! // Load from default path (configs/occupancy.yaml)
//! let config = OccupancyConfig::load_default()?;
//!
//! // Or build in code
//! let config = OccupancyConfig::new(100.0).with_bin_width(2.0);
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! arena_shape: circle     # square | circle | linear (and aliases)
//! arena_size: 100         # or [x_length, y_length]
//! bin_width: 2.5
//! speed_cutoff: 2.0       # ignore samples at or below 2 cm/s
//! limits: [-50, 50, -50, 50]
//! frame_duration: 0.02    # optional, otherwise inferred from timestamps
//! mask_threshold: 0.001
//! upper_edge: closed      # closed | open
//! debug: false
//! ```

pub(crate) mod defaults;
mod error;
mod occupancy;

pub use error::ConfigLoadError;
pub use occupancy::OccupancyConfig;

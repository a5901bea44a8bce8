//! Configuration types for spatial accumulation.

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::core::ArenaSize;
use crate::error::{Error, Result};

/// Upper bound on the total number of bins in a histogram (16.7M).
///
/// Far above any tracking arena at a sensible resolution; a config that
/// asks for more is rejected before anything is allocated.
pub const MAX_BINS: usize = 1 << 24;

/// How samples sitting exactly on the upper limit of an axis are treated.
///
/// Limits are documented as half-open (`min <= v < max`), but the histogram
/// range closes its last bin, so a sample at `max` lands in the final bin.
/// `Closed` keeps that behaviour; `Open` drops samples outside the half-open
/// limits before binning.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpperEdge {
    /// Final bin includes the upper limit
    #[default]
    Closed,
    /// Samples at or beyond the upper limit are discarded
    Open,
}

/// Spatial accumulation configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccumulateConfig {
    /// Bin edge length, in position units (bins are square in 2D)
    #[serde(default = "defaults::bin_width")]
    pub bin_width: f64,

    /// Arena dimensions; together with `bin_width` fixes the bin count
    pub arena_size: ArenaSize,

    /// `(x_min, x_max)` or `(x_min, x_max, y_min, y_max)`.
    /// If None, the range of the finite data on each axis is used.
    #[serde(default)]
    pub limits: Option<Vec<f64>>,

    /// Treatment of samples on the upper limit
    #[serde(default)]
    pub upper_edge: UpperEdge,
}

impl AccumulateConfig {
    /// Default bin width with the given arena size
    pub fn new(arena_size: impl Into<ArenaSize>) -> Self {
        Self {
            bin_width: defaults::bin_width(),
            arena_size: arena_size.into(),
            limits: None,
            upper_edge: UpperEdge::default(),
        }
    }

    /// Set the bin width
    pub fn with_bin_width(mut self, bin_width: f64) -> Self {
        self.bin_width = bin_width;
        self
    }

    /// Set explicit histogram limits
    pub fn with_limits(mut self, limits: impl Into<Vec<f64>>) -> Self {
        self.limits = Some(limits.into());
        self
    }

    /// Set the upper edge policy
    pub fn with_upper_edge(mut self, upper_edge: UpperEdge) -> Self {
        self.upper_edge = upper_edge;
        self
    }

    /// Number of bins per axis, `ceil(extent / bin_width)`, in x, y order.
    ///
    /// The arena need not be a multiple of the bin width. The total number
    /// of bins may not exceed [`MAX_BINS`].
    pub fn bin_counts(&self, dims: usize) -> Result<Vec<usize>> {
        if !self.bin_width.is_finite() || self.bin_width <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "bin_width must be finite and positive, got {}",
                self.bin_width
            )));
        }
        let extent = self.arena_size.extent(dims)?;

        let mut total = 1usize;
        let mut counts = Vec::with_capacity(extent.len());
        for length in extent {
            let n = (length / self.bin_width).ceil();
            total = if n <= MAX_BINS as f64 {
                total.checked_mul(n as usize)
            } else {
                None
            }
            .filter(|&t| t <= MAX_BINS)
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "bin_width {} over arena {:?} needs more than {} bins",
                    self.bin_width, self.arena_size, MAX_BINS
                ))
            })?;
            counts.push(n as usize);
        }
        Ok(counts)
    }
}

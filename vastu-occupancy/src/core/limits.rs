//! Histogram ranges per axis.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Closed interval `[min, max]` covered by one histogram axis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    /// Lower bound (inclusive)
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl AxisRange {
    /// Create a new range.
    #[inline]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range spanned by the finite values of `data`, or `None` if there are none.
    ///
    /// A zero-width range is widened by 0.5 on either side so it still has
    /// somewhere to put its bins.
    pub fn from_data<'a, I>(data: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a f64>,
    {
        let (min, max) = data
            .into_iter()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        if min > max {
            return None;
        }
        if min == max {
            return Some(Self::new(min - 0.5, max + 0.5));
        }
        Some(Self::new(min, max))
    }

    /// Width of the range.
    #[inline]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Half-open membership test, `min <= v < max`.
    #[inline]
    pub fn contains_half_open(&self, v: f64) -> bool {
        v >= self.min && v < self.max
    }

    /// Closed membership test, `min <= v <= max`.
    #[inline]
    pub fn contains_closed(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }

    /// Index of the bin holding `v` among `edges` (`bins + 1` values over
    /// this range), or `None` if `v` lies outside.
    ///
    /// Bins are half-open except the last, which also holds `max`.
    pub fn bin_index(&self, v: f64, edges: &[f64]) -> Option<usize> {
        if !self.contains_closed(v) {
            return None;
        }
        let bins = edges.len() - 1;
        if v == self.max {
            return Some(bins - 1);
        }

        let mut i = (((v - self.min) / self.width()) * bins as f64) as usize;
        i = i.min(bins - 1);
        // Rounding in the scaled index can land one bin off the edge array
        if v < edges[i] {
            i = i.saturating_sub(1);
        } else if i + 1 < bins && v >= edges[i + 1] {
            i += 1;
        }
        Some(i)
    }

    fn validate(&self) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(Error::InvalidLimits(format!(
                "bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(Error::InvalidLimits(format!(
                "min must be smaller than max, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Split a flat limits array into one range per axis.
///
/// 1D: `(x_min, x_max)`. 2D: `(x_min, x_max, y_min, y_max)`.
pub fn parse_limits(limits: &[f64], dims: usize) -> Result<Vec<AxisRange>> {
    let expected = 2 * dims;
    if limits.len() != expected {
        return Err(Error::MalformedLimits {
            dims,
            expected,
            actual: limits.len(),
        });
    }

    let ranges: Vec<AxisRange> = limits
        .chunks_exact(2)
        .map(|pair| AxisRange::new(pair[0], pair[1]))
        .collect();
    for range in &ranges {
        range.validate()?;
    }
    Ok(ranges)
}

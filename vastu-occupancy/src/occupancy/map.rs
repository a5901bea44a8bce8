//! Occupancy map: time spent in each bin of the arena.

use serde::{Deserialize, Serialize};

use super::coverage::{circular_coverage, in_field_mask, rectangular_coverage};
use super::frame::infer_frame_duration;
use crate::config::OccupancyConfig;
use crate::core::{ArenaShape, BinEdges, Histogram};
use crate::error::{Error, Result};
use crate::grid::accumulate_spatial;

/// Time per bin with a mask over bins that were never visited.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaskedMap {
    values: Histogram<f64>,
    mask: Histogram<bool>,
}

impl MaskedMap {
    /// Mask every bin whose value is below `threshold`.
    pub fn from_threshold(values: Histogram<f64>, threshold: f64) -> Self {
        let mask = values.map(|&t| t < threshold);
        Self { values, mask }
    }

    /// Raw values, including masked bins.
    pub fn values(&self) -> &Histogram<f64> {
        &self.values
    }

    /// True where the bin is masked (unvisited).
    pub fn mask(&self) -> &Histogram<bool> {
        &self.mask
    }

    /// Value at `index`, or `None` if out of range or masked.
    pub fn get(&self, index: &[usize]) -> Option<f64> {
        match self.mask.get(index) {
            Some(false) => self.values.get(index).copied(),
            _ => None,
        }
    }

    /// Number of unmasked bins.
    pub fn visited_bins(&self) -> usize {
        self.mask.iter().filter(|&&masked| !masked).count()
    }

    /// Sum over unmasked bins.
    pub fn total(&self) -> f64 {
        self.values
            .iter()
            .zip(self.mask.iter())
            .filter(|(_, masked)| !**masked)
            .map(|(t, _)| t)
            .sum()
    }
}

/// Bookkeeping from one occupancy computation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OccupancyStats {
    /// Samples supplied
    pub num_samples: usize,
    /// Samples with all coordinates finite
    pub valid_samples: usize,
    /// Valid samples faster than the speed cutoff
    pub moving_samples: usize,
    /// Samples that landed in a bin
    pub frames_included: u64,
    /// `frames_included / num_samples`
    pub retained_fraction: f64,
    /// Time covered by the map
    pub total_time: f64,
}

/// Result of [`spatial_occupancy`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OccupancyMap {
    /// Unsmoothed time per bin; unvisited bins masked
    pub map: MaskedMap,
    /// Fraction of reachable bins visited, in [0, 1]
    pub coverage: f64,
    /// Bin edges, `[x]` or `[y, x]`
    pub edges: BinEdges,
    /// Time per tracking frame used for the conversion
    pub frame_duration: f64,
    /// Sample bookkeeping
    pub stats: OccupancyStats,
}

/// Compute the time the animal spent in each bin of the arena.
///
/// # Arguments
/// * `time` - Timestamps, one per sample
/// * `position` - `[x]` or `[x, y]`, each row one coordinate per sample
/// * `speed` - Instantaneous speed per sample
/// * `config` - Arena and binning settings; `arena_size` is required
///
/// Samples with a non-finite coordinate are skipped. Samples at or below
/// `speed_cutoff` are ignored. Frame counts are converted to time with
/// `frame_duration`, or the smallest positive timestamp step if not set.
///
/// # Errors
/// - [`Error::LinearArenaUnsupported`] for linear arenas, before any other check
/// - [`Error::InvalidShape`] for wrong dimensionality or mismatched lengths
/// - [`Error::MissingConfig`] if `arena_size` is absent
/// - [`Error::InvalidParameter`] if no frame duration can be determined, or
///   for a non-finite `speed_cutoff`/`mask_threshold` or an oversized grid
pub fn spatial_occupancy<P: AsRef<[f64]>>(
    time: &[f64],
    position: &[P],
    speed: &[f64],
    config: &OccupancyConfig,
) -> Result<OccupancyMap> {
    if config.arena_shape == ArenaShape::Linear {
        return Err(Error::LinearArenaUnsupported);
    }

    let dims = position.len();
    if !(1..=2).contains(&dims) {
        return Err(Error::InvalidShape(format!(
            "positions array has the wrong number of dimensions ({})",
            dims
        )));
    }
    let axes: Vec<&[f64]> = position.iter().map(AsRef::as_ref).collect();
    let num_samples = axes[0].len();
    if axes.iter().any(|axis| axis.len() != num_samples) {
        return Err(Error::InvalidShape(
            "position rows have different numbers of samples".to_string(),
        ));
    }
    if speed.len() != num_samples {
        return Err(Error::InvalidShape(format!(
            "speed has {} samples but positions have {}",
            speed.len(),
            num_samples
        )));
    }
    if time.len() != num_samples {
        return Err(Error::InvalidShape(format!(
            "time has {} samples but positions have {}",
            time.len(),
            num_samples
        )));
    }

    let accumulate = config.to_accumulate_config()?;
    accumulate.bin_counts(dims)?;
    if config.arena_shape == ArenaShape::Circular && dims != 2 {
        return Err(Error::InvalidShape(
            "circular arenas need 2D positions".to_string(),
        ));
    }

    let frame_duration = match config.frame_duration {
        Some(dt) if dt.is_finite() && dt > 0.0 => dt,
        Some(dt) => {
            return Err(Error::InvalidParameter(format!(
                "frame_duration must be finite and positive, got {}",
                dt
            )));
        }
        None => infer_frame_duration(time).ok_or_else(|| {
            Error::InvalidParameter(
                "cannot infer frame duration: timestamps have no positive step".to_string(),
            )
        })?,
    };

    if config.debug {
        log::info!("Number of time stamps: {}", time.len());
        if let Some(last) = time.last() {
            log::info!("Maximum time stamp value: {:.2}", last);
        }
        log::info!("Time stamp delta: {}", frame_duration);
    }

    let mut valid_samples = 0usize;
    let mut moving: Vec<Vec<f64>> = vec![Vec::with_capacity(num_samples); dims];
    for (i, &s) in speed.iter().enumerate() {
        if !axes.iter().all(|axis| axis[i].is_finite()) {
            continue;
        }
        valid_samples += 1;
        if s > config.speed_cutoff {
            for (row, axis) in moving.iter_mut().zip(&axes) {
                row.push(axis[i]);
            }
        }
    }
    let moving_samples = moving[0].len();

    let (counts, edges) = accumulate_spatial(&moving, &accumulate)?;

    let frames_included = counts.total();
    let retained_fraction = if num_samples > 0 {
        frames_included as f64 / num_samples as f64
    } else {
        0.0
    };
    if config.debug {
        log::info!(
            "Frames included in histogram: {} ({:.3})",
            frames_included,
            retained_fraction
        );
    }

    let map = MaskedMap::from_threshold(
        counts.map(|&c| c as f64 * frame_duration),
        config.mask_threshold,
    );
    let total_time = map.values().sum();
    if config.debug {
        let span = time.last().copied().unwrap_or(0.0);
        let fraction = if span > 0.0 { total_time / span } else { 0.0 };
        log::info!(
            "Time length included in histogram: {:.2} ({:.3})",
            total_time,
            fraction
        );
    }

    let coverage = match config.arena_shape {
        ArenaShape::Rectangular => rectangular_coverage(&counts),
        ArenaShape::Circular => {
            let radius = accumulate.arena_size.radius();
            let in_field = in_field_mask(&edges, accumulate.bin_width, radius).ok_or_else(|| {
                Error::InvalidShape("circular arenas need 2D positions".to_string())
            })?;
            circular_coverage(&counts, &in_field)
        }
        ArenaShape::Linear => return Err(Error::LinearArenaUnsupported),
    };

    log::debug!(
        "Occupancy: {}/{} moving samples binned, coverage {:.3}",
        frames_included,
        moving_samples,
        coverage
    );

    Ok(OccupancyMap {
        map,
        coverage,
        edges,
        frame_duration,
        stats: OccupancyStats {
            num_samples,
            valid_samples,
            moving_samples,
            frames_included,
            retained_fraction,
            total_time,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArenaSize, GridShape};
    use approx::assert_relative_eq;

    fn unit_time(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn test_masked_map() {
        let mut values: Histogram<f64> = Histogram::zeros(GridShape::Linear(3));
        *values.get_mut(&[0]).unwrap() = 0.5;
        *values.get_mut(&[2]).unwrap() = 0.0005;

        let map = MaskedMap::from_threshold(values, 0.001);
        assert_eq!(map.mask().values(), &[false, true, true]);
        assert_eq!(map.get(&[0]), Some(0.5));
        assert_eq!(map.get(&[2]), None);
        assert_eq!(map.visited_bins(), 1);
        assert_relative_eq!(map.total(), 0.5);
    }

    #[test]
    fn test_linear_rejected_first() {
        let config = OccupancyConfig::default().with_shape(ArenaShape::Linear);
        let empty: Vec<Vec<f64>> = Vec::new();
        assert_eq!(
            spatial_occupancy(&[], &empty, &[], &config).unwrap_err(),
            Error::LinearArenaUnsupported
        );
    }

    #[test]
    fn test_speed_filter_is_strict() {
        let config = OccupancyConfig::new(4.0)
            .with_bin_width(1.0)
            .with_limits(vec![0.0, 4.0, 0.0, 4.0])
            .with_speed_cutoff(1.0);
        let position = vec![vec![0.5, 1.5, 2.5], vec![0.5, 1.5, 2.5]];
        let speed = [0.5, 1.0, 1.5];

        let result = spatial_occupancy(&unit_time(3), &position, &speed, &config).unwrap();

        assert_eq!(result.stats.moving_samples, 1);
        assert_eq!(result.stats.frames_included, 1);
        assert_eq!(result.map.get(&[2, 2]), Some(1.0));
        assert_eq!(result.map.get(&[1, 1]), None);
    }

    #[test]
    fn test_non_finite_positions_skipped() {
        let config = OccupancyConfig::new(4.0)
            .with_bin_width(1.0)
            .with_limits(vec![0.0, 4.0, 0.0, 4.0]);
        let position = vec![vec![0.5, f64::NAN, 2.5], vec![0.5, 1.5, f64::INFINITY]];
        let speed = [1.0; 3];

        let result = spatial_occupancy(&unit_time(3), &position, &speed, &config).unwrap();

        assert_eq!(result.stats.valid_samples, 1);
        assert_eq!(result.stats.frames_included, 1);
    }

    #[test]
    fn test_frame_duration_override() {
        let config = OccupancyConfig::new(4.0)
            .with_bin_width(1.0)
            .with_limits(vec![0.0, 4.0])
            .with_frame_duration(0.02);
        let position = vec![vec![0.5, 0.6, 3.5]];

        let result = spatial_occupancy(&unit_time(3), &position, &[1.0; 3], &config).unwrap();

        assert_eq!(result.frame_duration, 0.02);
        assert_relative_eq!(result.map.get(&[0]).unwrap(), 0.04, epsilon = 1e-12);
        assert_relative_eq!(result.stats.total_time, 0.06, epsilon = 1e-12);
        assert_relative_eq!(result.coverage, 0.5);
    }

    #[test]
    fn test_bad_frame_duration() {
        let config = OccupancyConfig::new(4.0).with_frame_duration(0.0);
        let position = vec![vec![0.5, 1.0]];
        assert!(matches!(
            spatial_occupancy(&unit_time(2), &position, &[1.0; 2], &config),
            Err(Error::InvalidParameter(_))
        ));

        let config = OccupancyConfig::new(4.0);
        assert!(matches!(
            spatial_occupancy(&[3.0, 3.0], &position, &[1.0; 2], &config),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_time_length_mismatch() {
        let config = OccupancyConfig::new(4.0);
        let position = vec![vec![0.5, 1.0, 2.0]];
        assert!(matches!(
            spatial_occupancy(&unit_time(2), &position, &[1.0; 3], &config),
            Err(Error::InvalidShape(_))
        ));
    }

    #[test]
    fn test_circular_requires_2d() {
        let config = OccupancyConfig::new(ArenaSize::Scalar(4.0)).with_shape(ArenaShape::Circular);
        let position = vec![vec![0.5, 1.0]];
        assert!(matches!(
            spatial_occupancy(&unit_time(2), &position, &[1.0; 2], &config),
            Err(Error::InvalidShape(_))
        ));
    }
}

//! Histogram accumulation of 1D/2D position samples.

use super::config::{AccumulateConfig, UpperEdge};
use crate::core::{AxisRange, BinEdges, GridShape, Histogram, linspace_edges, parse_limits};
use crate::error::{Error, Result};

/// Accumulate position samples into a binned histogram.
///
/// `position` is row-per-axis: `[x]` or `[x, y]`, every row with the same
/// number of samples. Samples with a non-finite coordinate are skipped.
///
/// The number of bins per axis comes from `arena_size / bin_width`; the range
/// comes from `limits` or, without limits, from the finite data. The two are
/// independent: explicit limits narrower than the arena produce narrower bins,
/// not fewer of them.
///
/// # Returns
///
/// `(counts, edges)`. In 2D, counts are stored rows = y, columns = x, and the
/// edges are `[y_edges, x_edges]`.
pub fn accumulate_spatial<P: AsRef<[f64]>>(
    position: &[P],
    config: &AccumulateConfig,
) -> Result<(Histogram<u64>, BinEdges)> {
    let dims = position.len();
    if !(1..=2).contains(&dims) {
        return Err(Error::InvalidShape(format!(
            "positions must have 1 or 2 dimensions, got {}",
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

    let bins = config.bin_counts(dims)?;

    let ranges = match &config.limits {
        Some(limits) => parse_limits(limits, dims)?,
        None => axes
            .iter()
            .map(|axis| AxisRange::from_data(axis.iter()).ok_or(Error::NoObservations))
            .collect::<Result<Vec<_>>>()?,
    };

    let mut edges: Vec<Vec<f64>> = ranges
        .iter()
        .zip(&bins)
        .map(|(range, &n)| linspace_edges(range.min, range.max, n))
        .collect();

    let shape = match bins[..] {
        [n] => GridShape::Linear(n),
        [cols, rows] => GridShape::Planar { rows, cols },
        _ => unreachable!("dimensionality checked above"),
    };
    let mut hist: Histogram<u64> = Histogram::zeros(shape);

    let mut outside_half_open = 0usize;
    let mut index = vec![0usize; dims];

    'samples: for i in 0..num_samples {
        if axes.iter().any(|axis| !axis[i].is_finite()) {
            continue;
        }

        let in_range = ranges
            .iter()
            .zip(&axes)
            .all(|(range, axis)| range.contains_half_open(axis[i]));
        if !in_range {
            outside_half_open += 1;
            if config.upper_edge == UpperEdge::Open {
                continue;
            }
        }

        for (d, ((range, axis), axis_edges)) in ranges.iter().zip(&axes).zip(&edges).enumerate() {
            match range.bin_index(axis[i], axis_edges) {
                Some(bin) => index[d] = bin,
                None => continue 'samples,
            }
        }

        // Storage is image-style: row = y bin, column = x bin
        index.reverse();
        if let Some(count) = hist.get_mut(&index) {
            *count += 1;
        }
    }

    if outside_half_open > 0 {
        log::debug!(
            "{} of {} samples fall outside the half-open limits ({:?} upper edge)",
            outside_half_open,
            num_samples,
            config.upper_edge
        );
    }

    edges.reverse();

    Ok((hist, BinEdges::new(edges)))
}

//! Coverage: the fraction of reachable bins that were visited.

use crate::core::{BinEdges, GridShape, Histogram};

/// Visited fraction of every bin in the grid.
///
/// Used for square and rectangular arenas, where all bins are reachable.
pub fn rectangular_coverage(counts: &Histogram<u64>) -> f64 {
    if counts.is_empty() {
        return 0.0;
    }
    counts.count_nonzero() as f64 / counts.len() as f64
}

/// Bins whose centre lies within `radius` of the coordinate origin.
///
/// Centres are the left edge of each bin plus half of `bin_width`. Distance
/// is measured from `(0, 0)`, so the arena is assumed to be centred there.
/// Returns `None` unless `edges` describes a 2D grid.
pub fn in_field_mask(edges: &BinEdges, bin_width: f64, radius: f64) -> Option<Histogram<bool>> {
    let (y_edges, x_edges) = match edges.axes() {
        [y, x] if !y.is_empty() && !x.is_empty() => (y.as_slice(), x.as_slice()),
        _ => return None,
    };

    let centres = |axis: &[f64]| -> Vec<f64> {
        axis[..axis.len() - 1]
            .iter()
            .map(|edge| edge + bin_width / 2.0)
            .collect()
    };
    let y_centres = centres(y_edges);
    let x_centres = centres(x_edges);

    let mut mask = Histogram::zeros(GridShape::Planar {
        rows: y_centres.len(),
        cols: x_centres.len(),
    });
    for (row, &y) in y_centres.iter().enumerate() {
        for (col, &x) in x_centres.iter().enumerate() {
            if let Some(cell) = mask.get_mut(&[row, col]) {
                *cell = x.hypot(y) <= radius;
            }
        }
    }
    Some(mask)
}

/// Visited bins over bins inside the inscribed circle, clamped to 1.
///
/// Visited bins outside the circle still count towards the numerator, and a
/// bin straddling the boundary may be visited without its centre being
/// in-field, so the raw ratio can exceed 1.
pub fn circular_coverage(counts: &Histogram<u64>, in_field: &Histogram<bool>) -> f64 {
    let reachable = in_field.iter().filter(|&&inside| inside).count();
    if reachable == 0 {
        log::warn!("No bin centre lies inside the circular arena; coverage set to 0");
        return 0.0;
    }
    (counts.count_nonzero() as f64 / reachable as f64).min(1.0)
}

//! Default value functions for serde deserialization.

/// Bin edge length (cm)
pub fn bin_width() -> f64 {
    2.5
}

/// Samples must move faster than this to count
pub fn speed_cutoff() -> f64 {
    0.0
}

/// Bins with less time than this are treated as unvisited
pub fn mask_threshold() -> f64 {
    0.001
}

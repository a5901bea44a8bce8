//! Frame duration inference from timestamps.

/// Smallest strictly positive step between consecutive timestamps.
///
/// Taken as the nominal sampling period of the tracking system, so no frame
/// rate needs to be supplied. A single unusually short gap (jitter) shortens
/// it for the whole recording. Returns `None` if no positive step exists.
pub fn infer_frame_duration(time: &[f64]) -> Option<f64> {
    time.windows(2)
        .map(|w| w[1] - w[0])
        .filter(|dt| dt.is_finite() && *dt > 0.0)
        .reduce(f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uniform_steps() {
        let time: Vec<f64> = (0..100).map(|i| i as f64 * 0.02).collect();
        assert_relative_eq!(infer_frame_duration(&time).unwrap(), 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_ignores_repeats_and_reversals() {
        let time = [0.0, 0.04, 0.04, 0.08, 0.05, 0.09];
        assert_relative_eq!(infer_frame_duration(&time).unwrap(), 0.04, epsilon = 1e-12);
    }

    #[test]
    fn test_short_gap_wins() {
        let time = [0.0, 1.0, 2.0, 2.1, 3.0];
        assert_relative_eq!(infer_frame_duration(&time).unwrap(), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_no_positive_step() {
        assert_eq!(infer_frame_duration(&[]), None);
        assert_eq!(infer_frame_duration(&[5.0]), None);
        assert_eq!(infer_frame_duration(&[1.0, 1.0, 0.5]), None);
    }
}

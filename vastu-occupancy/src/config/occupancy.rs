//! Occupancy map configuration and YAML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::ConfigLoadError;
use crate::core::{ArenaShape, ArenaSize};
use crate::error::{Error, Result};
use crate::grid::{AccumulateConfig, UpperEdge};

/// Default config file location
const DEFAULT_CONFIG_PATH: &str = "configs/occupancy.yaml";

/// Configuration for [`spatial_occupancy`](crate::spatial_occupancy)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OccupancyConfig {
    /// Arena shape tag (square, circle, linear and their aliases)
    #[serde(default)]
    pub arena_shape: ArenaShape,

    /// Arena dimensions. Required: there is no sensible default.
    #[serde(default)]
    pub arena_size: Option<ArenaSize>,

    /// Bin edge length in position units
    #[serde(default = "defaults::bin_width")]
    pub bin_width: f64,

    /// Samples with speed at or below this are ignored
    #[serde(default = "defaults::speed_cutoff")]
    pub speed_cutoff: f64,

    /// `(x_min, x_max)` or `(x_min, x_max, y_min, y_max)`
    #[serde(default)]
    pub limits: Option<Vec<f64>>,

    /// Log diagnostics at info level
    #[serde(default)]
    pub debug: bool,

    /// Time per tracking frame. If None, inferred from the timestamps.
    #[serde(default)]
    pub frame_duration: Option<f64>,

    /// Bins with less time than this are masked as unvisited
    #[serde(default = "defaults::mask_threshold")]
    pub mask_threshold: f64,

    /// Treatment of samples on the upper histogram limit
    #[serde(default)]
    pub upper_edge: UpperEdge,
}

impl Default for OccupancyConfig {
    fn default() -> Self {
        Self {
            arena_shape: ArenaShape::default(),
            arena_size: None,
            bin_width: defaults::bin_width(),
            speed_cutoff: defaults::speed_cutoff(),
            limits: None,
            debug: false,
            frame_duration: None,
            mask_threshold: defaults::mask_threshold(),
            upper_edge: UpperEdge::default(),
        }
    }
}

impl OccupancyConfig {
    /// Square arena of the given size with default settings
    pub fn new(arena_size: impl Into<ArenaSize>) -> Self {
        Self {
            arena_size: Some(arena_size.into()),
            ..Default::default()
        }
    }

    /// Set the arena shape
    pub fn with_shape(mut self, arena_shape: ArenaShape) -> Self {
        self.arena_shape = arena_shape;
        self
    }

    /// Set the bin width
    pub fn with_bin_width(mut self, bin_width: f64) -> Self {
        self.bin_width = bin_width;
        self
    }

    /// Set the speed cutoff
    pub fn with_speed_cutoff(mut self, speed_cutoff: f64) -> Self {
        self.speed_cutoff = speed_cutoff;
        self
    }

    /// Set explicit histogram limits
    pub fn with_limits(mut self, limits: impl Into<Vec<f64>>) -> Self {
        self.limits = Some(limits.into());
        self
    }

    /// Set an explicit frame duration
    pub fn with_frame_duration(mut self, frame_duration: f64) -> Self {
        self.frame_duration = Some(frame_duration);
        self
    }

    /// Set the upper edge policy
    pub fn with_upper_edge(mut self, upper_edge: UpperEdge) -> Self {
        self.upper_edge = upper_edge;
        self
    }

    /// Enable or disable diagnostic logging
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/occupancy.yaml)
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_CONFIG_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Arena size, or a missing-configuration error
    pub fn require_arena_size(&self) -> Result<ArenaSize> {
        self.arena_size.ok_or(Error::MissingConfig("arena_size"))
    }

    /// Convert to the accumulator configuration.
    ///
    /// Also rejects a non-finite `speed_cutoff` or `mask_threshold`, which
    /// would otherwise filter out every sample or mask nothing.
    pub fn to_accumulate_config(&self) -> Result<AccumulateConfig> {
        if self.speed_cutoff.is_nan() {
            return Err(Error::InvalidParameter(
                "speed_cutoff must be a number, got NaN".to_string(),
            ));
        }
        if !self.mask_threshold.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "mask_threshold must be finite, got {}",
                self.mask_threshold
            )));
        }
        Ok(AccumulateConfig {
            bin_width: self.bin_width,
            arena_size: self.require_arena_size()?,
            limits: self.limits.clone(),
            upper_edge: self.upper_edge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OccupancyConfig::default();
        assert_eq!(config.arena_shape, ArenaShape::Rectangular);
        assert_eq!(config.bin_width, 2.5);
        assert_eq!(config.speed_cutoff, 0.0);
        assert_eq!(config.mask_threshold, 0.001);
        assert!(config.arena_size.is_none());
        assert!(!config.debug);
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
arena_shape: Circular
arena_size: 80
bin_width: 4.0
limits: [-40, 40, -40, 40]
debug: true
"#;
        let config = OccupancyConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.arena_shape, ArenaShape::Circular);
        assert_eq!(config.arena_size, Some(ArenaSize::Scalar(80.0)));
        assert_eq!(config.bin_width, 4.0);
        assert_eq!(config.limits, Some(vec![-40.0, 40.0, -40.0, 40.0]));
        assert_eq!(config.speed_cutoff, 0.0);
        assert!(config.debug);
    }

    #[test]
    fn test_from_yaml_pair_size() {
        let config = OccupancyConfig::from_yaml("arena_size: [100.0, 50.0]\nupper_edge: open\n")
            .unwrap();
        assert_eq!(config.arena_size, Some(ArenaSize::Pair(100.0, 50.0)));
        assert_eq!(config.upper_edge, UpperEdge::Open);
    }

    #[test]
    fn test_from_yaml_unknown_shape() {
        let err = OccupancyConfig::from_yaml("arena_shape: hexagon\narena_size: 10\n").unwrap_err();
        assert!(matches!(err, ConfigLoadError::Parse(_)));
        assert!(err.to_string().contains("hexagon"));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = OccupancyConfig::new((60.0, 30.0))
            .with_shape(ArenaShape::Circular)
            .with_frame_duration(0.02);
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = OccupancyConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_missing_arena_size() {
        let config = OccupancyConfig::default();
        assert_eq!(
            config.to_accumulate_config().unwrap_err(),
            Error::MissingConfig("arena_size")
        );
    }

    #[test]
    fn test_non_finite_thresholds_rejected() {
        let config = OccupancyConfig::new(100.0).with_speed_cutoff(f64::NAN);
        assert!(matches!(
            config.to_accumulate_config(),
            Err(Error::InvalidParameter(_))
        ));

        for threshold in [f64::NAN, f64::INFINITY] {
            let config = OccupancyConfig {
                mask_threshold: threshold,
                ..OccupancyConfig::new(100.0)
            };
            assert!(matches!(
                config.to_accumulate_config(),
                Err(Error::InvalidParameter(_))
            ));
        }

        // A negative cutoff keeps stationary samples
        let config = OccupancyConfig::new(100.0).with_speed_cutoff(-1.0);
        assert!(config.to_accumulate_config().is_ok());
    }

    #[test]
    fn test_shipped_config_parses() {
        let yaml = include_str!("../../configs/occupancy.yaml");
        let config = OccupancyConfig::from_yaml(yaml).unwrap();
        assert!(config.arena_size.is_none());
        assert_eq!(config, OccupancyConfig::default());
    }

    #[test]
    fn test_load_default() {
        // Tests run from the crate root, where configs/occupancy.yaml lives
        let config = OccupancyConfig::load_default().unwrap();
        assert!(config.arena_size.is_none());
        assert_eq!(config.bin_width, defaults::bin_width());
        assert_eq!(
            config.to_accumulate_config().unwrap_err(),
            Error::MissingConfig("arena_size")
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = OccupancyConfig::load(Path::new("does/not/exist.yaml")).unwrap_err();
        assert!(matches!(err, ConfigLoadError::Io { .. }));
    }
}

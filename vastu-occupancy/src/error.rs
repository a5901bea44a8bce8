//! Error types for VastuOccupancy

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// VastuOccupancy error types
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// Position, speed or time arrays have the wrong rank or length
    #[error("Invalid shape: {0}")]
    InvalidShape(String),

    /// A required configuration value was not provided
    #[error("Missing configuration: '{0}' must be provided")]
    MissingConfig(&'static str),

    /// Linear tracks are recognised but not supported
    #[error("Spatial occupancy does not currently support linear arenas")]
    LinearArenaUnsupported,

    /// Arena shape tag outside the known vocabulary
    #[error("Arena shape '{0}' not understood")]
    UnknownArenaShape(String),

    /// Limits with the wrong number of elements for the dimensionality
    #[error("A {dims}D map needs a {expected}-element 'limits' value, got {actual} elements")]
    MalformedLimits {
        /// Dimensionality of the positions
        dims: usize,
        /// Number of limit values required
        expected: usize,
        /// Number of limit values provided
        actual: usize,
    },

    /// Limits with non-finite or inverted bounds
    #[error("Invalid limits: {0}")]
    InvalidLimits(String),

    /// Numeric parameter outside its valid domain
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// No valid sample to derive automatic limits from
    #[error("No valid observations to derive histogram limits from")]
    NoObservations,
}

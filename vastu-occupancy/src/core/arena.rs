//! Arena geometry: shape vocabulary and physical size.
//!
//! An arena is the enclosure in which position tracking takes place. The
//! shape decides how coverage is measured; the size decides how many bins
//! the grid has along each axis.
//!
//! ```rust
//! use vastu_occupancy::core::{ArenaShape, ArenaSize};
//!
//! let shape: ArenaShape = "Circ".parse().unwrap();
//! assert_eq!(shape, ArenaShape::Circular);
//!
//! let size = ArenaSize::Scalar(100.0);
//! assert_eq!(size.extent(2).unwrap(), vec![100.0, 100.0]);
//! assert_eq!(size.radius(), 50.0);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

const SQUARE_TAGS: &[&str] = &["square", "rectangle", "rect", "rectangular", "s", "r"];
const CIRCLE_TAGS: &[&str] = &["circle", "circular", "circ", "c"];
const LINEAR_TAGS: &[&str] = &["linear", "line", "l"];

/// Arena shape.
///
/// Square and rectangular arenas are equivalent; the aspect ratio comes from
/// [`ArenaSize`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ArenaShape {
    /// Square or rectangular box. Every bin is reachable.
    #[default]
    Rectangular,
    /// Circular arena. Only bins inside the inscribed circle are reachable.
    Circular,
    /// Linear track (not supported by the occupancy mapper).
    Linear,
}

impl ArenaShape {
    /// Canonical tag for this shape.
    pub fn as_str(&self) -> &'static str {
        match self {
            ArenaShape::Rectangular => "square",
            ArenaShape::Circular => "circle",
            ArenaShape::Linear => "linear",
        }
    }
}

impl FromStr for ArenaShape {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim().to_lowercase();
        if SQUARE_TAGS.contains(&tag.as_str()) {
            Ok(ArenaShape::Rectangular)
        } else if CIRCLE_TAGS.contains(&tag.as_str()) {
            Ok(ArenaShape::Circular)
        } else if LINEAR_TAGS.contains(&tag.as_str()) {
            Ok(ArenaShape::Linear)
        } else {
            Err(Error::UnknownArenaShape(s.to_string()))
        }
    }
}

impl TryFrom<String> for ArenaShape {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ArenaShape> for String {
    fn from(shape: ArenaShape) -> Self {
        shape.as_str().to_string()
    }
}

impl fmt::Display for ArenaShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Physical arena size, in the same length units as the positions.
///
/// - Linear track: length
/// - Circular arena: diameter
/// - Square arena: side length, or `(side, side)`
/// - Rectangle: `(x_length, y_length)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArenaSize {
    /// Single length, used for every axis.
    Scalar(f64),
    /// Separate x and y lengths.
    Pair(f64, f64),
}

impl ArenaSize {
    /// Normalise the size into one extent per axis.
    ///
    /// A scalar is repeated for 2D data. A pair is only meaningful for 2D data.
    pub fn extent(&self, dims: usize) -> Result<Vec<f64>> {
        let extent = match (dims, *self) {
            (1, ArenaSize::Scalar(length)) => vec![length],
            (1, ArenaSize::Pair(..)) => {
                return Err(Error::InvalidShape(
                    "arena_size has 2 dimensions but positions are 1D".to_string(),
                ));
            }
            (2, ArenaSize::Scalar(length)) => vec![length, length],
            (2, ArenaSize::Pair(x, y)) => vec![x, y],
            (dims, _) => {
                return Err(Error::InvalidShape(format!(
                    "positions must have 1 or 2 dimensions, got {}",
                    dims
                )));
            }
        };

        if let Some(bad) = extent.iter().find(|l| !l.is_finite() || **l <= 0.0) {
            return Err(Error::InvalidParameter(format!(
                "arena_size must be finite and positive, got {}",
                bad
            )));
        }

        Ok(extent)
    }

    /// Radius of a circular arena.
    ///
    /// For a pair only the first length is used.
    pub fn radius(&self) -> f64 {
        match *self {
            ArenaSize::Scalar(diameter) => diameter / 2.0,
            ArenaSize::Pair(diameter, _) => diameter / 2.0,
        }
    }
}

impl From<f64> for ArenaSize {
    fn from(length: f64) -> Self {
        ArenaSize::Scalar(length)
    }
}

impl From<(f64, f64)> for ArenaSize {
    fn from((x, y): (f64, f64)) -> Self {
        ArenaSize::Pair(x, y)
    }
}

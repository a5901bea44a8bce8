//! Core types for the VastuOccupancy library.
//!
//! ## Type Categories
//!
//! ### Arena
//! - [`ArenaShape`]: Square/rectangular, circular or linear enclosure
//! - [`ArenaSize`]: Side length, diameter or `(x, y)` lengths
//!
//! ### Binning
//! - [`AxisRange`]: Histogram range on one axis
//! - [`GridShape`]: 1D or 2D bin grid dimensions
//! - [`Histogram`]: Dense row-major bin values
//! - [`BinEdges`]: Bin boundaries per axis
//!
//! ## Axis Order
//!
//! Positions are passed row-per-axis (`[x]` or `[x, y]`). 2D histograms are
//! stored image-style: rows along y, columns along x, and [`BinEdges`] lists
//! the y edges first.

mod arena;
mod histogram;
mod limits;

pub use arena::{ArenaShape, ArenaSize};
pub use histogram::{BinEdges, GridShape, Histogram, linspace_edges};
pub use limits::{AxisRange, parse_limits};

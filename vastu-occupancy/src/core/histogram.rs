//! Dense 1D/2D histogram storage and bin edges.
//!
//! Values are stored row-major. A 2D histogram follows the image convention:
//! rows run along y, columns along x.

use serde::{Deserialize, Serialize};

/// Shape of a 1D or 2D bin grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridShape {
    /// 1D grid with `n` bins
    Linear(usize),
    /// 2D grid, rows = y bins, cols = x bins
    Planar {
        /// Number of y bins
        rows: usize,
        /// Number of x bins
        cols: usize,
    },
}

impl GridShape {
    /// Number of axes (1 or 2).
    pub fn dims(&self) -> usize {
        match self {
            GridShape::Linear(_) => 1,
            GridShape::Planar { .. } => 2,
        }
    }

    /// Total number of bins.
    pub fn len(&self) -> usize {
        match *self {
            GridShape::Linear(n) => n,
            GridShape::Planar { rows, cols } => rows * cols,
        }
    }

    /// True if the grid has no bins.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bin counts per axis, in storage order (`[rows, cols]` for 2D).
    pub fn to_vec(&self) -> Vec<usize> {
        match *self {
            GridShape::Linear(n) => vec![n],
            GridShape::Planar { rows, cols } => vec![rows, cols],
        }
    }

    /// Flat offset of a multi-dimensional index.
    fn offset(&self, index: &[usize]) -> Option<usize> {
        match (*self, index) {
            (GridShape::Linear(n), [i]) if *i < n => Some(*i),
            (GridShape::Planar { rows, cols }, [r, c]) if *r < rows && *c < cols => {
                Some(r * cols + c)
            }
            _ => None,
        }
    }
}

/// Dense histogram over a [`GridShape`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Histogram<T> {
    shape: GridShape,
    values: Vec<T>,
}

impl<T: Clone + Default> Histogram<T> {
    /// Histogram with every bin set to `T::default()`.
    pub fn zeros(shape: GridShape) -> Self {
        Self {
            shape,
            values: vec![T::default(); shape.len()],
        }
    }
}

impl<T> Histogram<T> {
    /// Grid shape.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Row-major bin values.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Consume the histogram and return its row-major values.
    pub fn into_values(self) -> Vec<T> {
        self.values
    }

    /// Number of bins.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the histogram has no bins.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at `[i]` (1D) or `[row, col]` (2D).
    pub fn get(&self, index: &[usize]) -> Option<&T> {
        self.shape.offset(index).map(|i| &self.values[i])
    }

    /// Mutable value at `[i]` (1D) or `[row, col]` (2D).
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut T> {
        self.shape.offset(index).map(|i| &mut self.values[i])
    }

    /// Iterate over bin values in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// Apply `f` to every bin, keeping the shape.
    pub fn map<U, F>(&self, f: F) -> Histogram<U>
    where
        F: FnMut(&T) -> U,
    {
        Histogram {
            shape: self.shape,
            values: self.values.iter().map(f).collect(),
        }
    }
}

impl Histogram<u64> {
    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }

    /// Number of bins with a non-zero count.
    pub fn count_nonzero(&self) -> usize {
        self.values.iter().filter(|&&c| c > 0).count()
    }
}

impl Histogram<f64> {
    /// Sum of all bin values.
    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }
}

/// Bin edges per axis, in the same axis order as the histogram.
///
/// 1D: `[x_edges]`. 2D: `[y_edges, x_edges]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BinEdges {
    axes: Vec<Vec<f64>>,
}

impl BinEdges {
    /// Wrap per-axis edge arrays.
    pub fn new(axes: Vec<Vec<f64>>) -> Self {
        Self { axes }
    }

    /// Number of axes.
    pub fn dims(&self) -> usize {
        self.axes.len()
    }

    /// All edge arrays.
    pub fn axes(&self) -> &[Vec<f64>] {
        &self.axes
    }

    /// Edge array for one axis.
    pub fn axis(&self, i: usize) -> Option<&[f64]> {
        self.axes.get(i).map(Vec::as_slice)
    }

    /// Number of bins on each axis.
    pub fn bin_counts(&self) -> Vec<usize> {
        self.axes.iter().map(|e| e.len().saturating_sub(1)).collect()
    }
}

/// `n + 1` evenly spaced edges from `min` to `max` inclusive.
pub fn linspace_edges(min: f64, max: f64, n: usize) -> Vec<f64> {
    let step = (max - min) / n as f64;
    (0..=n)
        .map(|i| if i == n { max } else { min + i as f64 * step })
        .collect()
}

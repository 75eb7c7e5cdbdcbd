mod reader;
mod scaler;
mod split;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use crate::{FitErr, Result};

pub use scaler::MinMax;

/// An immutable table of `m` examples with `n` numeric features each and one label per example.
///
/// Any nonzero label is treated as the positive class.
#[derive(Debug, Clone)]
pub struct Dataset {
    x: Array2<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// Creates a new `Dataset` from a `m x n` feature matrix and `m` labels.
    ///
    /// # Errors
    /// `SizeMismatch` if the amount of rows and labels differ, `EmptyDataset` if there are no
    /// examples or no features.
    pub fn new(x: Array2<f64>, y: Array1<f64>) -> Result<Self> {
        if x.nrows() != y.len() {
            return Err(FitErr::SizeMismatch {
                a: "features",
                b: "labels",
                got: y.len(),
                expected: x.nrows(),
            });
        }

        if x.nrows() == 0 || x.ncols() == 0 {
            return Err(FitErr::EmptyDataset);
        }

        Ok(Self { x, y })
    }

    /// Creates a new `Dataset` from parallel tables of rows and labels.
    ///
    /// # Errors
    /// `RaggedRow` if a row's length differs from the first one, plus everything `new` checks.
    pub fn from_rows(rows: &[Vec<f64>], y: Vec<f64>) -> Result<Self> {
        let n = rows.first().map_or(0, Vec::len);

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(FitErr::RaggedRow {
                row,
                got: r.len(),
                expected: n,
            });
        }

        let x = Array2::from_shape_fn((rows.len(), n), |(i, j)| rows[i][j]);
        Self::new(x, Array1::from(y))
    }

    /// Creates a new `Dataset` from a feature matrix and a label matrix that must have exactly
    /// one column.
    ///
    /// # Errors
    /// `NotSingleColumn` if `y` has more or less than one column, plus everything `new` checks.
    pub fn from_columns(x: Array2<f64>, y: Array2<f64>) -> Result<Self> {
        if y.ncols() != 1 {
            return Err(FitErr::NotSingleColumn { got: y.ncols() });
        }

        let y = y.column(0).to_owned();
        Self::new(x, y)
    }

    /// The amount of examples, `m`.
    pub fn len(&self) -> usize {
        self.y.len()
    }

    /// Always false, a `Dataset` can't be built without examples.
    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// The amount of features per example, `n`.
    pub fn n_features(&self) -> usize {
        self.x.ncols()
    }

    pub fn x(&self) -> ArrayView2<'_, f64> {
        self.x.view()
    }

    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }

    /// Counts the examples whose label is nonzero.
    pub fn positives(&self) -> usize {
        self.y.iter().filter(|&&y| y != 0.).count()
    }

    fn select(&self, idx: &[usize]) -> Self {
        Self {
            x: self.x.select(Axis(0), idx),
            y: self.y.select(Axis(0), idx),
        }
    }
}

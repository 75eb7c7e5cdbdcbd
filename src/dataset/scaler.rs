use ndarray::{Array1, Array2, ArrayView2, Axis};

use super::Dataset;
use crate::{FitErr, Result};

/// Min-max feature scaler, maps every feature column fitted on into `[0, 1]`.
///
/// Constant columns have no range and are mapped to `0`.
#[derive(Debug, Clone)]
pub struct MinMax {
    min: Array1<f64>,
    range: Array1<f64>,
}

impl MinMax {
    /// Learns the per column minimum and range of `dataset`.
    pub fn fit(dataset: &Dataset) -> Self {
        let x = dataset.x();
        let min = x.fold_axis(Axis(0), f64::INFINITY, |&a, &b| a.min(b));
        let max = x.fold_axis(Axis(0), f64::NEG_INFINITY, |&a, &b| a.max(b));
        let range = (&max - &min).mapv(|r| if r > 0. { r } else { 1. });

        Self { min, range }
    }

    /// Scales a feature matrix with the fitted statistics.
    ///
    /// # Errors
    /// `SizeMismatch` if `x` doesn't have as many columns as the fitted dataset.
    pub fn transform_x(&self, x: ArrayView2<f64>) -> Result<Array2<f64>> {
        if x.ncols() != self.min.len() {
            return Err(FitErr::SizeMismatch {
                a: "features",
                b: "scaler",
                got: x.ncols(),
                expected: self.min.len(),
            });
        }

        Ok((&x - &self.min) / &self.range)
    }

    /// Scales the features of `dataset`, the labels are kept as they are.
    pub fn transform(&self, dataset: &Dataset) -> Result<Dataset> {
        let x = self.transform_x(dataset.x())?;
        Ok(Dataset {
            x,
            y: dataset.y.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn scales_into_unit_range() {
        let ds = Dataset::new(array![[1., 5.], [3., 5.], [2., 5.]], array![0., 1., 1.]).unwrap();
        let scaler = MinMax::fit(&ds);
        let scaled = scaler.transform(&ds).unwrap();

        assert_eq!(scaled.x(), array![[0., 0.], [1., 0.], [0.5, 0.]]);
        assert_eq!(scaled.y(), ds.y());
    }

    #[test]
    fn rejects_other_widths() {
        let ds = Dataset::new(array![[1.], [3.]], array![0., 1.]).unwrap();
        let scaler = MinMax::fit(&ds);

        let err = scaler.transform_x(array![[1., 2.]].view()).unwrap_err();
        assert!(matches!(err, FitErr::SizeMismatch { got: 2, expected: 1, .. }));
    }
}

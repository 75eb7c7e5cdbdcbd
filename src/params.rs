use ndarray::{Array1, ArrayView2};

use crate::{FitErr, Result};

/// A weight vector and a bias, the parameters of `S(w . x + b)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Params {
    pub w: Array1<f64>,
    pub b: f64,
}

impl Params {
    pub fn new(w: Array1<f64>, b: f64) -> Self {
        Self { w, b }
    }

    /// Parameters for a single feature model.
    pub fn scalar(w: f64, b: f64) -> Self {
        Self::new(Array1::from_elem(1, w), b)
    }

    /// Computes the linear scores `w . x_i + b` of every row of `x`.
    ///
    /// # Errors
    /// `SizeMismatch` if `w` and the rows of `x` don't have the same length.
    pub fn scores(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        if self.w.len() != x.ncols() {
            return Err(FitErr::SizeMismatch {
                a: "weights",
                b: "features",
                got: self.w.len(),
                expected: x.ncols(),
            });
        }

        Ok(x.dot(&self.w) + self.b)
    }
}

/// The partial derivatives of the cost with respect to `w` and `b`.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub w: Array1<f64>,
    pub b: f64,
}

impl Gradient {
    /// The squared euclidean norm of the whole gradient.
    pub fn norm_sq(&self) -> f64 {
        self.w.dot(&self.w) + self.b * self.b
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn scores() {
        let params = Params::new(array![1., -2.], 0.5);
        let z = params.scores(array![[1., 1.], [0., 2.]].view()).unwrap();
        assert_eq!(z, array![-0.5, -3.5]);
    }

    #[test]
    fn scalar_shorthand_only_fits_one_feature() {
        let params = Params::scalar(2., 0.);
        let err = params.scores(array![[1., 1.]].view()).unwrap_err();
        assert!(matches!(err, FitErr::SizeMismatch { got: 1, expected: 2, .. }));
    }

    #[test]
    fn gradient_norm_includes_the_bias() {
        let grad = Gradient {
            w: array![3., 0.],
            b: -4.,
        };
        assert_eq!(grad.norm_sq(), 25.);
    }
}

use ndarray::{Array1, Zip};

use crate::{FitErr, Gradient, Params, Result, activations::ActFn, dataset::Dataset};

/// Cross entropy cost of a binary classifier `P(y != 0 | x) = S(w . x + b)` over a dataset,
/// for any activation `S`.
///
/// Examples with a nonzero label count as positive, so labels may be encoded as `{0, 1}`,
/// `{0, -1}`, `{0, 7}` and so on.
pub struct BinaryLabelingCost<A> {
    dataset: Dataset,
    act: A,
}

impl<A: ActFn> BinaryLabelingCost<A> {
    pub fn new(dataset: Dataset, act: A) -> Self {
        Self { dataset, act }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn into_parts(self) -> (Dataset, A) {
        (self.dataset, self.act)
    }

    /// Evaluates `J(w, b) = -1/m [ sum_{y != 0} ln S(z) + sum_{y = 0} ln (1 - S(z)) ]`.
    ///
    /// # Errors
    /// `SizeMismatch` if `w` doesn't have one weight per feature, `NonFiniteCost` if the cost
    /// is NaN or infinite, which happens when the activation returns exactly `0` on a positive
    /// example or exactly `1` on a negative one.
    pub fn eval(&self, params: &Params) -> Result<f64> {
        let z = params.scores(self.dataset.x())?;
        let s = self.act.f_arr(z.view());

        let (pos, neg) = s
            .iter()
            .zip(self.dataset.y())
            .fold((0., 0.), |(pos, neg), (&s, &y)| {
                if y != 0. {
                    (pos + s.ln(), neg)
                } else {
                    (pos, neg + (1. - s).ln())
                }
            });

        // adding zero turns a perfect fit's -0 into 0
        let cost = -(pos + neg) / self.dataset.len() as f64 + 0.;
        if !cost.is_finite() {
            return Err(FitErr::NonFiniteCost { cost });
        }

        Ok(cost)
    }

    /// Computes `(dJ/dw, dJ/db)`.
    ///
    /// Every example contributes `c_i = (y_i - s_i) / (s_i (1 - s_i)) * S'(z_i)`, which only
    /// reduces to `y_i - s_i` when `S' = S (1 - S)`. An example the activation already fits
    /// exactly (`s_i == y_i`) contributes 0.
    ///
    /// The coefficient uses the literal label, so this is the derivative of `eval` only for
    /// `{0, 1}` labels; with other encodings a finite difference check of `eval` won't match.
    ///
    /// # Errors
    /// `SizeMismatch` if `w` doesn't have one weight per feature, `NonFiniteGradient` if any
    /// coefficient blew up, e.g. `s_i` saturated at `0` or `1` on the wrong label.
    pub fn gradient(&self, params: &Params) -> Result<Gradient> {
        let x = self.dataset.x();
        let z = params.scores(x)?;
        let s = self.act.f_arr(z.view());
        let ds = self.act.df_arr(z.view());

        let c: Array1<f64> = Zip::from(self.dataset.y())
            .and(&s)
            .and(&ds)
            .map_collect(|&y, &s, &ds| {
                let r = y - s;
                if r == 0. {
                    0.
                } else {
                    r / (s * (1. - s)) * ds
                }
            });

        let m = self.dataset.len() as f64;
        let w = -x.t().dot(&c) / m;
        let b = -c.sum() / m;

        if !b.is_finite() || w.iter().any(|g| !g.is_finite()) {
            return Err(FitErr::NonFiniteGradient);
        }

        Ok(Gradient { w, b })
    }
}

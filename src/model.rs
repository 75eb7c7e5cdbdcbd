use ndarray::{Array1, ArrayView2};

use crate::{Params, Result, activations::ActFn, dataset::Dataset};

/// A fitted binary classifier.
pub struct Classifier<A> {
    params: Params,
    act: A,
}

impl<A: ActFn> Classifier<A> {
    pub fn new(params: Params, act: A) -> Self {
        Self { params, act }
    }

    /// Computes `P(y != 0 | x)` for every row of `x`.
    pub fn proba(&self, x: ArrayView2<f64>) -> Result<Array1<f64>> {
        let z = self.params.scores(x)?;
        Ok(self.act.f_arr(z.view()))
    }

    /// Labels every row of `x` as positive when its probability reaches `threshold`.
    pub fn predict(&self, x: ArrayView2<f64>, threshold: f64) -> Result<Vec<bool>> {
        let p = self.proba(x)?;
        Ok(p.iter().map(|&p| p >= threshold).collect())
    }

    /// The fraction of examples of `dataset` whose predicted label matches `y != 0`.
    pub fn accuracy(&self, dataset: &Dataset, threshold: f64) -> Result<f64> {
        let predicted = self.predict(dataset.x(), threshold)?;
        let hits = predicted
            .iter()
            .zip(dataset.y())
            .filter(|&(&p, &y)| p == (y != 0.))
            .count();

        Ok(hits as f64 / dataset.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::activations::Sigmoid;

    #[test]
    fn predicts_by_threshold() {
        let clf = Classifier::new(Params::scalar(10., -5.), Sigmoid::new());
        let x = array![[0.], [0.4], [0.6], [1.]];

        assert_eq!(clf.predict(x.view(), 0.5).unwrap(), [false, false, true, true]);
        assert_eq!(clf.predict(x.view(), 0.99).unwrap(), [false, false, false, true]);
    }

    #[test]
    fn accuracy_uses_nonzero_labels() {
        let clf = Classifier::new(Params::scalar(10., -5.), Sigmoid::new());
        let ds = Dataset::new(array![[0.], [0.4], [0.6], [1.]], array![0., -1., 3., 0.]).unwrap();

        assert_eq!(clf.accuracy(&ds, 0.5).unwrap(), 0.5);
    }
}

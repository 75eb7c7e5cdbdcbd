use ndarray::{Array1, ArrayView1};
use serde::Deserialize;

use super::{Arctan, HardSigmoid, Sigmoid};

/// A monotone activation `S: R -> (0, 1)` together with its derivative.
///
/// Implementations must be stateless and should keep `f` strictly inside `(0, 1)` for the
/// scores they are going to be evaluated on; an activation that returns exactly `0` or `1`
/// makes the cost singular.
pub trait ActFn {
    /// Evaluates the activation at `z`.
    fn f(&self, z: f64) -> f64;

    /// Evaluates the activation's derivative at `z`.
    fn df(&self, z: f64) -> f64;

    /// Applies `f` elementwise.
    fn f_arr(&self, z: ArrayView1<f64>) -> Array1<f64> {
        z.mapv(|z| self.f(z))
    }

    /// Applies `df` elementwise.
    fn df_arr(&self, z: ArrayView1<f64>) -> Array1<f64> {
        z.mapv(|z| self.df(z))
    }
}

impl<A: ActFn + ?Sized> ActFn for Box<A> {
    fn f(&self, z: f64) -> f64 {
        (**self).f(z)
    }

    fn df(&self, z: f64) -> f64 {
        (**self).df(z)
    }
}

impl<A: ActFn + ?Sized> ActFn for &A {
    fn f(&self, z: f64) -> f64 {
        (**self).f(z)
    }

    fn df(&self, z: f64) -> f64 {
        (**self).df(z)
    }
}

/// The stock activations selectable from a configuration file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActFnKind {
    #[default]
    Sigmoid,
    Arctan,
    HardSigmoid,
}

impl ActFnKind {
    /// Builds the activation this kind names.
    pub fn build(self) -> Box<dyn ActFn> {
        match self {
            ActFnKind::Sigmoid => Box::new(Sigmoid::new()),
            ActFnKind::Arctan => Box::new(Arctan::new()),
            ActFnKind::HardSigmoid => Box::new(HardSigmoid::new()),
        }
    }
}

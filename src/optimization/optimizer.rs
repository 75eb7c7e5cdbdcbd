use crate::{Gradient, Params, Result};

/// A first order update rule.
pub trait Optimizer {
    /// Takes one step from `params` using `grad`.
    ///
    /// # Errors
    /// `SizeMismatch` if the gradient and the parameters don't have the same length.
    fn update_params(&mut self, grad: &Gradient, params: &mut Params) -> Result<()>;
}

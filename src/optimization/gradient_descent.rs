use super::Optimizer;
use crate::{FitErr, Gradient, Params, Result};

/// Gradient descent with a fixed step size.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    /// Creates a new `GradientDescent` optimizer.
    ///
    /// # Arguments
    /// * `learning_rate` - The small coefficient that modulates the amount of training per update.
    ///
    /// # Returns
    /// A new `GradientDescent` instance.
    pub fn new(learning_rate: f64) -> Self {
        Self { learning_rate }
    }
}

impl Optimizer for GradientDescent {
    fn update_params(&mut self, grad: &Gradient, params: &mut Params) -> Result<()> {
        if grad.w.len() != params.w.len() {
            return Err(FitErr::SizeMismatch {
                a: "gradient",
                b: "weights",
                got: grad.w.len(),
                expected: params.w.len(),
            });
        }

        let lr = self.learning_rate;

        params.w.scaled_add(-lr, &grad.w);
        params.b -= lr * grad.b;

        Ok(())
    }
}

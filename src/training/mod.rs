mod trainer;

pub use trainer::{DEFAULT_REPORT_EVERY, Fit, Stop, Trainer, TrainerConfig};

use crate::{
    Params, Result, activations::ActFn, cost::BinaryLabelingCost, optimization::GradientDescent,
};

/// Runs batch gradient descent from `params` with step `alpha` until the cost decreases by
/// less than `epsilon` in one iteration.
///
/// There is no iteration ceiling: an `(alpha, epsilon)` pair whose decrease never drops below
/// `epsilon` loops forever. Use a `Trainer` with `max_iters` to bound the run.
pub fn gradient_descent<A: ActFn>(
    cost: &BinaryLabelingCost<A>,
    params: Params,
    alpha: f64,
    epsilon: f64,
) -> Result<Fit> {
    let optimizer = GradientDescent::new(alpha);
    Trainer::new(cost, optimizer, TrainerConfig::new(epsilon)).train(params)
}

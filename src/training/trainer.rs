use std::num::NonZeroUsize;

use log::{debug, info, warn};

use crate::{
    Params, Result, activations::ActFn, cost::BinaryLabelingCost, optimization::Optimizer,
};

/// How often a `Trainer` logs its progress unless configured otherwise.
pub const DEFAULT_REPORT_EVERY: NonZeroUsize = NonZeroUsize::new(1000).unwrap();

/// Stopping rules of a `Trainer`.
#[derive(Debug, Clone, Copy)]
pub struct TrainerConfig {
    /// Stop once an iteration decreases the cost by less than this.
    pub epsilon: f64,
    /// Optional ceiling on the amount of iterations, unbounded when `None`.
    pub max_iters: Option<NonZeroUsize>,
    /// Log a progress line every this many iterations.
    pub report_every: NonZeroUsize,
}

impl TrainerConfig {
    pub fn new(epsilon: f64) -> Self {
        Self {
            epsilon,
            max_iters: None,
            report_every: DEFAULT_REPORT_EVERY,
        }
    }

    pub fn with_max_iters(mut self, max_iters: NonZeroUsize) -> Self {
        self.max_iters = Some(max_iters);
        self
    }

    pub fn with_report_every(mut self, report_every: NonZeroUsize) -> Self {
        self.report_every = report_every;
        self
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stop {
    /// The cost decreased by less than epsilon.
    Converged,
    /// The last iteration made the cost grow, usually a too large learning rate.
    CostIncreased,
    /// The iteration ceiling was reached first.
    MaxIters,
}

/// The outcome of a run.
#[derive(Debug, Clone)]
pub struct Fit {
    pub params: Params,
    pub cost: f64,
    /// The amount of parameter updates performed.
    pub iterations: usize,
    pub stop: Stop,
}

/// Batch gradient descent over a `BinaryLabelingCost`.
pub struct Trainer<'a, A, O> {
    cost: &'a BinaryLabelingCost<A>,
    optimizer: O,
    config: TrainerConfig,
}

impl<'a, A: ActFn, O: Optimizer> Trainer<'a, A, O> {
    pub fn new(cost: &'a BinaryLabelingCost<A>, optimizer: O, config: TrainerConfig) -> Self {
        Self {
            cost,
            optimizer,
            config,
        }
    }

    /// Iterates from `params` until one of the stopping rules holds.
    ///
    /// # Errors
    /// Any error of the cost or the optimizer aborts the run, in particular a non finite cost.
    pub fn train(&mut self, mut params: Params) -> Result<Fit> {
        let TrainerConfig {
            epsilon,
            max_iters,
            report_every,
        } = self.config;

        let mut cost = self.cost.eval(&params)?;
        let mut iterations = 0;
        debug!(cost = cost, epsilon = epsilon; "starting gradient descent");

        loop {
            let grad = self.cost.gradient(&params)?;
            self.optimizer.update_params(&grad, &mut params)?;
            let next = self.cost.eval(&params)?;
            let delta = cost - next;

            if iterations % report_every.get() == 0 {
                info!("iteration: {iterations:>7}, dJ = {delta:.4e}");
                debug!(cost = next, grad_norm_sq = grad.norm_sq(); "progress");
            }

            cost = next;
            iterations += 1;

            let stop = if delta < epsilon {
                if delta < 0. {
                    Stop::CostIncreased
                } else {
                    Stop::Converged
                }
            } else if max_iters.is_some_and(|max| iterations >= max.get()) {
                Stop::MaxIters
            } else {
                continue;
            };

            match stop {
                Stop::Converged => info!("converged after {iterations} iteration(s), J = {cost:.6}"),
                Stop::CostIncreased => warn!(
                    "cost increased by {:.4e} at iteration {iterations}, the learning rate may be too large",
                    -delta
                ),
                Stop::MaxIters => warn!("stopped at the ceiling of {iterations} iteration(s), J = {cost:.6}"),
            }

            return Ok(Fit {
                params,
                cost,
                iterations,
                stop,
            });
        }
    }
}

use std::{cell::RefCell, rc::Rc};

use ndarray::Array1;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::Deserialize;

use super::RandParamGen;
use crate::{Params, Result};

/// How to generate the starting parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Init {
    /// Weights uniform in `[0, 1)`, bias uniform in `[-1, 1]`.
    #[default]
    Random,
    Zeros,
}

impl Init {
    /// `"random"` selects `Random`, any other mode falls back to `Zeros`.
    pub fn parse(mode: &str) -> Self {
        match mode {
            "random" => Init::Random,
            _ => Init::Zeros,
        }
    }
}

impl From<String> for Init {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Generates starting weights and biases, every draw coming from the same random stream.
pub struct Initializer<R: Rng> {
    rng: Rc<RefCell<R>>,
}

impl Initializer<StdRng> {
    /// A reproducible `Initializer`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Initializer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng: Rc::new(RefCell::new(rng)),
        }
    }

    /// Generates `n` starting weights.
    pub fn weights(&mut self, n: usize, init: Init) -> Result<Array1<f64>> {
        let w: Array1<f64> = match init {
            Init::Random => RandParamGen::uniform(self.rng.clone(), 0., 1.)?.sample(n).into(),
            Init::Zeros => Array1::zeros(n),
        };

        Ok(w)
    }

    /// Generates a starting bias.
    pub fn bias(&mut self, init: Init) -> Result<f64> {
        let b = match init {
            Init::Random => {
                RandParamGen::uniform_inclusive(self.rng.clone(), -1., 1.)?.sample_one()
            }
            Init::Zeros => 0.,
        };

        Ok(b)
    }

    /// Generates starting weights for `n` features and a starting bias.
    pub fn params(&mut self, n: usize, init: Init) -> Result<Params> {
        let w = self.weights(n, init)?;
        let b = self.bias(init)?;
        Ok(Params::new(w, b))
    }
}

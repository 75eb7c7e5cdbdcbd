use std::{cell::RefCell, rc::Rc};

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use super::Result;

/// A parameter generator that follows a certain probabilistic distribution.
///
/// The random number generator is shared so that several generators draw from one seeded
/// stream.
pub struct RandParamGen<R: Rng, D: Distribution<f64>> {
    rng: Rc<RefCell<R>>,
    distribution: D,
}

impl<R: Rng, D: Distribution<f64>> RandParamGen<R, D> {
    /// Creates a new `RandParamGen` parameter generator.
    ///
    /// # Arguments
    /// * `rng` - A random number generator.
    /// * `distribution` - The distribution to sample the random numbers from.
    pub fn new(rng: Rc<RefCell<R>>, distribution: D) -> Self {
        Self { rng, distribution }
    }

    /// Draws `n` values from the shared stream.
    pub fn sample(&self, n: usize) -> Vec<f64> {
        let mut rng = self.rng.borrow_mut();
        (0..n)
            .map(|_| self.distribution.sample(&mut *rng))
            .collect()
    }

    /// Draws a single value from the shared stream.
    pub fn sample_one(&self) -> f64 {
        self.distribution.sample(&mut *self.rng.borrow_mut())
    }
}

impl<R: Rng> RandParamGen<R, Uniform<f64>> {
    /// Creates a new `RandParamGen` with a uniform distribution over `[low, high)`.
    ///
    /// # Returns
    /// An error if the range is invalid (low >= high).
    pub fn uniform(rng: Rc<RefCell<R>>, low: f64, high: f64) -> Result<Self> {
        Ok(Self::new(rng, Uniform::new(low, high)?))
    }

    /// Creates a new `RandParamGen` with a uniform distribution over `[low, high]`.
    ///
    /// # Returns
    /// An error if the range is invalid (low > high).
    pub fn uniform_inclusive(rng: Rc<RefCell<R>>, low: f64, high: f64) -> Result<Self> {
        Ok(Self::new(rng, Uniform::new_inclusive(low, high)?))
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn seeded_rng() -> Rc<RefCell<StdRng>> {
        Rc::new(RefCell::new(StdRng::seed_from_u64(42)))
    }

    #[test]
    fn sample_within_range() {
        const SIZE: usize = 10;

        let param_gen = RandParamGen::uniform(seeded_rng(), -1., 1.).unwrap();
        let sample = param_gen.sample(SIZE);

        assert_eq!(sample.len(), SIZE);
        assert!(sample.iter().all(|p| (-1. ..1.).contains(p)));
        assert_eq!(param_gen.sample(3).len(), 3);
        assert!(param_gen.sample(0).is_empty());
    }

    #[test]
    fn invalid_range() {
        assert!(RandParamGen::uniform(seeded_rng(), 1., 1.).is_err());
        assert!(RandParamGen::uniform_inclusive(seeded_rng(), 1., 0.).is_err());
    }

    #[test]
    fn shared_stream() {
        let rng = seeded_rng();
        let a = RandParamGen::uniform(rng.clone(), 0., 1.).unwrap();
        let b = RandParamGen::uniform(rng, 0., 1.).unwrap();

        let mut expected_rng = StdRng::seed_from_u64(42);
        let dist = Uniform::new(0., 1.).unwrap();
        let first: f64 = dist.sample(&mut expected_rng);
        let second: f64 = dist.sample(&mut expected_rng);
        let third: f64 = dist.sample(&mut expected_rng);

        assert_eq!(a.sample(1), [first]);
        assert_eq!(b.sample_one(), second);
        assert_eq!(a.sample_one(), third);
    }
}

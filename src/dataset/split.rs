use rand::{Rng, seq::SliceRandom};

use super::Dataset;
use crate::{FitErr, Result};

impl Dataset {
    /// Randomly splits the examples in two, the first part holding `ratio` of them.
    ///
    /// # Errors
    /// `InvalidSplit` if `ratio` is outside `[0, 1]` or either part would be empty.
    pub fn split<R: Rng + ?Sized>(&self, ratio: f64, rng: &mut R) -> Result<(Dataset, Dataset)> {
        let len = self.len();
        let invalid = FitErr::InvalidSplit { ratio, len };

        if !(0. ..=1.).contains(&ratio) {
            return Err(invalid);
        }

        let cut = (ratio * len as f64).round() as usize;
        if cut == 0 || cut == len {
            return Err(invalid);
        }

        let mut idx: Vec<_> = (0..len).collect();
        idx.shuffle(rng);
        let (a, b) = idx.split_at(cut);

        Ok((self.select(a), self.select(b)))
    }
}

#[cfg(test)]
mod tests {
    use ndarray::{Array1, Array2};
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn dataset(m: usize) -> Dataset {
        let x = Array2::from_shape_fn((m, 1), |(i, _)| i as f64);
        let y = Array1::from_shape_fn(m, |i| (i % 2) as f64);
        Dataset::new(x, y).unwrap()
    }

    #[test]
    fn partitions_every_example() {
        let ds = dataset(10);
        let mut rng = StdRng::seed_from_u64(42);

        let (train, test) = ds.split(0.7, &mut rng).unwrap();
        assert_eq!(train.len(), 7);
        assert_eq!(test.len(), 3);

        let mut seen: Vec<_> = train.x().iter().chain(test.x().iter()).copied().collect();
        seen.sort_by(f64::total_cmp);
        let expected: Vec<_> = (0..10).map(|i| i as f64).collect();
        assert_eq!(seen, expected);

        for (x, y) in train.x().column(0).iter().zip(train.y()) {
            assert_eq!(*y, (*x as usize % 2) as f64);
        }
    }

    #[test]
    fn both_parts_must_have_examples() {
        let ds = dataset(3);
        let mut rng = StdRng::seed_from_u64(42);

        assert!(matches!(ds.split(0.1, &mut rng), Err(FitErr::InvalidSplit { .. })));
        assert!(matches!(ds.split(1., &mut rng), Err(FitErr::InvalidSplit { .. })));
        assert!(matches!(ds.split(f64::NAN, &mut rng), Err(FitErr::InvalidSplit { .. })));
    }
}

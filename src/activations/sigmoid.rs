/// The logistic sigmoid, `1 / (1 + e^-z)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sigmoid;

impl Sigmoid {
    pub fn new() -> Self {
        Self
    }
}

impl super::ActFn for Sigmoid {
    fn f(&self, z: f64) -> f64 {
        1. / (1. + (-z).exp())
    }

    fn df(&self, z: f64) -> f64 {
        let s = self.f(z);
        s * (1. - s)
    }
}

#[cfg(test)]
mod tests {
    use super::{super::ActFn, *};

    #[test]
    fn midpoint() {
        let s = Sigmoid::new();
        assert_eq!(s.f(0.), 0.5);
        assert_eq!(s.df(0.), 0.25);
    }

    #[test]
    fn symmetric() {
        let s = Sigmoid::new();
        for z in [0.3, 1.7, 4.2] {
            assert!((s.f(z) + s.f(-z) - 1.).abs() < 1e-12);
        }
    }

    #[test]
    fn derivative_does_not_overflow() {
        let s = Sigmoid::new();
        assert_eq!(s.df(-800.), 0.);
        assert_eq!(s.df(800.), 0.);
    }
}

/// Piecewise linear approximation of the sigmoid, `clamp(0.2 z + 0.5, 0, 1)`.
///
/// Saturates to exactly `0` for `z <= -2.5` and exactly `1` for `z >= 2.5`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HardSigmoid;

const SLOPE: f64 = 0.2;
const EDGE: f64 = 0.5 / SLOPE;

impl HardSigmoid {
    pub fn new() -> Self {
        Self
    }
}

impl super::ActFn for HardSigmoid {
    fn f(&self, z: f64) -> f64 {
        (SLOPE * z + 0.5).clamp(0., 1.)
    }

    fn df(&self, z: f64) -> f64 {
        if z.abs() < EDGE { SLOPE } else { 0. }
    }
}

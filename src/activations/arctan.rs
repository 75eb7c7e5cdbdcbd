use std::f64::consts::PI;

/// Arctangent squashed into `(0, 1)`: `1/2 + atan(z) / pi`.
///
/// Its derivative is not `S (1 - S)`, which makes it a useful check that the cost doesn't
/// silently assume the logistic sigmoid.
#[derive(Clone, Copy, Debug, Default)]
pub struct Arctan;

impl Arctan {
    pub fn new() -> Self {
        Self
    }
}

impl super::ActFn for Arctan {
    fn f(&self, z: f64) -> f64 {
        0.5 + z.atan() / PI
    }

    fn df(&self, z: f64) -> f64 {
        1. / (PI * (1. + z * z))
    }
}

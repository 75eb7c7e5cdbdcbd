mod act_fn;
mod arctan;
mod hard_sigmoid;
mod sigmoid;

pub use act_fn::{ActFn, ActFnKind};
pub use arctan::Arctan;
pub use hard_sigmoid::HardSigmoid;
pub use sigmoid::Sigmoid;

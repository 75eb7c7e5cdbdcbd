mod error;
mod initializer;
mod random;

pub use error::{RandErr, Result};
pub use initializer::{Init, Initializer};
pub use random::RandParamGen;

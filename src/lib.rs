pub mod dynamics;
pub mod error;
pub mod io;
pub mod sim;

pub use dynamics::{with_dimension, Derivative, WithDimension};
pub use error::IntegratorError;
pub use sim::{Rk4, SimConfig, Trajectory};

pub mod deriv;
pub mod models;

pub use deriv::{with_dimension, Derivative, WithDimension};

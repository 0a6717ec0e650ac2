pub mod config;
pub mod integrator;
pub mod runner;
pub mod trajectory;

pub use config::SimConfig;
pub use integrator::Rk4;
pub use runner::simulate;
pub use trajectory::Trajectory;

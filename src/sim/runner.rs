use nalgebra::DVector;

use crate::dynamics::Derivative;
use crate::error::IntegratorError;
use super::config::SimConfig;
use super::integrator::Rk4;
use super::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// One-shot simulation
// ---------------------------------------------------------------------------

/// Build an integrator sized to `initial`, run it over `config` and hand back
/// the trajectory.
pub fn simulate<D: Derivative + ?Sized>(
    config: &SimConfig,
    f: &D,
    initial: &DVector<f64>,
) -> Result<Trajectory, IntegratorError> {
    Rk4::from_config(initial.len(), config)?.integrate(config.t_end, f, initial)
}

use crate::error::IntegratorError;

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimConfig {
    pub dt: f64,
    pub t_end: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: 0.01,     // 100 Hz
            t_end: 10.0,
        }
    }
}

impl SimConfig {
    /// Reject non-positive or non-finite `dt` and negative or non-finite `t_end`.
    pub fn validate(&self) -> Result<(), IntegratorError> {
        check_step(self.dt)?;
        check_horizon(self.t_end)
    }

    /// Number of recorded rows for a `dim`-dimensional state.
    pub fn step_count(&self, dim: usize) -> Result<usize, IntegratorError> {
        self.validate()?;
        step_count(self.t_end, self.dt, dim)
    }
}

pub(crate) fn check_step(dt: f64) -> Result<(), IntegratorError> {
    if dt.is_finite() && dt > 0.0 {
        Ok(())
    } else {
        Err(IntegratorError::InvalidStep { dt })
    }
}

pub(crate) fn check_horizon(t_end: f64) -> Result<(), IntegratorError> {
    if t_end.is_finite() && t_end >= 0.0 {
        Ok(())
    } else {
        Err(IntegratorError::InvalidHorizon { t_end })
    }
}

/// `round(t_end / dt) + 1`, rounding half away from zero.
///
/// Callers validate `t_end >= 0` and `dt > 0` first. The count is checked in
/// f64 so that the time column plus `dim` state columns stay addressable.
pub(crate) fn step_count(t_end: f64, dt: f64, dim: usize) -> Result<usize, IntegratorError> {
    let rows = (t_end / dt).round() + 1.0;
    let max_values = (isize::MAX as usize / std::mem::size_of::<f64>()) as f64;
    if !rows.is_finite() || rows * (dim as f64 + 1.0) > max_values {
        return Err(IntegratorError::TooManySteps { t_end, dt });
    }
    Ok(rows as usize)
}

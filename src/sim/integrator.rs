use nalgebra::DVector;

use crate::dynamics::Derivative;
use crate::error::IntegratorError;
use super::config::{check_horizon, check_step, step_count, SimConfig};
use super::trajectory::Trajectory;

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta integrator
// ---------------------------------------------------------------------------

/// Fixed-step RK4 integrator over a state of fixed dimension.
///
/// Owns the current state, the stage scratch buffers and the trajectory of
/// the most recent [`simulate`](Rk4::simulate) call. Scratch buffers are
/// allocated once here and reused by every step.
#[derive(Debug, Clone)]
pub struct Rk4 {
    dt: f64,
    t: f64,
    x: DVector<f64>,
    x_temp: DVector<f64>,
    k1: DVector<f64>,
    k2: DVector<f64>,
    k3: DVector<f64>,
    k4: DVector<f64>,
    trajectory: Option<Trajectory>,
}

impl Rk4 {
    /// Integrator for a `state_size`-dimensional state stepped by `dt`.
    /// State, time and scratch start at zero.
    pub fn new(state_size: usize, dt: f64) -> Result<Self, IntegratorError> {
        if state_size == 0 {
            return Err(IntegratorError::InvalidDimension { size: state_size });
        }
        check_step(dt)?;

        let zeros = DVector::zeros(state_size);
        Ok(Self {
            dt,
            t: 0.0,
            x: zeros.clone(),
            x_temp: zeros.clone(),
            k1: zeros.clone(),
            k2: zeros.clone(),
            k3: zeros.clone(),
            k4: zeros,
            trajectory: None,
        })
    }

    /// Integrator using `config.dt`. `config.t_end` is checked but only
    /// consumed by [`simulate`](Rk4::simulate).
    pub fn from_config(state_size: usize, config: &SimConfig) -> Result<Self, IntegratorError> {
        config.validate()?;
        Self::new(state_size, config.dt)
    }

    /// Advance the current state by one `dt` in place.
    pub fn solve<D: Derivative + ?Sized>(&mut self, f: &D) {
        let h = self.dt;
        let half = 0.5 * h;

        f.eval(self.t, &self.x, &mut self.k1);

        self.x_temp.copy_from(&self.x);
        self.x_temp.axpy(half, &self.k1, 1.0);
        f.eval(self.t + half, &self.x_temp, &mut self.k2);

        self.x_temp.copy_from(&self.x);
        self.x_temp.axpy(half, &self.k2, 1.0);
        f.eval(self.t + half, &self.x_temp, &mut self.k3);

        self.x_temp.copy_from(&self.x);
        self.x_temp.axpy(h, &self.k3, 1.0);
        f.eval(self.t + h, &self.x_temp, &mut self.k4);

        let sixth = h / 6.0;
        for i in 0..self.x.len() {
            self.x[i] += sixth * (self.k1[i] + 2.0 * self.k2[i] + 2.0 * self.k3[i] + self.k4[i]);
        }

        self.t += h;
    }

    /// Run from `t = 0` with `initial` for `round(t_end / dt) + 1` recorded
    /// rows.
    ///
    /// Each iteration records the current `(t, x)` and then steps once, so
    /// after return [`state`](Rk4::state) and [`time`](Rk4::time) sit one
    /// step past the last recorded row. Any previous trajectory is dropped.
    pub fn simulate<D: Derivative + ?Sized>(
        &mut self,
        t_end: f64,
        f: &D,
        initial: &DVector<f64>,
    ) -> Result<&Trajectory, IntegratorError> {
        let trajectory = self.integrate(t_end, f, initial)?;
        Ok(&*self.trajectory.insert(trajectory))
    }

    /// Body of [`simulate`](Rk4::simulate), handing the trajectory back
    /// instead of storing it. Inputs are checked before any state changes.
    pub(crate) fn integrate<D: Derivative + ?Sized>(
        &mut self,
        t_end: f64,
        f: &D,
        initial: &DVector<f64>,
    ) -> Result<Trajectory, IntegratorError> {
        check_horizon(t_end)?;
        if initial.len() != self.dimension() {
            return Err(IntegratorError::DimensionMismatch {
                expected: self.dimension(),
                actual: initial.len(),
            });
        }
        let len = step_count(t_end, self.dt, self.dimension())?;

        self.trajectory = None;
        self.x.copy_from(initial);
        self.t = 0.0;

        let mut trajectory = Trajectory::with_len(len, self.dimension());
        for i in 0..len {
            trajectory.record(i, self.t, &self.x);
            self.solve(f);
        }

        Ok(trajectory)
    }

    /// Current state (read-only). Reflects the most recent `solve`.
    pub fn state(&self) -> &DVector<f64> {
        &self.x
    }

    /// Current time.
    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn dimension(&self) -> usize {
        self.x.len()
    }

    /// Trajectory of the most recent `simulate` call.
    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }

    /// Take ownership of the recorded trajectory, leaving none behind.
    pub fn take_trajectory(&mut self) -> Option<Trajectory> {
        self.trajectory.take()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

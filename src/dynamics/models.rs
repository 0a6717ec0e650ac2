use nalgebra::DVector;

use super::deriv::Derivative;

// ---------------------------------------------------------------------------
// Ready-made right-hand sides
// ---------------------------------------------------------------------------

/// `dx_i/dt = -x_i` for every component. Solution: `x(t) = x0 * e^{-t}`.
pub fn exponential_decay(_t: f64, x: &DVector<f64>, dx: &mut DVector<f64>) {
    for (d, v) in dx.iter_mut().zip(x.iter()) {
        *d = -v;
    }
}

/// First-order lag driven by a unit step: `dx/dt = (1 - x) / tau`.
///
/// Operates on state index 0 only.
#[derive(Debug, Clone, Copy)]
pub struct FirstOrderLag {
    pub tau: f64,
}

impl FirstOrderLag {
    #[inline]
    fn rate(&self, x: f64) -> f64 {
        -1.0 / self.tau * x + 1.0 / self.tau
    }
}

impl Derivative for FirstOrderLag {
    fn eval(&self, _t: f64, x: &DVector<f64>, dx: &mut DVector<f64>) {
        dx[0] = self.rate(x[0]);
    }
}

/// Unforced mass-spring-damper `m x'' + c x' + k x = 0` as `[x, v]`.
#[derive(Debug, Clone, Copy)]
pub struct MassSpringDamper {
    pub m: f64,
    pub c: f64,
    pub k: f64,
}

impl MassSpringDamper {
    #[inline]
    fn rates(&self, pos: f64, vel: f64) -> (f64, f64) {
        (vel, -self.c / self.m * vel - self.k / self.m * pos)
    }

    /// Natural frequency `sqrt(k/m)` (rad/s).
    pub fn omega_n(&self) -> f64 {
        (self.k / self.m).sqrt()
    }

    /// Damping ratio `c / (2 sqrt(k m))`.
    pub fn zeta(&self) -> f64 {
        self.c / (2.0 * (self.k * self.m).sqrt())
    }
}

impl Derivative for MassSpringDamper {
    fn eval(&self, _t: f64, x: &DVector<f64>, dx: &mut DVector<f64>) {
        let (dpos, dvel) = self.rates(x[0], x[1]);
        dx[0] = dpos;
        dx[1] = dvel;
    }
}

/// Three-state demo system: a step-driven first-order lag (`x1`) next to an
/// independent mass-spring-damper (`x2` position, `x3` velocity).
#[derive(Debug, Clone, Copy)]
pub struct StepAndMck {
    pub lag: FirstOrderLag,
    pub mck: MassSpringDamper,
}

impl Default for StepAndMck {
    fn default() -> Self {
        Self {
            lag: FirstOrderLag { tau: 1.5 },
            mck: MassSpringDamper { m: 3.0, c: 2.0, k: 1.0 },
        }
    }
}

impl StepAndMck {
    pub const DIM: usize = 3;

    /// Same rule in the `(n, t, x, dx)` shape, for use with
    /// [`with_dimension`](crate::dynamics::with_dimension).
    ///
    /// # Panics
    ///
    /// Panics if `n` is not [`Self::DIM`].
    pub fn eval_checked(&self, n: usize, t: f64, x: &DVector<f64>, dx: &mut DVector<f64>) {
        assert_eq!(n, Self::DIM, "StepAndMck needs a 3-element state");
        self.eval(t, x, dx);
    }
}

impl Derivative for StepAndMck {
    fn eval(&self, _t: f64, x: &DVector<f64>, dx: &mut DVector<f64>) {
        dx[0] = self.lag.rate(x[0]);
        let (dpos, dvel) = self.mck.rates(x[1], x[2]);
        dx[1] = dpos;
        dx[2] = dvel;
    }
}

use nalgebra::DVector;

// ---------------------------------------------------------------------------
// Derivative contract
// ---------------------------------------------------------------------------

/// Right-hand side of `dx/dt = f(t, x)`.
///
/// Implementations write exactly `x.len()` values into `dx` and must not
/// keep hidden state: RK4 evaluates them at perturbed stage points that are
/// not on the true trajectory. `dx` may hold stale values from a previous
/// stage on entry.
///
/// Any closure `Fn(f64, &DVector<f64>, &mut DVector<f64>)` is a `Derivative`.
/// Functions that also want the state dimension go through [`WithDimension`].
pub trait Derivative {
    fn eval(&self, t: f64, x: &DVector<f64>, dx: &mut DVector<f64>);
}

impl<F> Derivative for F
where
    F: Fn(f64, &DVector<f64>, &mut DVector<f64>),
{
    #[inline]
    fn eval(&self, t: f64, x: &DVector<f64>, dx: &mut DVector<f64>) {
        self(t, x, dx)
    }
}

// ---------------------------------------------------------------------------
// Dimension-passing adapter
// ---------------------------------------------------------------------------

/// Adapter for derivatives of the shape `(n, t, x, dx)`.
///
/// `n` is the state dimension, handed to the wrapped function so it can
/// check its own assumptions. Otherwise identical to calling the
/// simplified form.
#[derive(Debug, Clone, Copy)]
pub struct WithDimension<F>(pub F);

impl<F> Derivative for WithDimension<F>
where
    F: Fn(usize, f64, &DVector<f64>, &mut DVector<f64>),
{
    #[inline]
    fn eval(&self, t: f64, x: &DVector<f64>, dx: &mut DVector<f64>) {
        (self.0)(x.len(), t, x, dx)
    }
}

/// Wrap a `(n, t, x, dx)` function as a [`Derivative`].
pub fn with_dimension<F>(f: F) -> WithDimension<F>
where
    F: Fn(usize, f64, &DVector<f64>, &mut DVector<f64>),
{
    WithDimension(f)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_is_a_derivative() {
        let f = |_t: f64, x: &DVector<f64>, dx: &mut DVector<f64>| dx.copy_from(&(-x));
        let x = DVector::from_vec(vec![1.0, -2.0]);
        let mut dx = DVector::zeros(2);
        f.eval(0.0, &x, &mut dx);
        assert_eq!(dx.as_slice(), &[-1.0, 2.0]);
    }

    #[test]
    fn adapter_passes_state_dimension() {
        let f = with_dimension(|n: usize, t: f64, _x: &DVector<f64>, dx: &mut DVector<f64>| {
            for i in 0..n {
                dx[i] = t + i as f64;
            }
        });
        let x = DVector::zeros(3);
        let mut dx = DVector::zeros(3);
        f.eval(10.0, &x, &mut dx);
        assert_eq!(dx.as_slice(), &[10.0, 11.0, 12.0]);
    }
}

//! Exponential decay `dx/dt = -x` at successively halved step sizes.
//!
//! RK4 global error is O(dt^4): every halving should cut the error at
//! t = 1 by roughly 16x.

use nalgebra::DVector;

use rk4_sim::dynamics::models;
use rk4_sim::sim::Rk4;

fn main() {
    let exact = (-1.0_f64).exp();
    let x0 = DVector::from_element(1, 1.0);

    println!("{:>10}  {:>18}  {:>12}  {:>8}", "dt", "x(1)", "error", "ratio");
    let mut prev_err: Option<f64> = None;
    for k in 0..6 {
        let dt = 0.2 / f64::from(1u32 << k);
        let mut rk = Rk4::new(1, dt).expect("valid step size");
        let traj = rk
            .simulate(1.0, &models::exponential_decay, &x0)
            .expect("valid horizon");
        let (_, x) = traj.last().expect("non-empty trajectory");
        let err = (x[0] - exact).abs();
        let ratio = prev_err.map_or(String::from("-"), |p| format!("{:.2}", p / err));
        println!("{dt:>10.6}  {:>18.15}  {err:>12.3e}  {ratio:>8}", x[0]);
        prev_err = Some(err);
    }
}

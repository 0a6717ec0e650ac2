use nalgebra::DVector;

use rk4_sim::dynamics::models::MassSpringDamper;
use rk4_sim::dynamics::with_dimension;
use rk4_sim::io;
use rk4_sim::sim::{self, SimConfig};

fn main() {
    let mck = MassSpringDamper { m: 1.0, c: 0.2, k: 4.0 };
    let config = SimConfig { dt: 0.005, t_end: 20.0 };
    let x0 = DVector::from_vec(vec![1.0, 0.0]);

    // Dimension-checked call shape
    let f = with_dimension(|n: usize, t: f64, x: &DVector<f64>, dx: &mut DVector<f64>| {
        assert_eq!(n, 2, "oscillator state is [x, v]");
        rk4_sim::Derivative::eval(&mck, t, x, dx);
    });

    println!("Simulating mass-spring-damper (zeta = {:.3}) ...", mck.zeta());
    let trajectory = sim::simulate(&config, &f, &x0).expect("valid config");

    let energy = |x: &[f64]| 0.5 * mck.k * x[0] * x[0] + 0.5 * mck.m * x[1] * x[1];
    let (t_last, x_last) = trajectory.last().expect("non-empty trajectory");
    println!("Rows: {}, final t = {:.3} s", trajectory.len(), t_last);
    println!(
        "Energy: {:.6} -> {:.6}",
        energy(x0.as_slice()),
        energy(x_last.as_slice())
    );

    io::write_trajectory_file("oscillator_trajectory.txt", &trajectory)
        .expect("Failed to write trajectory");
    println!("Exported: oscillator_trajectory.txt");
}

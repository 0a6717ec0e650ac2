use std::env;
use std::process::ExitCode;

use nalgebra::DVector;

use rk4_sim::dynamics::models::StepAndMck;
use rk4_sim::io;
use rk4_sim::sim::{Rk4, SimConfig, Trajectory};

fn main() -> ExitCode {
    // -----------------------------------------------------------------------
    // Problem: step-driven lag + mass-spring-damper, 3 states
    // -----------------------------------------------------------------------
    let system = StepAndMck::default();
    let x0 = DVector::from_vec(vec![0.0, 1.5, -1.2]);
    let config = SimConfig {
        dt: 0.01,
        t_end: 10.0,
    };
    let out_path = env::args().nth(1).unwrap_or_else(|| "traj.txt".to_string());

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let mut solver = match Rk4::from_config(StepAndMck::DIM, &config) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let trajectory = match solver.simulate(config.t_end, &system, &x0) {
        Ok(traj) => traj,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------
    if let Err(e) = io::write_trajectory_file(&out_path, trajectory) {
        eprintln!("error: could not write {out_path}: {e}");
        return ExitCode::FAILURE;
    }

    print_report(&system, &config, trajectory, &out_path);
    ExitCode::SUCCESS
}

fn print_report(system: &StepAndMck, config: &SimConfig, trajectory: &Trajectory, out_path: &str) {
    println!();
    println!("====================================================================");
    println!("  RK4 SIMULATION — first-order lag + mass-spring-damper");
    println!("====================================================================");
    println!();
    println!("  System Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  Lag time constant: {:>8.3} s", system.lag.tau);
    println!(
        "  M / C / K:         {:>8.3} / {:.3} / {:.3}",
        system.mck.m, system.mck.c, system.mck.k
    );
    println!(
        "  omega_n:           {:>8.4} rad/s   zeta: {:.4}",
        system.mck.omega_n(),
        system.mck.zeta()
    );
    println!();

    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!("  {:>8}  {:>14}  {:>14}  {:>14}", "t (s)", "x1", "x2", "x3");
    println!("  {}", "─".repeat(56));

    let sample_interval = (trajectory.len() / 20).max(1);
    for (i, (t, row)) in trajectory.iter().enumerate() {
        if i % sample_interval != 0 && i != trajectory.len() - 1 {
            continue;
        }
        println!("  {:>8.3}  {:>14.8}  {:>14.8}  {:>14.8}", t, row[0], row[1], row[2]);
    }

    println!();
    println!(
        "  Simulation: {} rows, dt={} s, t_end={} s",
        trajectory.len(),
        config.dt,
        config.t_end
    );
    println!("  Exported:   {out_path}");
    println!("====================================================================");
    println!();
}

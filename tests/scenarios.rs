use std::fs;

use nalgebra::DVector;

use rk4_sim::dynamics::models::{self, StepAndMck};
use rk4_sim::io;
use rk4_sim::sim::{Rk4, SimConfig, Trajectory};

fn decay_error_at_one(dt: f64) -> f64 {
    let mut rk = Rk4::new(1, dt).unwrap();
    let traj = rk
        .simulate(1.0, &models::exponential_decay, &DVector::from_element(1, 1.0))
        .unwrap();
    let (t, x) = traj.last().unwrap();
    assert!((t - 1.0).abs() < 1e-9);
    (x[0] - (-1.0_f64).exp()).abs()
}

fn demo_run() -> Trajectory {
    let mut rk = Rk4::from_config(StepAndMck::DIM, &SimConfig::default()).unwrap();
    rk.simulate(10.0, &StepAndMck::default(), &DVector::from_vec(vec![0.0, 1.5, -1.2]))
        .unwrap()
        .clone()
}

#[test]
fn decay_reaches_inverse_e_in_ten_steps() {
    let mut rk = Rk4::new(1, 0.1).unwrap();
    let traj = rk
        .simulate(1.0, &models::exponential_decay, &DVector::from_element(1, 1.0))
        .unwrap();
    assert_eq!(traj.len(), 11);
    assert!((traj.state(10)[0] - 0.367879).abs() < 1e-6);
}

#[test]
fn halving_dt_cuts_error_sixteen_fold() {
    let coarse = decay_error_at_one(0.1);
    let fine = decay_error_at_one(0.05);
    let finer = decay_error_at_one(0.025);

    let r1 = coarse / fine;
    let r2 = fine / finer;
    assert!((13.0..19.0).contains(&r1), "ratio {r1}");
    assert!((13.0..19.0).contains(&r2), "ratio {r2}");
}

#[test]
fn every_recorded_row_tracks_the_exponential() {
    let mut rk = Rk4::new(2, 0.01).unwrap();
    let x0 = DVector::from_vec(vec![1.0, -3.0]);
    let traj = rk.simulate(5.0, &models::exponential_decay, &x0).unwrap();
    for (t, row) in traj.iter() {
        let decay = (-t).exp();
        assert!((row[0] - decay).abs() < 1e-9, "t={t}");
        assert!((row[1] + 3.0 * decay).abs() < 3e-9, "t={t}");
    }
}

#[test]
fn demo_system_matches_closed_form() {
    let traj = demo_run();
    assert_eq!(traj.len(), 1001);

    // Lag: x1 = 1 - e^{-t/1.5}
    // MCK (m=3, c=2, k=1): x2 = e^{-t/3} (A cos wd t + B sin wd t)
    let sigma = 1.0 / 3.0;
    let wd = (2.0_f64 / 9.0).sqrt();
    let a = 1.5;
    let b = (-1.2 + sigma * a) / wd;

    for (t, row) in traj.iter() {
        let lag = 1.0 - (-t / 1.5).exp();
        let pos = (-sigma * t).exp() * (a * (wd * t).cos() + b * (wd * t).sin());
        assert!((row[0] - lag).abs() < 1e-8, "lag at t={t}");
        assert!((row[1] - pos).abs() < 1e-7, "mck at t={t}");
    }
}

#[test]
fn demo_export_has_expected_shape() {
    let traj = demo_run();
    let path = std::env::temp_dir().join(format!("rk4_sim_demo_{}.txt", std::process::id()));
    io::write_trajectory_file(&path, &traj).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    fs::remove_file(&path).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), traj.len() + 1);
    assert_eq!(lines[0], "t x1 x2 x3");
    assert_eq!(lines[1], "0.00000000e0 0.000000000000e0 1.500000000000e0 -1.200000000000e0");
    // 1000 accumulated steps of 0.01 land just under 10
    assert!(lines[1001].starts_with("1.00000000e1 "));
}

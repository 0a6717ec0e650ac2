use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use nalgebra::DVector;

use rk4_sim::dynamics::models::StepAndMck;
use rk4_sim::sim::{self, SimConfig, Trajectory};

fn main() -> eframe::Result {
    let system = StepAndMck::default();
    let config = SimConfig { dt: 0.01, t_end: 30.0 };
    let x0 = DVector::from_vec(vec![0.0, 1.5, -1.2]);
    let trajectory = match sim::simulate(&config, &system, &x0) {
        Ok(traj) => traj,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    let app = TrajectoryViz { trajectory, config };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native("RK4 Trajectory", options, Box::new(|_| Ok(Box::new(app))))
}

struct TrajectoryViz {
    trajectory: Trajectory,
    config: SimConfig,
}

impl TrajectoryViz {
    fn component_points(&self, j: usize, step: usize) -> PlotPoints<'static> {
        self.trajectory
            .iter()
            .step_by(step)
            .map(|(t, row)| [t, row[j]])
            .collect()
    }
}

impl eframe::App for TrajectoryViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let step = (self.trajectory.len() / 2000).max(1);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Step response + mass-spring-damper");
            ui.label(format!(
                "Rows: {}  |  dt: {} s  |  t_end: {} s  |  States: {}",
                self.trajectory.len(),
                self.config.dt,
                self.config.t_end,
                self.trajectory.dimension(),
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_h = available.y / 2.0 - 8.0;

            // All states vs time
            ui.label("State components");
            Plot::new("states")
                .height(half_h)
                .x_axis_label("Time (s)")
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    for j in 0..self.trajectory.dimension() {
                        let name = format!("x{}", j + 1);
                        plot_ui.line(Line::new(name, self.component_points(j, step)));
                    }
                });

            // Phase portrait of the oscillator
            ui.label("Phase portrait (x2, x3)");
            let phase: PlotPoints = self
                .trajectory
                .iter()
                .step_by(step)
                .map(|(_, row)| [row[1], row[2]])
                .collect();
            Plot::new("phase")
                .height(half_h)
                .x_axis_label("x2")
                .y_axis_label("x3")
                .data_aspect(1.0)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new("x3 vs x2", phase));
                });
        });
    }
}

pub mod table;

pub use table::{write_trajectory, write_trajectory_delimited, write_trajectory_file};

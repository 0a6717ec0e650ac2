use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::sim::Trajectory;

/// Write a trajectory as a whitespace-delimited table.
///
/// Header `t x1 x2 ... xN`, then one row per recorded step. Values use
/// scientific notation: time keeps 9 significant digits, state values 13, so
/// small magnitudes (a decayed state near `1e-13`) lose no precision.
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    write_trajectory_delimited(writer, trajectory, ' ')
}

/// Same layout as [`write_trajectory`] with a custom column separator
/// (`','` for CSV).
pub fn write_trajectory_delimited<W: Write>(
    writer: &mut W,
    trajectory: &Trajectory,
    delimiter: char,
) -> io::Result<()> {
    write!(writer, "t")?;
    for j in 1..=trajectory.dimension() {
        write!(writer, "{delimiter}x{j}")?;
    }
    writeln!(writer)?;

    for (t, row) in trajectory.iter() {
        write!(writer, "{t:.8e}")?;
        for v in row.iter() {
            write!(writer, "{delimiter}{v:.12e}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Write the whitespace-delimited table to a file at `path`.
pub fn write_trajectory_file<P: AsRef<Path>>(path: P, trajectory: &Trajectory) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    write_trajectory(&mut file, trajectory)?;
    file.flush()
}

use nalgebra::{DMatrix, DVector, RowDVector};

// ---------------------------------------------------------------------------
// Recorded time history
// ---------------------------------------------------------------------------

/// Time history produced by one `simulate` call.
///
/// `times[i]` pairs with row `i` of `states`, the state *before* step `i`
/// was applied. Row 0 is the initial condition. The buffer is allocated once
/// with its final size and never grows.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    times: Vec<f64>,
    states: DMatrix<f64>,
}

impl Trajectory {
    /// Zeroed buffer with `len` rows of `dim` state columns.
    pub(crate) fn with_len(len: usize, dim: usize) -> Self {
        Self {
            times: vec![0.0; len],
            states: DMatrix::zeros(len, dim),
        }
    }

    /// Store a copy of `state` at row `i`.
    pub(crate) fn record(&mut self, i: usize, t: f64, state: &DVector<f64>) {
        self.times[i] = t;
        self.states.row_mut(i).tr_copy_from(state);
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of state columns.
    pub fn dimension(&self) -> usize {
        self.states.ncols()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// `len() x dimension()` table, one row per recorded step.
    pub fn states(&self) -> &DMatrix<f64> {
        &self.states
    }

    pub fn time(&self, i: usize) -> f64 {
        self.times[i]
    }

    /// Copy of the state recorded at row `i`.
    pub fn state(&self, i: usize) -> DVector<f64> {
        self.states.row(i).transpose()
    }

    /// Time column of state component `j`.
    pub fn component(&self, j: usize) -> DVector<f64> {
        self.states.column(j).into_owned()
    }

    /// Last recorded `(t, state)`.
    pub fn last(&self) -> Option<(f64, DVector<f64>)> {
        let i = self.len().checked_sub(1)?;
        Some((self.times[i], self.state(i)))
    }

    /// Time of the last recorded row, `0.0` for an empty buffer.
    pub fn final_time(&self) -> f64 {
        self.times.last().copied().unwrap_or(0.0)
    }

    /// Iterate `(t, state row)` in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, RowDVector<f64>)> + '_ {
        self.times
            .iter()
            .zip(self.states.row_iter())
            .map(|(&t, row)| (t, row.into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rows() -> Trajectory {
        let mut traj = Trajectory::with_len(2, 3);
        traj.record(0, 0.0, &DVector::from_vec(vec![1.0, 2.0, 3.0]));
        traj.record(1, 0.5, &DVector::from_vec(vec![4.0, 5.0, 6.0]));
        traj
    }

    #[test]
    fn rows_hold_recorded_snapshots() {
        let traj = two_rows();
        assert_eq!(traj.len(), 2);
        assert_eq!(traj.dimension(), 3);
        assert_eq!(traj.times(), &[0.0, 0.5]);
        assert_eq!(traj.state(1).as_slice(), &[4.0, 5.0, 6.0]);
        assert_eq!(traj.component(2).as_slice(), &[3.0, 6.0]);
        assert_eq!(traj.states()[(0, 1)], 2.0);
    }

    #[test]
    fn last_and_final_time() {
        let traj = two_rows();
        let (t, x) = traj.last().unwrap();
        assert_eq!(t, 0.5);
        assert_eq!(x[0], 4.0);
        assert_eq!(traj.final_time(), 0.5);

        let empty = Trajectory::with_len(0, 3);
        assert!(empty.is_empty());
        assert!(empty.last().is_none());
        assert_eq!(empty.final_time(), 0.0);
    }

    #[test]
    fn recording_copies_the_state() {
        let mut traj = Trajectory::with_len(1, 2);
        let mut x = DVector::from_vec(vec![1.0, 1.0]);
        traj.record(0, 0.0, &x);
        x[0] = 99.0;
        assert_eq!(traj.state(0)[0], 1.0);
    }

    #[test]
    fn iter_is_chronological() {
        let traj = two_rows();
        let rows: Vec<_> = traj.iter().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, 0.0);
        assert_eq!(rows[1].1[2], 6.0);
    }
}

use super::labeler::{ClusterLabels, EquivalenceTable};
use super::lattice::{Spin, SpinGrid};
use super::random::UniformSource;
use crate::error::Result;

/// Result of one cluster reassignment pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlipOutcome {
    /// Number of sites whose spin changed
    pub flips: usize,
    /// Number of distinct clusters on the lattice
    pub clusters: usize,
}

/// Assigns every cluster a fresh spin, up or down with probability 1/2
///
/// One draw per cluster, independent of the cluster size, in order of first
/// appearance in the raster scan.
#[derive(Debug, Default, Clone)]
pub struct ClusterFlipper {
    assigned: Vec<Option<Spin>>,
}

impl ClusterFlipper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flip<R: UniformSource + ?Sized>(
        &mut self,
        grid: &mut SpinGrid,
        labels: &mut ClusterLabels,
        table: &EquivalenceTable,
        rng: &mut R,
    ) -> Result<FlipOutcome> {
        labels.canonicalize(table)?;

        self.assigned.clear();
        self.assigned.resize(table.capacity(), None);

        let mut outcome = FlipOutcome::default();
        for (i, j) in grid.sites() {
            let label = labels.get(i, j);
            let new_spin = match self.assigned[label] {
                Some(spin) => spin,
                None => {
                    let spin = if rng.next_uniform() < 0.5 {
                        Spin::Up
                    } else {
                        Spin::Down
                    };
                    self.assigned[label] = Some(spin);
                    outcome.clusters += 1;
                    spin
                }
            };

            if grid.spin(i, j) != new_spin {
                grid.set(i, j, new_spin);
                outcome.flips += 1;
            }
        }

        Ok(outcome)
    }
}

use super::lattice::SpinGrid;

/// Energy and magnetization of a single configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Total energy in units of J
    pub energy: f64,
    /// Magnetization per site, in [-1, 1]
    pub magnetization: f64,
}

impl Measurement {
    pub fn of(grid: &SpinGrid) -> Self {
        Self {
            energy: energy(grid),
            magnetization: magnetization(grid),
        }
    }
}

/// Total energy `-1/2 Σ s_ij (s_i-1,j + s_i+1,j + s_i,j-1 + s_i,j+1)`
///
/// Every bond is seen from both ends, hence the factor 1/2.
pub fn energy(grid: &SpinGrid) -> f64 {
    let mut sum: i64 = 0;
    for (i, j) in grid.sites() {
        let spin = grid.spin(i, j).value() as i64;
        let neighbours = grid.spin(grid.previous(i), j).value() as i64
            + grid.spin(grid.neighbor(i), j).value() as i64
            + grid.spin(i, grid.previous(j)).value() as i64
            + grid.spin(i, grid.neighbor(j)).value() as i64;
        sum -= spin * neighbours;
    }
    0.5 * sum as f64
}

/// Magnetization per site `(1/L²) Σ s_ij`
pub fn magnetization(grid: &SpinGrid) -> f64 {
    let total: i64 = grid
        .sites()
        .map(|(i, j)| grid.spin(i, j).value() as i64)
        .sum();
    total as f64 / grid.num_sites() as f64
}

pub fn energy_per_site(grid: &SpinGrid) -> f64 {
    energy(grid) / grid.num_sites() as f64
}

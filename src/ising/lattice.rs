use itertools::iproduct;
use nalgebra::DMatrix;
use std::fmt;

use crate::error::{Result, SimulationError};

/// A single Ising spin, either up (+1) or down (-1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    Up,
    Down,
}

impl Spin {
    /// Numeric value of the spin: +1 or -1
    #[inline]
    pub fn value(self) -> i8 {
        match self {
            Spin::Up => 1,
            Spin::Down => -1,
        }
    }

    #[inline]
    pub fn flipped(self) -> Spin {
        match self {
            Spin::Up => Spin::Down,
            Spin::Down => Spin::Up,
        }
    }
}

/// Periodic successor of a lattice coordinate: `coord + 1 mod size`
#[inline]
pub fn periodic_next(coord: usize, size: usize) -> usize {
    if coord + 1 == size {
        0
    } else {
        coord + 1
    }
}

/// Periodic predecessor of a lattice coordinate: `coord - 1 mod size`
#[inline]
pub fn periodic_prev(coord: usize, size: usize) -> usize {
    if coord == 0 {
        size - 1
    } else {
        coord - 1
    }
}

/// L x L square lattice of Ising spins with periodic boundary conditions
///
/// Site `(i, j)` is row `i`, column `j`. The side length is fixed for the
/// lifetime of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SpinGrid {
    size: usize,
    spins: DMatrix<Spin>,
}

impl SpinGrid {
    /// Create an L x L grid with every spin up (ordered state)
    pub fn new_ordered(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(SimulationError::InvalidLatticeSize(size));
        }
        Ok(Self {
            size,
            spins: DMatrix::from_element(size, size, Spin::Up),
        })
    }

    /// Build a grid from spins given in row-major order
    pub fn from_rows(size: usize, spins: &[Spin]) -> Result<Self> {
        if size == 0 || spins.len() != size * size {
            return Err(SimulationError::InvalidLatticeSize(size));
        }
        Ok(Self {
            size,
            spins: DMatrix::from_row_slice(size, size, spins),
        })
    }

    /// Reset every site to the ordered (all up) state
    pub fn reset_ordered(&mut self) {
        self.spins.fill(Spin::Up);
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of sites, L²
    #[inline]
    pub fn num_sites(&self) -> usize {
        self.size * self.size
    }

    #[inline]
    pub fn spin(&self, i: usize, j: usize) -> Spin {
        self.spins[(i, j)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, spin: Spin) {
        self.spins[(i, j)] = spin;
    }

    /// Periodic successor of `coord` on this lattice
    #[inline]
    pub fn neighbor(&self, coord: usize) -> usize {
        periodic_next(coord, self.size)
    }

    /// Periodic predecessor of `coord` on this lattice
    #[inline]
    pub fn previous(&self, coord: usize) -> usize {
        periodic_prev(coord, self.size)
    }

    /// All sites in raster order (row-major, i then j)
    pub fn sites(&self) -> impl Iterator<Item = (usize, usize)> {
        let size = self.size;
        iproduct!(0..size, 0..size)
    }

    /// Whether every site carries the same spin
    pub fn is_uniform(&self) -> bool {
        let first = self.spin(0, 0);
        self.spins.iter().all(|&s| s == first)
    }

    pub fn count(&self, spin: Spin) -> usize {
        self.spins.iter().filter(|&&s| s == spin).count()
    }
}

impl fmt::Display for SpinGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            for j in 0..self.size {
                let glyph = match self.spin(i, j) {
                    Spin::Up => "↑",
                    Spin::Down => "↓",
                };
                write!(f, "{:>2}", glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

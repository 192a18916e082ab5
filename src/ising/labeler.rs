//! Connected-component labeling of the frozen-bond graph
//!
//! A single raster scan assigns provisional labels and records label
//! equivalences in a union-find parent table. Only backward neighbours and
//! the periodic wrap partners are examined at each site: every forward bond
//! is seen later from the other end, and a wrap partner was already visited
//! at the start of its row or column.

use nalgebra::DMatrix;

use super::bonds::FrozenBonds;
use crate::error::{Result, SimulationError};

/// Union-find parent table over provisional cluster labels
///
/// A label is canonical when it is its own parent. Lookups walk the parent
/// chain without compressing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceTable {
    parent: Vec<usize>,
    next_label: usize,
}

impl EquivalenceTable {
    /// Table able to hold `capacity` distinct labels (L² for an L x L lattice)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: (0..capacity).collect(),
            next_label: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.parent.len()
    }

    /// Number of labels handed out so far
    pub fn labels_used(&self) -> usize {
        self.next_label
    }

    /// Allocate the next unused label as its own root
    pub fn create_label(&mut self) -> Result<usize> {
        if self.next_label >= self.parent.len() {
            return Err(SimulationError::LabelOverflow {
                capacity: self.parent.len(),
            });
        }
        let label = self.next_label;
        self.parent[label] = label;
        self.next_label += 1;
        Ok(label)
    }

    #[inline]
    pub fn parent(&self, label: usize) -> usize {
        self.parent[label]
    }

    #[inline]
    pub fn is_canonical(&self, label: usize) -> bool {
        self.parent[label] == label
    }

    /// Walk the parent chain from `label` to its canonical representative
    ///
    /// A chain longer than the table means a cycle, which is reported
    /// instead of looping forever.
    pub fn find(&self, label: usize) -> Result<usize> {
        let limit = self.parent.len();
        let mut current = label;
        let mut steps = 0;
        while self.parent[current] != current {
            current = self.parent[current];
            steps += 1;
            if steps > limit {
                return Err(SimulationError::CorruptEquivalenceTable { label, steps });
            }
        }
        Ok(current)
    }

    /// Redirect a canonical label to another label
    #[inline]
    pub fn point_to(&mut self, root: usize, target: usize) {
        self.parent[root] = target;
    }

    /// Reset to an empty table, keeping the allocation
    pub fn clear(&mut self) {
        for (label, parent) in self.parent.iter_mut().enumerate() {
            *parent = label;
        }
        self.next_label = 0;
    }
}

/// Per-site cluster labels produced by [`ClusterLabeler`]
///
/// Labels are provisional until resolved through the equivalence table with
/// [`canonicalize`](Self::canonicalize).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterLabels {
    labels: DMatrix<usize>,
}

impl ClusterLabels {
    pub fn new(size: usize) -> Self {
        Self {
            labels: DMatrix::from_element(size, size, 0),
        }
    }

    pub fn size(&self) -> usize {
        self.labels.nrows()
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> usize {
        self.labels[(i, j)]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, label: usize) {
        self.labels[(i, j)] = label;
    }

    /// Replace every label by its canonical representative
    pub fn canonicalize(&mut self, table: &EquivalenceTable) -> Result<()> {
        for label in self.labels.iter_mut() {
            *label = table.find(*label)?;
        }
        Ok(())
    }

    /// Number of distinct labels currently on the grid
    pub fn distinct(&self) -> usize {
        let mut labels: Vec<usize> = self.labels.iter().copied().collect();
        labels.sort_unstable();
        labels.dedup();
        labels.len()
    }
}

/// Raster-scan cluster labeler with online union-find
#[derive(Debug, Default, Clone, Copy)]
pub struct ClusterLabeler;

impl ClusterLabeler {
    pub fn new() -> Self {
        Self
    }

    /// Label every site of the lattice by its frozen-bond cluster
    pub fn label(&self, bonds: &FrozenBonds) -> Result<(ClusterLabels, EquivalenceTable)> {
        let size = bonds.size();
        let mut labels = ClusterLabels::new(size);
        let mut table = EquivalenceTable::with_capacity(size * size);
        self.label_into(bonds, &mut labels, &mut table)?;
        Ok((labels, table))
    }

    /// Label into caller-provided buffers, clearing the table first
    pub fn label_into(
        &self,
        bonds: &FrozenBonds,
        labels: &mut ClusterLabels,
        table: &mut EquivalenceTable,
    ) -> Result<()> {
        let size = bonds.size();
        debug_assert_eq!(labels.size(), size);
        debug_assert_eq!(table.capacity(), size * size);
        table.clear();
        if size == 0 {
            return Ok(());
        }

        let last = size - 1;
        let mut linked = [(0usize, 0usize); 4];
        let mut roots = [0usize; 4];

        for i in 0..size {
            for j in 0..size {
                let mut count = 0;

                if i > 0 && bonds.row.is_frozen(i - 1, j) {
                    linked[count] = (i - 1, j);
                    count += 1;
                }
                // wrap partner (0, j) was visited at the top of this column
                if i == last && i != 0 && bonds.row.is_frozen(i, j) {
                    linked[count] = (0, j);
                    count += 1;
                }
                if j > 0 && bonds.col.is_frozen(i, j - 1) {
                    linked[count] = (i, j - 1);
                    count += 1;
                }
                if j == last && j != 0 && bonds.col.is_frozen(i, j) {
                    linked[count] = (i, 0);
                    count += 1;
                }

                if count == 0 {
                    let label = table.create_label()?;
                    labels.set(i, j, label);
                    continue;
                }

                let mut min_label = usize::MAX;
                for k in 0..count {
                    let (ni, nj) = linked[k];
                    roots[k] = table.find(labels.get(ni, nj))?;
                    min_label = min_label.min(roots[k]);
                }

                labels.set(i, j, min_label);
                for k in 0..count {
                    let (ni, nj) = linked[k];
                    table.point_to(roots[k], min_label);
                    labels.set(ni, nj, min_label);
                }
            }
        }

        Ok(())
    }
}

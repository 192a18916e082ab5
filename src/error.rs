//! Error types for the Swendsen-Wang simulation core
//!
//! Every variant is a fatal condition for the temperature run that raised it.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Bond freezing needs a strictly positive, finite temperature
    #[error("temperature must be positive and finite, got {0}")]
    InvalidTemperature(f64),

    /// Only ferromagnetic coupling (J > 0) is supported
    #[error("coupling constant must be positive and finite, got {0}")]
    InvalidCoupling(f64),

    #[error("lattice size must be at least 1, got {0}")]
    InvalidLatticeSize(usize),

    /// A parent chain in the equivalence table did not reach a root
    #[error("equivalence table corrupted: chain from label {label} exceeded {steps} steps")]
    CorruptEquivalenceTable { label: usize, steps: usize },

    /// The labeler asked for more labels than there are sites
    #[error("cluster label counter exceeded capacity of {capacity} labels")]
    LabelOverflow { capacity: usize },

    #[error("invalid sweep setup: {0}")]
    InvalidSweep(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;

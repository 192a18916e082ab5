pub mod analysis;
pub mod bonds;
pub mod driver;
pub mod flipper;
pub mod labeler;
pub mod lattice;
pub mod observables;
pub mod random;
pub mod sweep;

pub use bonds::{BondField, BondFreezer, Direction, FrozenBonds};
pub use driver::{
    Phase, RunDiagnostics, RunSummary, SweepSettings, TemperatureRun, ThermalAverages,
};
pub use flipper::{ClusterFlipper, FlipOutcome};
pub use labeler::{ClusterLabeler, ClusterLabels, EquivalenceTable};
pub use lattice::{Spin, SpinGrid};
pub use observables::Measurement;
pub use random::UniformSource;
pub use sweep::{linspace, ObservablePoint, SweepResults, TemperatureSweep};

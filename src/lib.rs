pub mod error;
pub mod ising;

pub use error::{Result, SimulationError};
pub use ising::{
    ClusterFlipper, ClusterLabeler, SpinGrid, SweepResults, TemperatureRun, TemperatureSweep,
};

//! Configuration management for Swendsen-Wang temperature sweeps
//!
//! Values come from an optional YAML file, are overridden by command-line
//! arguments and fall back to the defaults below.

mod args;

pub use args::Args;

use serde::{Deserialize, Serialize};
use swang::ising::linspace;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub lattice_size: Option<usize>,
    pub coupling: Option<f64>,
    pub equilibration_sweeps: Option<usize>,
    pub measurement_sweeps: Option<usize>,
    pub temperatures: Option<TemperatureGrid>,
    pub seed: Option<u64>,
    pub parallel: Option<bool>,
    pub csv_output: Option<String>,
}

/// Temperature set: explicit list or evenly spaced range
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TemperatureGrid {
    Explicit { values: Vec<f64> },
    Linear { min: f64, max: f64, count: usize },
}

impl Default for TemperatureGrid {
    fn default() -> Self {
        TemperatureGrid::Linear {
            min: 0.1,
            max: 5.0,
            count: 20,
        }
    }
}

impl TemperatureGrid {
    pub fn values(&self) -> Vec<f64> {
        match self {
            TemperatureGrid::Explicit { values } => values.clone(),
            TemperatureGrid::Linear { min, max, count } => linspace(*min, *max, *count),
        }
    }
}

impl Config {
    /// Apply default values to any missing parameters
    pub fn with_defaults(mut self) -> Self {
        if self.lattice_size.is_none() {
            self.lattice_size = Some(10);
        }
        if self.coupling.is_none() {
            self.coupling = Some(1.0);
        }
        if self.equilibration_sweeps.is_none() {
            self.equilibration_sweeps = Some(1000);
        }
        if self.measurement_sweeps.is_none() {
            self.measurement_sweeps = Some(10000);
        }
        if self.temperatures.is_none() {
            self.temperatures = Some(TemperatureGrid::default());
        }
        if self.parallel.is_none() {
            self.parallel = Some(false);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = Config::default().with_defaults();
        assert_eq!(config.lattice_size, Some(10));
        assert_eq!(config.coupling, Some(1.0));
        assert_eq!(config.equilibration_sweeps, Some(1000));
        assert_eq!(config.measurement_sweeps, Some(10000));
        assert_eq!(config.parallel, Some(false));
        assert!(config.seed.is_none());

        let temps = config.temperatures.unwrap().values();
        assert_eq!(temps.len(), 20);
        assert_eq!(temps[0], 0.1);
        assert_eq!(temps[19], 5.0);
    }

    #[test]
    fn test_parse_linear_grid() {
        let yaml = "lattice_size: 16\ntemperatures:\n  min: 1.0\n  max: 3.0\n  count: 5\nseed: 7\n";
        let config: Config = serde_yml::from_str::<Config>(yaml).unwrap().with_defaults();
        assert_eq!(config.lattice_size, Some(16));
        assert_eq!(config.seed, Some(7));
        assert_eq!(
            config.temperatures.unwrap().values(),
            vec![1.0, 1.5, 2.0, 2.5, 3.0]
        );
    }

    #[test]
    fn test_parse_explicit_grid() {
        let yaml = "temperatures:\n  values: [0.5, 2.269, 4.0]\nparallel: true\n";
        let config: Config = serde_yml::from_str::<Config>(yaml).unwrap().with_defaults();
        assert_eq!(config.parallel, Some(true));
        assert_eq!(
            config.temperatures,
            Some(TemperatureGrid::Explicit {
                values: vec![0.5, 2.269, 4.0]
            })
        );
    }
}

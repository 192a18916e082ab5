//! Temperature sweep over independent Swendsen-Wang runs
//!
//! Every temperature restarts from the ordered state with its own random
//! stream, so runs share no state and can be scheduled on a rayon pool
//! without changing any result.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use tracing::info;

use super::driver::{RunDiagnostics, RunSummary, SweepSettings, TemperatureRun};
use super::lattice::SpinGrid;
use super::random::stream_seed;
use crate::error::{Result, SimulationError};

/// `count` evenly spaced values from `start` to `end`, both included
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|k| {
                    if k == count - 1 {
                        end
                    } else {
                        start + step * k as f64
                    }
                })
                .collect()
        }
    }
}

/// Derived observables at a single temperature
#[derive(Debug, Clone)]
pub struct ObservablePoint {
    pub temperature: f64,
    /// Mean energy per site
    pub energy: f64,
    /// Mean absolute magnetization per site
    pub magnetization: f64,
    pub susceptibility: f64,
    pub specific_heat: f64,
    pub diagnostics: RunDiagnostics,
    pub final_grid: SpinGrid,
}

impl From<RunSummary> for ObservablePoint {
    fn from(summary: RunSummary) -> Self {
        let t = summary.temperature;
        Self {
            temperature: t,
            energy: summary.averages.energy,
            magnetization: summary.averages.magnetization,
            susceptibility: summary.averages.susceptibility(t),
            specific_heat: summary.averages.specific_heat(t),
            diagnostics: summary.diagnostics,
            final_grid: summary.final_grid,
        }
    }
}

/// Observables of a whole sweep in temperature order
#[derive(Debug, Clone)]
pub struct SweepResults {
    pub seed: u64,
    pub points: Vec<ObservablePoint>,
}

impl SweepResults {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn temperatures(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.temperature).collect()
    }

    pub fn energies(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.energy).collect()
    }

    pub fn magnetizations(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.magnetization).collect()
    }

    pub fn susceptibilities(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.susceptibility).collect()
    }

    pub fn specific_heats(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.specific_heat).collect()
    }
}

/// A study of the Ising model over a set of temperatures
#[derive(Debug, Clone)]
pub struct TemperatureSweep {
    settings: SweepSettings,
    temperatures: Vec<f64>,
    seed: u64,
    parallel: bool,
}

impl TemperatureSweep {
    pub fn new(settings: SweepSettings, temperatures: Vec<f64>, seed: u64) -> Result<Self> {
        settings.validate()?;
        if temperatures.is_empty() {
            return Err(SimulationError::InvalidSweep(
                "temperature set is empty".to_string(),
            ));
        }
        if let Some(&t) = temperatures.iter().find(|&&t| !(t > 0.0) || !t.is_finite()) {
            return Err(SimulationError::InvalidTemperature(t));
        }
        Ok(Self {
            settings,
            temperatures,
            seed,
            parallel: false,
        })
    }

    /// Run one temperature per rayon task
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn settings(&self) -> &SweepSettings {
        &self.settings
    }

    pub fn temperatures(&self) -> &[f64] {
        &self.temperatures
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run the full study at the temperature with index `index`
    pub fn run_point(&self, index: usize) -> Result<ObservablePoint> {
        let temperature = self.temperatures[index];
        let mut rng = StdRng::seed_from_u64(stream_seed(self.seed, index));
        let summary = TemperatureRun::new(temperature, self.settings)?.run(&mut rng)?;
        let point = ObservablePoint::from(summary);
        info!(
            "T = {:.4}  E = {:+.5}  |M| = {:.5}  chi = {:.5}  C_V = {:.5}",
            point.temperature,
            point.energy,
            point.magnetization,
            point.susceptibility,
            point.specific_heat
        );
        Ok(point)
    }

    pub fn run(&self) -> Result<SweepResults> {
        info!(
            "Swendsen-Wang sweep: L = {}, J = {}, {} + {} sweeps at {} temperatures ({})",
            self.settings.lattice_size,
            self.settings.coupling,
            self.settings.equilibration_sweeps,
            self.settings.measurement_sweeps,
            self.temperatures.len(),
            if self.parallel { "parallel" } else { "sequential" }
        );

        let indices = 0..self.temperatures.len();
        let points = if self.parallel {
            indices
                .into_par_iter()
                .map(|k| self.run_point(k))
                .collect::<Vec<_>>()
        } else {
            indices.map(|k| self.run_point(k)).collect::<Vec<_>>()
        };

        // first failure in temperature order wins
        let points = points.into_iter().collect::<Result<Vec<_>>>()?;
        Ok(SweepResults {
            seed: self.seed,
            points,
        })
    }
}

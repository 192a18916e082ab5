//! Single-temperature Swendsen-Wang run
//!
//! A run starts from the ordered state, performs the equilibration sweeps
//! with observables discarded, then the measurement sweeps with energy and
//! magnetization accumulated after every sweep.

use tracing::debug;

use super::bonds::{BondFreezer, FrozenBonds};
use super::flipper::{ClusterFlipper, FlipOutcome};
use super::labeler::{ClusterLabeler, ClusterLabels, EquivalenceTable};
use super::lattice::SpinGrid;
use super::observables::Measurement;
use super::random::UniformSource;
use crate::error::{Result, SimulationError};

/// Sweep counts and coupling shared by every temperature of a study
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepSettings {
    /// Lattice side L
    pub lattice_size: usize,
    /// Coupling constant J (> 0, ferromagnetic)
    pub coupling: f64,
    /// Sweeps discarded before measuring (ESTEP)
    pub equilibration_sweeps: usize,
    /// Sweeps contributing to the averages (STEP)
    pub measurement_sweeps: usize,
}

impl Default for SweepSettings {
    fn default() -> Self {
        Self {
            lattice_size: 10,
            coupling: 1.0,
            equilibration_sweeps: 1000,
            measurement_sweeps: 10000,
        }
    }
}

impl SweepSettings {
    pub fn validate(&self) -> Result<()> {
        if self.lattice_size == 0 {
            return Err(SimulationError::InvalidLatticeSize(self.lattice_size));
        }
        if !(self.coupling > 0.0) || !self.coupling.is_finite() {
            return Err(SimulationError::InvalidCoupling(self.coupling));
        }
        if self.measurement_sweeps == 0 {
            return Err(SimulationError::InvalidSweep(
                "at least one measurement sweep is required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Equilibrating,
    Measuring,
    Done,
}

/// Running sums over the measurement phase
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Accumulator {
    energy: f64,
    abs_magnetization: f64,
    energy_sq: f64,
    magnetization_sq: f64,
    clusters: usize,
    flips: usize,
    samples: usize,
}

impl Accumulator {
    fn record(&mut self, measurement: Measurement, outcome: FlipOutcome) {
        self.energy += measurement.energy;
        self.abs_magnetization += measurement.magnetization.abs();
        self.energy_sq += measurement.energy * measurement.energy;
        self.magnetization_sq += measurement.magnetization * measurement.magnetization;
        self.clusters += outcome.clusters;
        self.flips += outcome.flips;
        self.samples += 1;
    }
}

/// Per-site moments of a completed measurement phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalAverages {
    /// <E> / L²
    pub energy: f64,
    /// <|M|>
    pub magnetization: f64,
    /// <E²> / L⁴
    pub energy_sq: f64,
    /// <M²>
    pub magnetization_sq: f64,
}

impl ThermalAverages {
    /// χ = (<M²> - <|M|>²) / T
    pub fn susceptibility(&self, temperature: f64) -> f64 {
        (self.magnetization_sq - self.magnetization * self.magnetization) / temperature
    }

    /// C_V = (<E²> - <E>²) / T²
    pub fn specific_heat(&self, temperature: f64) -> f64 {
        (self.energy_sq - self.energy * self.energy) / (temperature * temperature)
    }
}

/// Cluster statistics gathered while measuring
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunDiagnostics {
    /// Mean number of clusters per sweep
    pub mean_clusters: f64,
    /// Mean fraction of sites whose spin changed per sweep
    pub mean_flip_fraction: f64,
}

/// Everything a finished run hands back to the temperature sweep
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub temperature: f64,
    pub averages: ThermalAverages,
    pub diagnostics: RunDiagnostics,
    pub final_grid: SpinGrid,
}

/// Swendsen-Wang simulation at one temperature
///
/// Owns the spin grid and the per-sweep scratch buffers. The stages of a
/// sweep run strictly in order: freeze, label, flip, then measure.
#[derive(Debug, Clone)]
pub struct TemperatureRun {
    settings: SweepSettings,
    phase: Phase,
    completed: usize,
    grid: SpinGrid,
    freezer: BondFreezer,
    labeler: ClusterLabeler,
    flipper: ClusterFlipper,
    bonds: FrozenBonds,
    labels: ClusterLabels,
    table: EquivalenceTable,
    accumulator: Accumulator,
}

impl TemperatureRun {
    /// Set up a run in the ordered state
    pub fn new(temperature: f64, settings: SweepSettings) -> Result<Self> {
        settings.validate()?;
        let freezer = BondFreezer::new(settings.coupling, temperature)?;
        let size = settings.lattice_size;
        let phase = if settings.equilibration_sweeps == 0 {
            Phase::Measuring
        } else {
            Phase::Equilibrating
        };

        Ok(Self {
            settings,
            phase,
            completed: 0,
            grid: SpinGrid::new_ordered(size)?,
            freezer,
            labeler: ClusterLabeler::new(),
            flipper: ClusterFlipper::new(),
            bonds: FrozenBonds::empty(size),
            labels: ClusterLabels::new(size),
            table: EquivalenceTable::with_capacity(size * size),
            accumulator: Accumulator::default(),
        })
    }

    pub fn temperature(&self) -> f64 {
        self.freezer.temperature()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn grid(&self) -> &SpinGrid {
        &self.grid
    }

    /// Sweeps completed in the current phase
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// One Swendsen-Wang update of the whole lattice
    pub fn sweep<R: UniformSource + ?Sized>(&mut self, rng: &mut R) -> Result<FlipOutcome> {
        self.freezer.freeze_into(&self.grid, &mut self.bonds, rng);
        self.labeler
            .label_into(&self.bonds, &mut self.labels, &mut self.table)?;
        self.flipper
            .flip(&mut self.grid, &mut self.labels, &self.table, rng)
    }

    /// Perform one sweep of the current phase and move to the next phase
    /// once its sweep count is reached
    pub fn advance<R: UniformSource + ?Sized>(&mut self, rng: &mut R) -> Result<Phase> {
        match self.phase {
            Phase::Equilibrating => {
                self.sweep(rng)?;
                self.completed += 1;
                if self.completed >= self.settings.equilibration_sweeps {
                    debug!(
                        "T = {:.4}: equilibrated after {} sweeps, E/N = {:.5}",
                        self.temperature(),
                        self.completed,
                        super::observables::energy_per_site(&self.grid)
                    );
                    self.phase = Phase::Measuring;
                    self.completed = 0;
                }
            }
            Phase::Measuring => {
                let outcome = self.sweep(rng)?;
                self.accumulator.record(Measurement::of(&self.grid), outcome);
                self.completed += 1;
                if self.completed >= self.settings.measurement_sweeps {
                    self.phase = Phase::Done;
                }
            }
            Phase::Done => {}
        }
        Ok(self.phase)
    }

    /// Averages of the measurement phase, available once the run is done
    pub fn averages(&self) -> Option<ThermalAverages> {
        if self.phase != Phase::Done {
            return None;
        }
        let acc = &self.accumulator;
        let steps = acc.samples as f64;
        let sites = self.grid.num_sites() as f64;
        Some(ThermalAverages {
            energy: acc.energy / steps / sites,
            magnetization: acc.abs_magnetization / steps,
            energy_sq: acc.energy_sq / steps / (sites * sites),
            magnetization_sq: acc.magnetization_sq / steps,
        })
    }

    pub fn diagnostics(&self) -> RunDiagnostics {
        let acc = &self.accumulator;
        if acc.samples == 0 {
            return RunDiagnostics::default();
        }
        let steps = acc.samples as f64;
        RunDiagnostics {
            mean_clusters: acc.clusters as f64 / steps,
            mean_flip_fraction: acc.flips as f64 / steps / self.grid.num_sites() as f64,
        }
    }

    /// Drive the run through both phases to completion
    pub fn run<R: UniformSource + ?Sized>(mut self, rng: &mut R) -> Result<RunSummary> {
        while self.advance(rng)? != Phase::Done {}

        let temperature = self.temperature();
        let diagnostics = self.diagnostics();
        let averages = self.averages().ok_or_else(|| {
            SimulationError::InvalidSweep("run finished without measurements".to_string())
        })?;
        debug!(
            "T = {:.4}: {:.2} clusters/sweep, {:.3} flip fraction",
            temperature, diagnostics.mean_clusters, diagnostics.mean_flip_fraction
        );

        Ok(RunSummary {
            temperature,
            averages,
            diagnostics,
            final_grid: self.grid,
        })
    }
}

use crate::config::{Args, Config, TemperatureGrid};
use color_eyre::eyre::{Result, WrapErr};
use rand::Rng;
use swang::ising::SweepSettings;
use swang::TemperatureSweep;
use tracing::{info, warn};

/// A fully resolved sweep plus where its results go
#[derive(Debug)]
pub struct SweepPlan {
    pub sweep: TemperatureSweep,
    pub csv_output: Option<String>,
}

/// Merge CLI overrides, configuration file and defaults into a sweep
pub fn build_sweep(args: &Args, config: &Config) -> Result<SweepPlan> {
    let defaults = SweepSettings::default();
    let settings = SweepSettings {
        lattice_size: args
            .lattice_size
            .or(config.lattice_size)
            .unwrap_or(defaults.lattice_size),
        coupling: args
            .coupling
            .or(config.coupling)
            .unwrap_or(defaults.coupling),
        equilibration_sweeps: args
            .equilibration_sweeps
            .or(config.equilibration_sweeps)
            .unwrap_or(defaults.equilibration_sweeps),
        measurement_sweeps: args
            .measurement_sweeps
            .or(config.measurement_sweeps)
            .unwrap_or(defaults.measurement_sweeps),
    };

    if settings.lattice_size < 2 {
        warn!(
            "Lattice size {} has no distinct neighbours; observables are trivial",
            settings.lattice_size
        );
    }

    let temperatures = resolve_temperatures(args, config).values();
    if temperatures.iter().any(|&t| t > 100.0) {
        warn!("Temperatures above 100 J/k_B freeze almost no bonds");
    }

    let seed = match args.seed.or(config.seed) {
        Some(seed) => seed,
        None => {
            let seed = rand::thread_rng().gen::<u64>();
            info!("No seed configured, drew base seed {}", seed);
            seed
        }
    };

    let parallel = args.parallel || config.parallel.unwrap_or(false);
    let sweep = TemperatureSweep::new(settings, temperatures, seed)
        .wrap_err("Invalid sweep configuration")?
        .parallel(parallel);

    Ok(SweepPlan {
        sweep,
        csv_output: args.csv.clone().or_else(|| config.csv_output.clone()),
    })
}

/// CLI range arguments replace the corresponding parts of the configured grid
fn resolve_temperatures(args: &Args, config: &Config) -> TemperatureGrid {
    let configured = config.temperatures.clone().unwrap_or_default();
    if args.t_min.is_none() && args.t_max.is_none() && args.t_count.is_none() {
        return configured;
    }

    let (min, max, count) = match configured {
        TemperatureGrid::Linear { min, max, count } => (min, max, count),
        TemperatureGrid::Explicit { values } if !values.is_empty() => {
            let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
            let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (lo, hi, values.len())
        }
        TemperatureGrid::Explicit { .. } => (0.1, 5.0, 20),
    };

    TemperatureGrid::Linear {
        min: args.t_min.unwrap_or(min),
        max: args.t_max.unwrap_or(max),
        count: args.t_count.unwrap_or(count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let config = Config {
            lattice_size: Some(8),
            measurement_sweeps: Some(50),
            seed: Some(1),
            ..Config::default()
        }
        .with_defaults();
        let args = Args {
            lattice_size: Some(4),
            seed: Some(99),
            t_count: Some(2),
            ..Args::default()
        };

        let plan = build_sweep(&args, &config).unwrap();
        let settings = plan.sweep.settings();
        assert_eq!(settings.lattice_size, 4);
        assert_eq!(settings.measurement_sweeps, 50);
        assert_eq!(settings.equilibration_sweeps, 1000);
        assert_eq!(plan.sweep.seed(), 99);
        assert_eq!(plan.sweep.temperatures(), &[0.1, 5.0]);
    }

    #[test]
    fn test_explicit_grid_kept_without_range_overrides() {
        let config = Config {
            temperatures: Some(TemperatureGrid::Explicit {
                values: vec![1.0, 2.0],
            }),
            seed: Some(3),
            csv_output: Some("out.csv".to_string()),
            ..Config::default()
        }
        .with_defaults();

        let plan = build_sweep(&Args::default(), &config).unwrap();
        assert_eq!(plan.sweep.temperatures(), &[1.0, 2.0]);
        assert_eq!(plan.csv_output.as_deref(), Some("out.csv"));
    }

    #[test]
    fn test_rejects_non_positive_temperature() {
        let config = Config {
            temperatures: Some(TemperatureGrid::Explicit {
                values: vec![0.0, 1.0],
            }),
            seed: Some(3),
            ..Config::default()
        }
        .with_defaults();

        assert!(build_sweep(&Args::default(), &config).is_err());
    }
}

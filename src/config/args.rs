//! Command-line argument parsing for Swendsen-Wang sweeps

use clap::Parser;

/// Swendsen-Wang Monte Carlo study of the 2D Ising ferromagnet
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to an optional YAML configuration file
    #[arg(short, long)]
    pub config_file: Option<String>,

    /// Override lattice side L
    #[arg(short = 'L', long)]
    pub lattice_size: Option<usize>,

    /// Override coupling constant J (must be positive)
    #[arg(long)]
    pub coupling: Option<f64>,

    /// Override number of equilibration sweeps
    #[arg(long)]
    pub equilibration_sweeps: Option<usize>,

    /// Override number of measurement sweeps
    #[arg(long)]
    pub measurement_sweeps: Option<usize>,

    /// Lowest temperature of an evenly spaced grid
    #[arg(long)]
    pub t_min: Option<f64>,

    /// Highest temperature of an evenly spaced grid
    #[arg(long)]
    pub t_max: Option<f64>,

    /// Number of temperatures in an evenly spaced grid
    #[arg(long)]
    pub t_count: Option<usize>,

    /// Base random seed (drawn from entropy when absent)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run temperatures in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Write the observable table as CSV
    #[arg(long)]
    pub csv: Option<String>,

    /// Override output file: (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Print the final spin configuration of every temperature
    #[arg(long)]
    pub show_final: bool,
}

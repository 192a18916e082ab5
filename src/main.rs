//! Swendsen-Wang Command-Line Interface
//!
//! Runs a temperature sweep of the 2D Ising model and reports the
//! thermodynamic observables at every temperature.

use color_eyre::eyre::Result;

mod app;
mod config;
mod io;

use app::SwangApplication;

fn main() -> Result<()> {
    color_eyre::install()?;
    SwangApplication::from_cli()?.run()
}

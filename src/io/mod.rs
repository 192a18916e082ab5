//! Input/Output operations for temperature sweeps
//!
//! This module handles logging setup and export of the observable table.

mod output;

pub use output::{export_csv, setup_output};

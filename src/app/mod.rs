mod report;
mod runner;

use self::runner::build_sweep;

use self::report::{report_final_configurations, report_summary};
use crate::config::{Args, Config};
use crate::io::{export_csv, setup_output};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use std::fs;
use std::path::Path;
use tracing::info;

pub struct SwangApplication {
    args: Args,
    config: Config,
}

impl SwangApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_ref());
        info!("Configuration loaded:\n{:?}", self.config);

        let plan = build_sweep(&self.args, &self.config)?;
        let results = plan
            .sweep
            .run()
            .wrap_err("Swendsen-Wang sweep aborted")?;

        report_summary(&results);
        if self.args.show_final {
            report_final_configurations(&results);
        }

        if let Some(path) = plan.csv_output {
            export_csv(Path::new(&path), &results)?;
        }

        Ok(())
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let Some(path) = args.config_file.as_ref() else {
        return Ok(Config::default().with_defaults());
    };

    let config_content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", path))?;

    let config = serde_yml::from_str::<Config>(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();

    Ok(config)
}

use std::path::{Path, PathBuf};

use log::info;

use trilat_core::field::FieldSettings;
use trilat_models::dist::RngSampler;
use trilat_models::strategy::{Strategy, StrategySettings};
use trilat_output::logger::{initiate_console_logger, initiate_logger, LogSettings};
use trilat_runner::runner::SimulationPlan;

use crate::simulation::config::{BaseConfigReader, SimSettings};
use crate::simulation::error::SimError;

/// Collects everything needed for a batch, whether it comes from a configuration file
/// or from the command line.
pub struct SimulationBuilder {
    field_settings: FieldSettings,
    sim_settings: SimSettings,
    strategies: Option<Vec<StrategySettings>>,
    log_settings: Option<LogSettings>,
    config_path: PathBuf,
}

impl SimulationBuilder {
    pub(crate) fn from_config(base_config_file: &str) -> Result<Self, SimError> {
        let config_path = Path::new(base_config_file)
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let base_config = BaseConfigReader::new(base_config_file).parse()?;
        Ok(Self {
            field_settings: base_config.field_settings,
            sim_settings: base_config.simulation_settings,
            strategies: base_config.strategies,
            log_settings: base_config.log_settings,
            config_path,
        })
    }

    pub(crate) fn from_settings(
        field_settings: FieldSettings,
        seed: Option<u64>,
        runs: usize,
    ) -> Self {
        let sim_settings = SimSettings {
            seed,
            runs,
            ..Default::default()
        };
        Self {
            field_settings,
            sim_settings,
            strategies: None,
            log_settings: None,
            config_path: PathBuf::new(),
        }
    }

    /// Starts the file logger when the configuration asks for one, the console logger
    /// at `console_level` otherwise.
    pub(crate) fn initiate_logging(&self, console_level: &str) -> Result<(), SimError> {
        match &self.log_settings {
            Some(log_settings) => {
                let log_file = initiate_logger(&self.config_path, log_settings)?;
                info!("Logging to {}", log_file.display());
            }
            None => initiate_console_logger(console_level)?,
        }
        Ok(())
    }

    pub(crate) fn plan(&self) -> Result<SimulationPlan, SimError> {
        let params = self.field_settings.validate()?;
        if self.sim_settings.runs == 0 {
            return Err(SimError::NoRuns);
        }
        let strategies = match &self.strategies {
            Some(settings) => settings
                .iter()
                .map(Strategy::with_settings)
                .collect::<Result<Vec<Strategy>, _>>()?,
            None => Strategy::ALL.to_vec(),
        };
        info!(
            "Scenario {}: {} nodes, {} runs, strategies {:?}",
            self.sim_settings.scenario, params.node_count, self.sim_settings.runs, strategies
        );
        Ok(SimulationPlan::builder()
            .params(params)
            .strategies(strategies)
            .runs(self.sim_settings.runs)
            .build())
    }

    pub(crate) fn sampler(&self) -> RngSampler {
        let seed = self.sim_settings.seed.unwrap_or_else(rand::random);
        info!("Using seed {}", seed);
        RngSampler::new(seed)
    }
}

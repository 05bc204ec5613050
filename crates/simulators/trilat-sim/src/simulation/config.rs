use std::path::PathBuf;

use serde::Deserialize;

use trilat_core::field::FieldSettings;
use trilat_models::strategy::StrategySettings;
use trilat_output::logger::LogSettings;

use crate::simulation::error::SimError;

#[derive(Deserialize, Debug, Clone)]
pub struct BaseConfig {
    #[serde(default)]
    pub simulation_settings: SimSettings,
    pub field_settings: FieldSettings,
    pub strategies: Option<Vec<StrategySettings>>,
    pub log_settings: Option<LogSettings>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SimSettings {
    #[serde(default = "default_scenario")]
    pub scenario: String,
    pub seed: Option<u64>,
    #[serde(default = "default_runs")]
    pub runs: usize,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            scenario: default_scenario(),
            seed: None,
            runs: default_runs(),
        }
    }
}

fn default_scenario() -> String {
    "trilateration".to_owned()
}

fn default_runs() -> usize {
    1
}

pub struct BaseConfigReader {
    file_path: PathBuf,
}

impl BaseConfigReader {
    pub fn new(file_name: &str) -> Self {
        let file_path = PathBuf::from(file_name);
        Self { file_path }
    }

    pub fn parse(&self) -> Result<BaseConfig, SimError> {
        let path = self.file_path.display().to_string();
        let parsing_result =
            std::fs::read_to_string(&self.file_path).map_err(|source| SimError::ConfigRead {
                path: path.clone(),
                source,
            })?;
        toml::from_str(&parsing_result).map_err(|source| SimError::ConfigParse { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::BaseConfig;

    #[test]
    fn test_full_configuration() {
        let config: BaseConfig = toml::from_str(
            r#"
            [simulation_settings]
            scenario = "sparse"
            seed = 42
            runs = 5

            [field_settings]
            node_count = 50
            field_size = 100
            radius = 30
            noise_percent = 10
            anchor_percent = 20

            [[strategies]]
            name = "three_closest"

            [log_settings]
            log_path = "output"
            log_level = "debug"
            log_file_name = "trilat.log"
            log_overwrite = true
            "#,
        )
        .unwrap();
        assert_eq!(config.simulation_settings.scenario, "sparse");
        assert_eq!(config.simulation_settings.seed, Some(42));
        assert_eq!(config.simulation_settings.runs, 5);
        assert_eq!(config.field_settings.node_count, 50);
        assert_eq!(config.strategies.unwrap()[0].name, "three_closest");
        assert_eq!(config.log_settings.unwrap().log_level, "debug");
    }

    #[test]
    fn test_minimal_configuration() {
        let config: BaseConfig = toml::from_str(
            r#"
            [field_settings]
            node_count = 4
            field_size = 100
            radius = 1
            noise_percent = 0
            anchor_percent = 75
            "#,
        )
        .unwrap();
        assert_eq!(config.simulation_settings.runs, 1);
        assert!(config.simulation_settings.seed.is_none());
        assert!(config.strategies.is_none());
        assert!(config.log_settings.is_none());
    }
}

use trilat_core::error::ParamError;
use trilat_models::strategy::StrategyError;
use trilat_output::logger::LoggerError;

#[derive(Debug, thiserror::Error)]
pub enum SimError {
    #[error(transparent)]
    Param(#[from] ParamError),

    #[error(transparent)]
    Strategy(#[from] StrategyError),

    #[error(transparent)]
    Logger(#[from] LoggerError),

    #[error("configuration file {path} is not readable: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("configuration file {path} is malformed: {source}")]
    ConfigParse {
        path: String,
        source: toml::de::Error,
    },

    #[error("input error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing command line parameter --{0}")]
    MissingArgument(&'static str),

    #[error("runs must be at least 1")]
    NoRuns,
}

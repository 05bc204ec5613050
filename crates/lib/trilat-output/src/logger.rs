use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::runtime::ConfigErrors;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use serde::Deserialize;

const FILE_PATTERN: &str = "{d(%Y.%m.%d %H:%M:%S)} | {({l}):5.5} | {({f}:{L}):>40.40} — {m}{n}";
const CONSOLE_PATTERN: &str = "{({l}):5.5} | {m}{n}";

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("log file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid logger configuration: {0}")]
    Config(#[from] ConfigErrors),

    #[error("logger already initialized: {0}")]
    Init(#[from] log::SetLoggerError),
}

#[derive(Deserialize, Debug, Clone)]
pub struct LogSettings {
    pub log_path: String,
    pub log_level: String,
    pub log_file_name: String,
    pub log_overwrite: bool,
}

pub fn setup_logging(log_level: &str, log_file_path: PathBuf) -> Result<Config, LoggerError> {
    let log_level = get_logging_level(log_level);
    let log_file = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .build(log_file_path)?;

    Ok(Config::builder()
        .appender(Appender::builder().build("x", Box::new(log_file)))
        .build(Root::builder().appender("x").build(log_level))?)
}

pub fn setup_console_logging(log_level: &str) -> Result<Config, LoggerError> {
    let log_level = get_logging_level(log_level);
    let console = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(CONSOLE_PATTERN)))
        .build();

    Ok(Config::builder()
        .appender(Appender::builder().build("console", Box::new(console)))
        .build(Root::builder().appender("console").build(log_level))?)
}

pub fn get_logging_level(log_level: &str) -> LevelFilter {
    match log_level.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

/// Resolves the log file for a run. An existing file is removed when overwriting is
/// enabled and otherwise left alone, with the new file name carrying a timestamp.
pub fn resolve_log_file(
    config_path: &Path,
    log_settings: &LogSettings,
) -> Result<PathBuf, LoggerError> {
    let log_path = config_path.join(&log_settings.log_path).join("logs");
    if !log_path.exists() {
        fs::create_dir_all(&log_path)?;
    }

    let log_file_path = log_path.join(&log_settings.log_file_name);
    if !log_file_path.exists() {
        return Ok(log_file_path);
    }
    if log_settings.log_overwrite {
        fs::remove_file(&log_file_path)?;
        return Ok(log_file_path);
    }

    let stamp = Utc::now().format("_%d%m%Y_%H%M%S").to_string();
    let stem = log_settings
        .log_file_name
        .split('.')
        .next()
        .unwrap_or("trilat");
    Ok(log_path.join(format!("{}{}.log", stem, stamp)))
}

pub fn initiate_logger(
    config_path: &Path,
    log_settings: &LogSettings,
) -> Result<PathBuf, LoggerError> {
    let log_file_path = resolve_log_file(config_path, log_settings)?;
    let logger_config = setup_logging(&log_settings.log_level, log_file_path.clone())?;
    log4rs::init_config(logger_config)?;
    Ok(log_file_path)
}

pub fn initiate_console_logger(log_level: &str) -> Result<(), LoggerError> {
    let logger_config = setup_console_logging(log_level)?;
    log4rs::init_config(logger_config)?;
    Ok(())
}

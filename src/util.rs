//! Filesystem locations for logs and configuration

use std::path::PathBuf;

/// Base directory for app files (`~/.flexible-select`)
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".flexible-select")
}

/// Directory for log files
pub fn logs_dir() -> PathBuf {
    app_dir().join("logs")
}

/// Path to the log file
pub fn log_file_path() -> PathBuf {
    logs_dir().join("flexible-select.log")
}

/// Default path to the overrides config file
pub fn config_path() -> PathBuf {
    app_dir().join("config.toml")
}

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "datatable",
    version,
    about = "Browse a JSON array of records as a sortable, selectable table"
)]
pub struct Config {
    /// JSON file holding an array of objects (a built-in sample is shown when omitted)
    pub file: Option<PathBuf>,

    /// Show row checkboxes and a select-all checkbox
    #[arg(short, long)]
    pub selectable: bool,

    /// Comma-separated fields to show, in order (default: every field)
    #[arg(short, long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,

    /// Comma-separated fields whose headers do not sort
    #[arg(long, value_delimiter = ',')]
    pub fixed: Vec<String>,

    /// Column key to sort by at startup
    #[arg(long)]
    pub sort: Option<String>,

    /// Start the initial sort descending
    #[arg(long, requires = "sort")]
    pub descending: bool,

    /// Simulated loading delay in milliseconds before records appear
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u64).range(0..=10000))]
    pub loading_ms: u64,

    /// Log file (the terminal is owned by the table view)
    #[arg(long, default_value = "datatable.log")]
    pub log_file: PathBuf,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::parse_from(["datatable"]);
        assert!(config.file.is_none());
        assert!(!config.selectable);
        assert_eq!(config.loading_ms, 0);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(LevelFilter::from(config.log_level), LevelFilter::Info);
    }

    #[test]
    fn column_lists_split_on_commas() {
        let config = Config::parse_from([
            "datatable",
            "users.json",
            "--columns",
            "name,age",
            "--fixed",
            "email",
            "--sort",
            "age",
            "--descending",
        ]);
        assert_eq!(config.file, Some(PathBuf::from("users.json")));
        assert_eq!(config.columns, Some(vec!["name".to_string(), "age".to_string()]));
        assert_eq!(config.fixed, ["email"]);
        assert_eq!(config.sort.as_deref(), Some("age"));
        assert!(config.descending);
    }

    #[test]
    fn descending_requires_sort() {
        assert!(Config::try_parse_from(["datatable", "--descending"]).is_err());
    }

    #[test]
    fn loading_delay_is_bounded() {
        assert!(Config::try_parse_from(["datatable", "--loading-ms", "20000"]).is_err());
    }
}

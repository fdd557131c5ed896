//! Logging setup: terminal logger plus optional log file, both at the same level.
//!
//! The library itself only uses the `log` macros; applications (and the demo binary) call
//! [`init_logger`] once to see them.
use crate::symbolic::latex_error::{LatexExprError, LatexResult};
use chrono::Local;
use log::{LevelFilter, debug};
use simplelog::*;
use std::fs::File;

/// maps "trace", "debug", "info", "warn", "error", "off" to the level filter
pub fn parse_level(loglevel: &str) -> LatexResult<LevelFilter> {
    match loglevel {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        "off" => Ok(LevelFilter::Off),
        _ => Err(LatexExprError::InvalidLogLevel(loglevel.to_string())),
    }
}

/// name of the log file for `log_file == Some("")`
pub fn default_log_name() -> String {
    let date_and_time = Local::now().format("%Y-%m-%d_%H-%M-%S");
    format!("log_{}.txt", date_and_time)
}

/// Initialises the global logger.
/// # Arguments
/// * `loglevel` - "trace", "debug", "info", "warn", "error" or "off", `None` = "info"
/// * `log_file` - also write the log into this file, `Some("")` = `log_<date_time>.txt`
///
/// Calling it again when a logger is already installed does nothing.
pub fn init_logger(loglevel: Option<&str>, log_file: Option<&str>) -> LatexResult<()> {
    let level = match loglevel {
        Some(level) => parse_level(level)?,
        None => LevelFilter::Info,
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];
    if let Some(name) = log_file {
        let name = if name.is_empty() {
            default_log_name()
        } else {
            name.to_string()
        };
        let file = File::create(name)?;
        loggers.push(WriteLogger::new(level, Config::default(), file));
    }
    match CombinedLogger::init(loggers) {
        Ok(()) => Ok(()),
        Err(_) => {
            debug!("logger already initialised");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug").unwrap(), LevelFilter::Debug);
        assert_eq!(parse_level("off").unwrap(), LevelFilter::Off);
        assert!(matches!(
            parse_level("verbose"),
            Err(LatexExprError::InvalidLogLevel(_))
        ));
        assert!(init_logger(Some("loud"), None).is_err());
    }

    #[test]
    fn test_init_twice() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("latex.log");
        assert!(init_logger(Some("warn"), path.to_str()).is_ok());
        assert!(path.exists());
        assert!(init_logger(Some("info"), None).is_ok());
    }

    #[test]
    fn test_default_log_name() {
        let name = default_log_name();
        assert!(name.starts_with("log_"));
        assert!(name.ends_with(".txt"));
    }
}

//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use ::miette::Report;
use respawn_core::{Error as CoreError, ProcessAction};
use std::io::ErrorKind;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Run(e) => core_error_to_miette(e),
        CliError::Config(e) => ::miette::miette!("Configuration error: {}", e),
    }
}

/// Convert a core loop error to miette Report, attaching a hint where one helps
fn core_error_to_miette(err: CoreError) -> Report {
    match err {
        CoreError::Config(msg) => {
            ::miette::miette!(
                help = "Usage: respawn [OPTIONS] <PROGRAM> [ARGS]...",
                "{}",
                msg
            )
        }
        CoreError::Process {
            action: ProcessAction::Start,
            ref program,
            ref source,
        } if source.kind() == ErrorKind::NotFound => {
            ::miette::miette!(
                help = "Check that the program is installed and on your PATH",
                "Command not found: {}",
                program
            )
        }
        _ => ::miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    #[test]
    fn test_no_arguments_report() {
        let report = cli_error_to_miette(CoreError::no_arguments().into());
        assert_eq!(report.to_string(), "No arguments supplied");
        assert!(report.help().is_some());
    }

    #[test]
    fn test_missing_program_report() {
        let err = CoreError::Process {
            action: ProcessAction::Start,
            program: "nope".to_string(),
            source: std::io::Error::new(ErrorKind::NotFound, "No such file"),
        };
        let report = cli_error_to_miette(err.into());
        assert!(report.to_string().contains("Command not found: nope"));
    }

    #[test]
    fn test_config_report() {
        let err = ConfigError::InvalidValue {
            field: "debounce_ms".to_string(),
            value: "0".to_string(),
            hint: "x".to_string(),
        };
        let report = cli_error_to_miette(err.into());
        assert!(report.to_string().starts_with("Configuration error:"));
    }
}

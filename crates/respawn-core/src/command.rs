//! The supervised command line.

use crate::error::{Error, Result};
use std::fmt;
use std::sync::Arc;

/// Program name followed by its arguments.
///
/// Built once at startup and shared read-only by every restart. Cloning is
/// cheap: the argument vector is reference counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    argv: Arc<[String]>,
}

impl CommandSpec {
    /// Build a command from raw arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] with "No arguments supplied" when `argv` is
    /// empty.
    pub fn new<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        if argv.is_empty() {
            return Err(Error::no_arguments());
        }
        Ok(Self { argv: argv.into() })
    }

    /// The program to execute.
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// Arguments passed to the program (without the program itself).
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_command_is_rejected() {
        let err = CommandSpec::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg == "No arguments supplied"));
    }

    #[test]
    fn test_program_and_args() {
        let spec = CommandSpec::new(["cargo", "run", "--release"]).unwrap();
        assert_eq!(spec.program(), "cargo");
        assert_eq!(spec.args(), ["run".to_string(), "--release".to_string()]);
        assert_eq!(spec.to_string(), "cargo run --release");
    }

    #[test]
    fn test_program_without_args() {
        let spec = CommandSpec::new(["make"]).unwrap();
        assert_eq!(spec.program(), "make");
        assert!(spec.args().is_empty());
    }
}

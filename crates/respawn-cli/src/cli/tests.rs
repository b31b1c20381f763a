#[cfg(test)]
mod tests {
    use crate::cli::Cli;
    use clap::{CommandFactory, Parser};
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_command_collects_trailing_arguments() {
        let cli = Cli::try_parse_from(["respawn", "cargo", "test", "--workspace", "-q"]).unwrap();
        assert_eq!(cli.command, vec!["cargo", "test", "--workspace", "-q"]);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_options_before_command() {
        let cli = Cli::try_parse_from([
            "respawn",
            "-v",
            "--no-clear",
            "-d",
            "500",
            "--config",
            "dev.toml",
            "node",
            "server.js",
        ])
        .unwrap();

        assert!(cli.verbose);
        assert!(cli.no_clear);
        assert_eq!(cli.debounce_ms, Some(500));
        assert_eq!(cli.config, Some(PathBuf::from("dev.toml")));
        assert_eq!(cli.command, vec!["node", "server.js"]);
    }

    #[test]
    fn test_empty_command_is_accepted_by_parser() {
        let cli = Cli::try_parse_from(["respawn"]).unwrap();
        assert!(cli.command.is_empty());
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["respawn", "-v", "-q", "ls"]).is_err());
    }

    #[test]
    fn test_debounce_must_be_a_number() {
        assert!(Cli::try_parse_from(["respawn", "--debounce", "soon", "ls"]).is_err());
    }

    #[test]
    fn test_overrides_only_carry_given_flags() {
        let cli = Cli::try_parse_from(["respawn", "ls"]).unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.debounce_ms, None);
        assert_eq!(overrides.clear_screen, None);

        let cli = Cli::try_parse_from(["respawn", "--no-clear", "-d", "10", "ls"]).unwrap();
        let overrides = cli.overrides();
        assert_eq!(overrides.debounce_ms, Some(10));
        assert_eq!(overrides.clear_screen, Some(false));
    }
}

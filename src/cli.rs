//! Command line: own options via clap, everything else passed through.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::args::{classify, flag_registry};

/// Options `compile` handles itself. Only double-dash tokens reach this
/// parser; targets and compiler options are split off beforehand.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "compile",
    version,
    about = "Compile source files with the compiler configured for their extension",
    override_usage = "compile [TARGET]... [--help] [--version] [-COMPILER-OPTION]... [---COMPILER-LONG-OPTION]...",
    after_help = "Options with one dash go to the compiler unchanged; three or more dashes\n\
                  are reduced to two (---std=c99 passes --std=c99)."
)]
pub struct Cli {
    /// Targets file to read instead of ~/.compile/targets
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Kill the compiler if it runs longer than this many seconds
    #[arg(long, value_name = "SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_secs)
    }
}

/// A fully split command line.
#[derive(Debug, Clone)]
pub struct CommandLine {
    pub cli: Cli,
    pub targets: Vec<String>,
    pub options: Vec<String>,
    pub warnings: Vec<String>,
}

/// Arguments as UTF-8 strings. Anything else is a usage error.
pub fn utf8_args<I>(args: I) -> Result<Vec<String>, clap::Error>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|bad| {
                Cli::command().error(
                    ErrorKind::InvalidUtf8,
                    format!("argument is not valid UTF-8: '{}'", bad.to_string_lossy()),
                )
            })
        })
        .collect()
}

/// Split raw arguments (without the program name) and parse own options.
///
/// `--help`/`--version` and unknown own options come back as a
/// [`clap::Error`]; its [`clap::Error::exit_code`] tells them apart.
pub fn parse_command_line(raw_args: &[String]) -> Result<CommandLine, clap::Error> {
    let classified = classify(raw_args, &flag_registry());
    let own = std::iter::once("compile".to_string()).chain(classified.own_tokens());
    let cli = Cli::try_parse_from(own)?;

    Ok(CommandLine {
        cli,
        targets: classified.targets(),
        options: classified.compiler_options(),
        warnings: classified.warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn registry_matches_cli() {
        let command = Cli::command();
        for def in flag_registry() {
            let long = def.long.trim_start_matches("--");
            let known = command.get_arguments().any(|a| a.get_long() == Some(long))
                || long == "help"
                || long == "version";
            assert!(known, "{} is not a clap argument", def.long);
        }
    }

    #[test]
    fn splits_targets_options_and_own_flags() {
        let line =
            parse_command_line(&raw(&["main.c", "-O2", "--timeout", "5", "---std=c99"])).unwrap();
        assert_eq!(line.targets, vec!["main.c"]);
        assert_eq!(line.options, vec!["-O2", "--std=c99"]);
        assert_eq!(line.cli.timeout(), Some(Duration::from_secs(5)));
        assert!(line.cli.config.is_none());
    }

    #[test]
    fn help_is_reported_as_display_help() {
        let err = parse_command_line(&raw(&["main.c", "--help"])).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn version_is_reported_as_display_version() {
        let err = parse_command_line(&raw(&["--version"])).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn unknown_own_option_is_an_error() {
        let err = parse_command_line(&raw(&["--frobnicate", "main.c"])).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err = parse_command_line(&raw(&["--timeout", "0", "main.c"])).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn utf8_args_pass_through() {
        let args = utf8_args(["main.c", "-O2"].map(OsString::from)).unwrap();
        assert_eq!(args, vec!["main.c", "-O2"]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_arg_is_a_usage_error() {
        use std::os::unix::ffi::OsStringExt;

        let bad = OsString::from_vec(b"caf\xe9.c".to_vec());
        let err = utf8_args([OsString::from("-g"), bad]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidUtf8);
        assert_ne!(err.exit_code(), 0);
    }
}

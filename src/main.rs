use std::process::ExitCode;

use compile::args::build_invocation;
use compile::cli::{parse_command_line, utf8_args, CommandLine};
use compile::config;
use compile::logging::init_tracing;
use compile::process::{ProcessRunner, SystemRunner, EXIT_FAILURE};
use compile::target::FsLister;
use compile::Error;

const PROGRAM_NAME: &str = "compile";

fn main() -> ExitCode {
    if let Err(e) = init_tracing() {
        eprintln!("{PROGRAM_NAME}: warning: {e:#}");
    }

    let parsed =
        utf8_args(std::env::args_os().skip(1)).and_then(|raw_args| parse_command_line(&raw_args));
    let line = match parsed {
        Ok(line) => line,
        Err(e) => {
            let _ = e.print();
            // --help and --version exit cleanly; anything else is a usage error.
            return if e.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                exit_code(EXIT_FAILURE)
            };
        }
    };

    match run(&line) {
        Ok(code) => exit_code(code),
        Err(e) => {
            eprintln!("{PROGRAM_NAME}: error: {e}");
            eprintln!("{PROGRAM_NAME}: fatal error: {}", e.summary());
            exit_code(e.exit_code())
        }
    }
}

fn run(line: &CommandLine) -> Result<i32, Error> {
    for warning in &line.warnings {
        warn(warning);
    }

    // Load the targets file first so a missing one is created even when
    // there is nothing to compile.
    let path = line
        .cli
        .config
        .clone()
        .unwrap_or_else(config::default_targets_path);
    let loaded = config::load(&path)?;
    if loaded.seeded {
        println!(
            "{PROGRAM_NAME}: created 'targets' file with default entries in '{}'",
            loaded.path.display()
        );
    }
    for warning in &loaded.warnings {
        warn(warning);
    }

    let command = build_invocation(&line.targets, &line.options, &loaded.registry, &FsLister)?;
    for warning in &command.warnings {
        warn(warning);
    }

    let runner = SystemRunner::new().with_timeout(line.cli.timeout());
    let code = runner.run(&command)?;
    if code != 0 {
        eprintln!("{PROGRAM_NAME}: compiler process returned code {code}");
        eprintln!("{PROGRAM_NAME}: error: compilation failed");
    }
    Ok(code)
}

fn warn(message: &str) {
    eprintln!("{PROGRAM_NAME}: warning: {message}");
}

/// Codes that do not fit an exit status collapse to 1.
fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

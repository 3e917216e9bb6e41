//! RU Donuts order counter

use std::{
    fs::File,
    io::{self, BufReader, IsTerminal},
    process::ExitCode,
};

use tracing::info;

use rudonuts::{catalog::Catalog, receipt, session::Session, shell::Shell};

use crate::config::{Command, Config, ShellArgs};

mod config;
mod logging;

fn main() -> ExitCode {
    let config = match Config::load() {
        Ok(config) => config,
        Err(error) => error.exit(),
    };

    if let Err(error) = logging::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging is not initialized, must use eprintln"
        )]
        {
            eprintln!("Failed to initialise logging: {error}");
        }

        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            #[expect(clippy::print_stderr, reason = "errors are reported to the terminal")]
            {
                eprintln!("{message}");
            }

            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), String> {
    let catalog = match &config.menu {
        Some(path) => Catalog::from_yaml_file(path).map_err(|e| e.to_string())?,
        None => Catalog::default(),
    };

    match &config.command {
        Command::Menu => receipt::write_menu(io::stdout().lock(), &catalog).map_err(|e| e.to_string()),
        Command::Shell(args) => run_shell(args, catalog),
    }
}

fn run_shell(args: &ShellArgs, catalog: Catalog) -> Result<(), String> {
    let shell = Shell::new(Session::new(catalog));
    let stdout = io::stdout().lock();

    match &args.input {
        Some(path) => {
            info!(path = %path.display(), "reading commands from file");

            let file = File::open(path).map_err(|e| format!("{}: {e}", path.display()))?;

            shell
                .with_prompt(false)
                .run(BufReader::new(file), stdout)
                .map_err(|e| e.to_string())
        }
        None => {
            let stdin = io::stdin();
            let interactive = stdin.is_terminal();

            shell
                .with_prompt(interactive)
                .run(stdin.lock(), stdout)
                .map_err(|e| e.to_string())
        }
    }
}

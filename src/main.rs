use clap::Parser;
use filesift::logging::setup_logging;
use filesift::{Cli, Output};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::new(false, false).error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

use clap::Parser;
use k_toolkit_cli::args::{Args, Command};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = k_toolkit_cli::logging::init(args.verbose) {
        eprintln!("{e}");
    }

    match &args.command {
        Command::Concat(concat) => match k_toolkit_cli::concat(concat) {
            Ok(outcome) if outcome.is_ok() => ExitCode::SUCCESS,
            Ok(_) => ExitCode::FAILURE,
            Err(e) => {
                eprintln!("Application Error: {e}");
                ExitCode::FAILURE
            }
        },
    }
}

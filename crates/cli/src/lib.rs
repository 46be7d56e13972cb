// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;
pub mod prompt;

use crate::args::ConcatArgs;
use crate::config::ConcatConfig;
use crate::error::Result;
use crate::options::OutputFormat;
use crate::presentation::{ConsoleProgress, Palette};
use crate::prompt::Prompt;
use k_toolkit_engine::{AutoConfirm, ConfirmationGate, ExecutionOutcome, NoProgress, ProgressSink};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Run the `concat` subcommand and print its outcome.
///
/// # Errors
///
/// Only for failures outside the merge itself: an invalid configuration or an
/// outcome that cannot be written to the terminal.
pub fn concat(args: &ConcatArgs) -> Result<ExecutionOutcome> {
    let config = ConcatConfig::try_from(args)?;
    tracing::debug!(?config, "starting concat");

    let console = ConsoleProgress::new(Palette::for_stdout());
    let progress: &dyn ProgressSink = match args.format {
        OutputFormat::Text => &console,
        OutputFormat::Json => &NoProgress,
    };

    let mut auto = AutoConfirm;
    let mut prompt = Prompt::stdio(args.format);
    let gate: &mut dyn ConfirmationGate = if args.yes { &mut auto } else { &mut prompt };

    let outcome = k_toolkit_engine::run(&config, gate, progress);
    presentation::print_outcome(&outcome, args.format)?;
    Ok(outcome)
}

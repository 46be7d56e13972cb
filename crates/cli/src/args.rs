use crate::options::OutputFormat;
use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueHint};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(name = "k-toolkit", version = crate::VERSION, about = "A small toolkit of file utilities")]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Concatenates provided set of files or files in given directory(es)
    Concat(ConcatArgs),
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ConcatArgs {
    /// `[SOURCES] OUTPUT`: comma-separated sources followed by the output file.
    /// With a single value it is the output and the current directory is the source.
    #[arg(value_name = "SOURCES|OUTPUT", num_args = 1..=2, required = true, value_hint = ValueHint::AnyPath)]
    pub paths: Vec<String>,

    /// A suffix of files which should be included for concatenation
    #[arg(short = 's', long = "file-suffix", default_value = "")]
    pub file_suffix: String,

    /// Descend into sub-directories of the given directories
    #[arg(short = 'c', long = "cascade")]
    pub cascade: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl ConcatArgs {
    /// Split the positional values into `(sources, output)`.
    pub fn sources_and_output(&self) -> (String, String) {
        match self.paths.as_slice() {
            [sources, output] => (sources.clone(), output.clone()),
            [output] => (String::new(), output.clone()),
            _ => (String::new(), String::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concat(argv: &[&str]) -> ConcatArgs {
        let args = Args::try_parse_from(argv).unwrap();
        match args.command {
            Command::Concat(concat) => concat,
        }
    }

    #[test]
    fn single_positional_is_the_output() {
        let args = concat(&["k-toolkit", "concat", "merged.out"]);
        assert_eq!(args.sources_and_output(), (String::new(), "merged.out".to_string()));
        assert!(!args.cascade);
        assert!(args.file_suffix.is_empty());
    }

    #[test]
    fn two_positionals_are_sources_then_output() {
        let args = concat(&["k-toolkit", "concat", "a.txt, b.txt", "merged.out", "-s", ".txt", "-c", "-y"]);
        assert_eq!(args.sources_and_output(), ("a.txt, b.txt".to_string(), "merged.out".to_string()));
        assert_eq!(args.file_suffix, ".txt");
        assert!(args.cascade);
        assert!(args.yes);
    }

    #[test]
    fn rejects_missing_and_extra_positionals() {
        assert!(Args::try_parse_from(["k-toolkit", "concat"]).is_err());
        assert!(Args::try_parse_from(["k-toolkit", "concat", "a", "b", "c"]).is_err());
    }

    #[test]
    fn verbosity_is_global() {
        let args = Args::try_parse_from(["k-toolkit", "concat", "out", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }
}

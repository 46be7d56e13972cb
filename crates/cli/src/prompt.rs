use crate::options::OutputFormat;
use k_toolkit_engine::ConfirmationGate;
use std::io::{self, BufRead, StdinLock, Write};
use std::path::PathBuf;

/// Interactive yes/no gate: lists the discovered files and waits for an answer.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl Prompt<StdinLock<'static>, Box<dyn Write>> {
    /// Read answers from stdin. The question goes to stdout, or to stderr when
    /// stdout is reserved for JSON.
    pub fn stdio(format: OutputFormat) -> Self {
        let output: Box<dyn Write> = match format {
            OutputFormat::Text => Box::new(io::stdout()),
            OutputFormat::Json => Box::new(io::stderr()),
        };
        Self::new(io::stdin().lock(), output)
    }
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

/// `y` or `yes`, ignoring case and anything after the first word.
pub fn is_affirmative(answer: &str) -> bool {
    answer
        .split_whitespace()
        .next()
        .is_some_and(|word| word.eq_ignore_ascii_case("y") || word.eq_ignore_ascii_case("yes"))
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    fn ask(&mut self, files: &[PathBuf]) -> io::Result<()> {
        for file in files {
            writeln!(self.output, "{}", file.display())?;
        }
        writeln!(
            self.output,
            "{} files found eligible for concatenation. Would you like to proceed? (y/N): ",
            files.len()
        )?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> ConfirmationGate for Prompt<R, W> {
    /// Declines without reading an answer when the question cannot be shown.
    fn confirm(&mut self, files: &[PathBuf]) -> bool {
        if let Err(e) = self.ask(files) {
            tracing::warn!("cannot show confirmation prompt: {e}");
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => is_affirmative(&answer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(answer: &str) -> (bool, String) {
        let mut out = Vec::new();
        let files = [PathBuf::from("/tmp/a.txt"), PathBuf::from("/tmp/b.txt")];
        let confirmed = Prompt::new(answer.as_bytes(), &mut out).confirm(&files);
        (confirmed, String::from_utf8(out).unwrap())
    }

    #[test]
    fn lists_files_before_asking() {
        let (_, shown) = ask("n\n");
        assert!(shown.starts_with("/tmp/a.txt\n/tmp/b.txt\n"));
        assert!(shown.contains("2 files found eligible for concatenation"));
        assert!(shown.contains("(y/N)"));
    }

    #[test]
    fn accepts_yes_variants() {
        for answer in ["y\n", "Y\n", "yes\n", "  YES  \n", "yes please\n"] {
            assert!(ask(answer).0, "{answer:?}");
        }
    }

    #[test]
    fn everything_else_declines() {
        for answer in ["\n", "n\n", "no\n", "yep\n", ""] {
            assert!(!ask(answer).0, "{answer:?}");
        }
    }

    struct ClosedOutput;

    impl Write for ClosedOutput {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn unwritable_prompt_declines_without_reading() {
        let mut input: &[u8] = b"yes\n";
        let files = [PathBuf::from("/tmp/a.txt"), PathBuf::from("/tmp/b.txt")];

        assert!(!Prompt::new(&mut input, ClosedOutput).confirm(&files));
        assert_eq!(input, b"yes\n");
    }
}

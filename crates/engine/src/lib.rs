// crates/engine/src/lib.rs
use log::{debug, info, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

pub mod concat;
pub mod config;
pub mod error;
pub mod filesystem;
pub mod outcome;
pub mod path;
pub mod persistence;
pub mod ports;
pub mod validation;

pub use crate::concat::concatenate;
pub use crate::config::{ConcatConfig, ConcatConfigBuilder};
pub use crate::error::{EngineError, Result};
pub use crate::filesystem::walk;
pub use crate::outcome::ExecutionOutcome;
pub use crate::path::normalize_sources;
pub use crate::ports::{AutoConfirm, ConfirmationGate, NoProgress, ProgressSink};
pub use crate::validation::{ValidationOutcome, validate};

use crate::outcome::CANCELLED;
use crate::path::logical_absolute;
use crate::persistence::FileWriter;

/// Validate the configured sources and merge every eligible file into the output.
///
/// Nothing is written unless validation passes and `gate` agrees. The output is
/// created fresh, receives files in walk order and is closed once, whether the
/// loop finished or stopped at the first failing file. Content merged before a
/// failure stays on disk.
pub fn run(config: &ConcatConfig, gate: &mut dyn ConfirmationGate, progress: &dyn ProgressSink) -> ExecutionOutcome {
    let sources = normalize_sources(&config.sources);
    debug!("resolved sources: {sources:?}");

    let validation = validate(&sources, &config.output, config.cascading, &config.suffix);
    if !validation.is_valid {
        debug!("validation failed with {} error(s)", validation.errors.len());
        return ExecutionOutcome::rejected(validation);
    }

    let files = match walk(&sources, config.cascading, &config.suffix) {
        Ok(files) => files,
        Err(err) => return ExecutionOutcome::rejected(validation.invalidate(err.to_string())),
    };
    let output = logical_absolute(Path::new(&config.output));

    if !gate.confirm(&files) {
        info!("{CANCELLED}, {} file(s) left unmerged", files.len());
        return ExecutionOutcome::failed(validation, output, CANCELLED);
    }

    let mut writer = match FileWriter::create_new(&output) {
        Ok(writer) => writer,
        Err(err) => return ExecutionOutcome::failed(validation, output, err.to_string()),
    };

    let merge = merge_files(&files, &mut writer, progress);
    let (files_merged, bytes_written) = (merge.files_merged, merge.bytes_written);

    let closed = FileWriter::finish(writer, &output);
    let failure = match (merge.failure, closed) {
        (Some(err), Err(flush_err)) => {
            warn!("{flush_err}");
            Some(err)
        }
        (Some(err), Ok(())) | (None, Err(err)) => Some(err),
        (None, Ok(())) => None,
    };

    match failure {
        Some(err) => ExecutionOutcome {
            files_merged,
            bytes_written,
            ..ExecutionOutcome::failed(validation, output, err.to_string())
        },
        None => {
            info!("merged {files_merged} file(s), {bytes_written} bytes into {}", output.display());
            ExecutionOutcome::completed(validation, output, files_merged, bytes_written)
        }
    }
}

/// What a merge loop got onto the destination before it finished or stopped.
struct Merge {
    files_merged: usize,
    bytes_written: u64,
    failure: Option<EngineError>,
}

/// Append `files` to `writer` in order, stopping at the first failure.
///
/// The writer is flushed after every file, so a write error that surfaces late
/// is still charged to the file whose bytes were lost and the counters only
/// cover content that reached the destination.
fn merge_files<W: Write + ?Sized>(files: &[PathBuf], writer: &mut W, progress: &dyn ProgressSink) -> Merge {
    let mut merge = Merge {
        files_merged: 0,
        bytes_written: 0,
        failure: None,
    };

    for file in files {
        match merge_one(file, writer) {
            Ok(bytes) => {
                debug!("merged {bytes} bytes from {}", file.display());
                merge.files_merged += 1;
                merge.bytes_written += bytes;
                progress.on_merged(file, bytes);
            }
            Err(err) => {
                warn!("stopping merge at {}: {err}", file.display());
                progress.on_failed(file, &err);
                merge.failure = Some(err);
                break;
            }
        }
    }

    merge
}

fn merge_one<W: Write + ?Sized>(file: &Path, writer: &mut W) -> Result<u64> {
    let bytes = concatenate(file, writer)?;
    writer.flush().map_err(|e| EngineError::FileWrite {
        path: file.to_path_buf(),
        source: e,
    })?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use std::io::{self, BufWriter};
    use tempfile::TempDir;

    /// Accepts `room` bytes, then reports a full disk.
    struct CappedSink {
        written: Vec<u8>,
        room: usize,
    }

    impl Write for CappedSink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.written.len() + buf.len() > self.room {
                return Err(io::Error::other("no space left on device"));
            }
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct Recorder {
        merged: RefCell<Vec<PathBuf>>,
        failed: RefCell<Vec<PathBuf>>,
    }

    impl ProgressSink for Recorder {
        fn on_merged(&self, path: &Path, _bytes: u64) {
            self.merged.borrow_mut().push(path.to_path_buf());
        }

        fn on_failed(&self, path: &Path, _error: &EngineError) {
            self.failed.borrow_mut().push(path.to_path_buf());
        }
    }

    #[test]
    fn buffered_write_failure_is_charged_to_the_file_that_lost_bytes() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "alpha\n").unwrap();
        fs::write(&second, "beta\n").unwrap();
        let files = vec![first.clone(), second];

        // buffer holds both files, the sink only has room for part of the first
        let mut writer = BufWriter::with_capacity(64, CappedSink { written: Vec::new(), room: 3 });
        let recorder = Recorder::default();

        let merge = merge_files(&files, &mut writer, &recorder);

        assert_eq!(merge.files_merged, 0);
        assert_eq!(merge.bytes_written, 0);
        assert!(matches!(&merge.failure, Some(EngineError::FileWrite { path, .. }) if *path == first));
        assert!(recorder.merged.borrow().is_empty());
        assert_eq!(*recorder.failed.borrow(), vec![first]);
    }

    #[test]
    fn counters_cover_only_flushed_files() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first.txt");
        let second = dir.path().join("second.txt");
        fs::write(&first, "alpha\n").unwrap();
        fs::write(&second, "beta\n").unwrap();
        let files = vec![first.clone(), second.clone()];

        let mut writer = BufWriter::with_capacity(64, CappedSink { written: Vec::new(), room: 8 });
        let recorder = Recorder::default();

        let merge = merge_files(&files, &mut writer, &recorder);

        assert_eq!(merge.files_merged, 1);
        assert_eq!(merge.bytes_written, 6);
        assert!(matches!(&merge.failure, Some(EngineError::FileWrite { path, .. }) if *path == second));
        assert_eq!(*recorder.merged.borrow(), vec![first]);
        assert_eq!(writer.get_ref().written, b"alpha\n");
    }
}

use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Helpers for the merge destination.
pub struct FileWriter;

impl FileWriter {
    /// Create a buffered writer for `path`, which must not exist yet.
    pub fn create_new(path: &Path) -> Result<BufWriter<File>> {
        File::create_new(path)
            .map(BufWriter::new)
            .map_err(|e| EngineError::OutputCreate {
                path: path.to_path_buf(),
                source: e,
            })
    }

    /// Flush buffered output and close the file.
    pub fn finish(mut writer: BufWriter<File>, path: &Path) -> Result<()> {
        writer.flush().map_err(|e| EngineError::OutputFlush {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn refuses_to_overwrite() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taken.out");
        std::fs::write(&path, "keep me").unwrap();

        let err = FileWriter::create_new(&path).unwrap_err();

        assert!(matches!(err, EngineError::OutputCreate { .. }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn finish_flushes_buffered_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fresh.out");

        let mut writer = FileWriter::create_new(&path).unwrap();
        writer.write_all(b"buffered").unwrap();
        FileWriter::finish(writer, &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"buffered");
    }
}

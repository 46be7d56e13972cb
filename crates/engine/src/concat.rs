use crate::error::{EngineError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

const LINE_DELIMITER: u8 = b'\n';

/// Append the contents of `source` to `destination`, one line at a time.
///
/// Lines keep their `\n` delimiter and a trailing fragment without one is
/// still written, so the output grows by exactly the size of `source`.
/// The destination is borrowed and left open.
///
/// # Errors
///
/// [`EngineError::FileRead`] if `source` cannot be opened or read,
/// [`EngineError::FileWrite`] if `destination` rejects a write.
pub fn concatenate<W: Write + ?Sized>(source: &Path, destination: &mut W) -> Result<u64> {
    let file = File::open(source).map_err(|e| EngineError::FileRead {
        path: source.to_path_buf(),
        source: e,
    })?;
    let mut reader = BufReader::new(file);

    let mut written: u64 = 0;
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        match reader.read_until(LINE_DELIMITER, &mut line_buf) {
            Ok(0) => break,
            Ok(_) => {
                destination.write_all(&line_buf).map_err(|e| EngineError::FileWrite {
                    path: source.to_path_buf(),
                    source: e,
                })?;
                written += line_buf.len() as u64;
            }
            Err(e) => {
                return Err(EngineError::FileRead {
                    path: source.to_path_buf(),
                    source: e,
                });
            }
        }
    }

    Ok(written)
}

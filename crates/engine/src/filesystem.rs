use crate::error::Result;
use log::{debug, trace};
use std::cmp::Ordering;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Whether `path` exists and is not a directory. Symlinks are followed.
pub fn file_exists(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|meta| !meta.is_dir())
}

/// Literal, case-sensitive trailing match on the whole path. Empty matches everything.
pub fn matches_suffix(path: &Path, suffix: &str) -> bool {
    suffix.is_empty() || path.as_os_str().as_encoded_bytes().ends_with(suffix.as_bytes())
}

/// Collect the files eligible for concatenation from `paths`.
///
/// Each path is either taken as-is (when it is a file matching `suffix`) or
/// listed as a directory. Within a directory entries are visited in file name
/// order, files first, then sub-directories depth-first when `cascading` is set.
/// Results of several paths are appended in the order given, without
/// deduplication.
///
/// # Errors
///
/// Any directory that cannot be listed aborts the whole walk.
pub fn walk(paths: &[PathBuf], cascading: bool, suffix: &str) -> Result<Vec<PathBuf>> {
    let suffix = suffix.trim();
    let mut files = Vec::new();

    for path in paths {
        if file_exists(path) {
            if matches_suffix(path, suffix) {
                files.push(path.clone());
            }
            continue;
        }
        walk_directory(path, cascading, suffix, &mut files)?;
    }

    debug!(
        "walk over {} source(s) found {} file(s) (cascading={cascading}, suffix={suffix:?})",
        paths.len(),
        files.len()
    );
    Ok(files)
}

fn walk_directory(dir: &Path, cascading: bool, suffix: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    let max_depth = if cascading { usize::MAX } else { 1 };

    // Directory symlinks are reported as symlinks, never descended.
    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(false)
        .sort_by(files_before_directories);

    for entry in walker {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if file_exists(path) && matches_suffix(path, suffix) {
            trace!("eligible: {}", path.display());
            files.push(path.to_path_buf());
        }
    }

    Ok(())
}

fn files_before_directories(a: &DirEntry, b: &DirEntry) -> Ordering {
    a.file_type()
        .is_dir()
        .cmp(&b.file_type().is_dir())
        .then_with(|| a.file_name().cmp(b.file_name()))
}

use std::path::{Component, Path, PathBuf};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
///
/// `.` and `..` segments are folded lexically, so the result does not depend on
/// whether the path exists.
pub fn logical_absolute(path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    lexical_clean(&joined)
}

fn lexical_clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match cleaned.components().next_back() {
                Some(Component::Normal(_)) => {
                    cleaned.pop();
                }
                // `/..` is `/`
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => cleaned.push(".."),
            },
            other => cleaned.push(other.as_os_str()),
        }
    }
    cleaned
}

/// Split a comma-separated source list into absolute paths.
///
/// An empty list selects the current working directory. Entries are trimmed;
/// a blank entry is kept as an empty path so validation can report it.
pub fn normalize_sources(raw: &str) -> Vec<PathBuf> {
    if raw.is_empty() {
        return vec![logical_absolute(Path::new("."))];
    }

    raw.split(',')
        .map(str::trim)
        .map(|entry| {
            if entry.is_empty() {
                PathBuf::new()
            } else {
                logical_absolute(Path::new(entry))
            }
        })
        .collect()
}

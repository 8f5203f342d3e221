use std::path::{Component, Path, PathBuf};

/// Convert a potentially relative path into an absolute one without resolving symlinks.
///
/// `.` and `..` segments are folded lexically, so `./plans` under `/srv`
/// becomes `/srv/plans`.
pub fn logical_absolute(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };
    lexical_normalise(&absolute)
}

/// Drop `.` segments and let `..` pop the previous normal segment.
///
/// A `..` with nothing left to pop is kept for relative input and dropped
/// at the root of an absolute one.
pub fn lexical_normalise(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Strip `base` from the front of `path`; paths outside `base` are returned unchanged.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base).map(Path::to_path_buf).unwrap_or_else(|_| path.to_path_buf())
}

//! Path helpers
//!
//! Lexical path handling shared by the file systems and the transform stage.
//! Nothing here touches the disk.

use std::path::{Component, Path, PathBuf};

/// Directory under the shadow root receiving outputs that live outside the
/// configuration root.
pub const EXTERNAL_DIR: &str = "__external__";

/// Remove `.` components and fold `..` into their parent.
///
/// `..` at the root of an absolute path is dropped; leading `..` of a
/// relative path is kept.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                let can_pop = matches!(
                    out.components().next_back(),
                    Some(Component::Normal(_))
                );
                if can_pop {
                    out.pop();
                } else if !out.has_root() {
                    out.push("..");
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn absolutize(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// `path` relative to `root`, or `None` when it does not live under `root`.
pub fn relative_to(root: &Path, path: &Path) -> Option<PathBuf> {
    normalize(path)
        .strip_prefix(normalize(root))
        .ok()
        .map(Path::to_path_buf)
}

/// Location under `shadow_dir` mirroring `output`'s place under `root`.
///
/// Outputs outside `root` are folded below [`EXTERNAL_DIR`] so the result
/// always stays inside `shadow_dir`.
pub fn shadow_path(shadow_dir: &Path, root: &Path, output: &Path) -> PathBuf {
    match relative_to(root, output) {
        Some(relative) => shadow_dir.join(relative),
        None => {
            let mut folded = shadow_dir.join(EXTERNAL_DIR);
            for component in normalize(output).components() {
                if let Component::Normal(part) = component {
                    folded.push(part);
                }
            }
            folded
        }
    }
}

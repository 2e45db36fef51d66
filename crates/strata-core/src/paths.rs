//! Lexical path helpers
//!
//! Nothing here touches the filesystem apart from reading the working
//! directory to anchor relative paths.

use crate::error::Result;
use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` segments and fold `..` into the
/// preceding segment. `..` at the root stays at the root; leading `..` of a
/// relative path is kept. An empty result becomes `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Component::Normal(segment) => out.push(segment),
        }
    }

    if out.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        out
    }
}

/// Make `path` absolute against the working directory and clean it
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(clean(path));
    }
    let cwd = std::env::current_dir()?;
    Ok(clean(&cwd.join(path)))
}

/// Absolute directory containing the file at `path`. The root is its own
/// containing directory.
pub fn containing_dir(path: &Path) -> Result<PathBuf> {
    let abs = absolutize(path)?;
    Ok(match abs.parent() {
        Some(parent) => parent.to_path_buf(),
        None => abs,
    })
}

/// Whether an absolute path is the filesystem root
pub fn is_root(path: &Path) -> bool {
    path.parent().is_none()
}

/// Path of `path` relative to `base`. Both must be absolute and clean.
/// Equal paths give `.`.
pub fn relative_path(path: &Path, base: &Path) -> PathBuf {
    let target: Vec<Component<'_>> = path.components().collect();
    let from: Vec<Component<'_>> = base.components().collect();

    let common = target
        .iter()
        .zip(from.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..from.len() {
        rel.push("..");
    }
    for component in &target[common..] {
        rel.push(component.as_os_str());
    }

    if rel.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        rel
    }
}

/// Render a path for substitution into a config string
pub fn to_config_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

//! `find_in_parent_folders`: locate the nearest ancestor config file

use crate::error::{Error, Result};
use crate::options::{ResolveOptions, DEFAULT_CONFIG_FILENAME};
use crate::paths;
use std::path::PathBuf;

/// Walk upward from the parent of the current config's directory until a
/// directory holding a regular file named [`DEFAULT_CONFIG_FILENAME`] is found.
///
/// The result is relative to the current config's directory, e.g.
/// `../../.terragrunt`. Reaching the filesystem root without a match fails
/// with `ParentConfigNotFound` carrying the original config path.
pub fn find_in_parent_folders(options: &ResolveOptions) -> Result<String> {
    let mut current = paths::containing_dir(&options.config_path)?;
    let mut relative = PathBuf::new();

    while !paths::is_root(&current) {
        current.pop();
        relative.push("..");

        let candidate = current.join(DEFAULT_CONFIG_FILENAME);
        log::trace!("Checking for parent config at {}", candidate.display());

        if candidate.is_file() {
            relative.push(DEFAULT_CONFIG_FILENAME);
            log::debug!(
                "Found parent config {} for {}",
                candidate.display(),
                options.config_path.display()
            );
            return Ok(paths::to_config_string(&relative));
        }
    }

    Err(Error::parent_config_not_found(
        options.config_path.display().to_string(),
    ))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// On-disk tree mirroring the classic parent folder layouts:
    ///
    /// - `terragrunt-in-root/` with a config at the top only
    /// - `no-terragrunt-in-root/` with no config at all
    /// - `multiple-terragrunt-in-parents/` with configs at several levels
    pub struct ParentFolders {
        pub dir: TempDir,
    }

    impl ParentFolders {
        pub fn new() -> Self {
            let dir = TempDir::new().unwrap();
            let root = dir.path();

            for tree in [
                "terragrunt-in-root/child/sub-child/sub-sub-child",
                "no-terragrunt-in-root/child/sub-child",
                "multiple-terragrunt-in-parents/child/sub-child/sub-sub-child",
            ] {
                fs::create_dir_all(root.join(tree)).unwrap();
            }

            for file in [
                "terragrunt-in-root",
                "multiple-terragrunt-in-parents",
                "multiple-terragrunt-in-parents/child",
                "multiple-terragrunt-in-parents/child/sub-child",
            ] {
                fs::write(root.join(file).join(DEFAULT_CONFIG_FILENAME), "").unwrap();
            }

            Self { dir }
        }

        /// Absolute path of a config file inside the fixture tree
        pub fn config(&self, rel_dir: &str) -> PathBuf {
            self.dir.path().join(rel_dir).join(DEFAULT_CONFIG_FILENAME)
        }

        /// Same config path, expressed relative to the working directory
        pub fn relative_config(&self, rel_dir: &str) -> PathBuf {
            let cwd = std::env::current_dir().unwrap();
            paths::relative_path(&paths::clean(&self.config(rel_dir)), &paths::clean(&cwd))
        }

        pub fn root(&self) -> &Path {
            self.dir.path()
        }
    }
}

//! Input records consumed by resolution

use serde::Deserialize;
use std::path::PathBuf;

/// File name the parent folder search looks for
pub const DEFAULT_CONFIG_FILENAME: &str = ".terragrunt";

/// Options describing the config file being resolved
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ResolveOptions {
    /// Path of the current config file, absolute or relative to the working directory
    pub config_path: PathBuf,
    /// Whether the surrounding tool runs without prompting. Not used during resolution.
    #[serde(default)]
    pub non_interactive: bool,
}

impl ResolveOptions {
    /// Create options for the config file at `config_path`
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            non_interactive: false,
        }
    }

    /// Set the non-interactive flag
    pub fn with_non_interactive(mut self, non_interactive: bool) -> Self {
        self.non_interactive = non_interactive;
        self
    }
}

/// A child config's reference to the parent config it includes
///
/// `path` may itself be an interpolation such as `${find_in_parent_folders()}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct IncludeConfig {
    pub path: String,
}

impl IncludeConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let opts = ResolveOptions::new("/root/child/.terragrunt").with_non_interactive(true);

        assert_eq!(opts.config_path, PathBuf::from("/root/child/.terragrunt"));
        assert!(opts.non_interactive);
    }

    #[test]
    fn test_deserialize_include_block() {
        let yaml = "path: ${find_in_parent_folders()}\n";
        let include: IncludeConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(include, IncludeConfig::new("${find_in_parent_folders()}"));
    }

    #[test]
    fn test_deserialize_options_defaults_non_interactive() {
        let opts: ResolveOptions = serde_yaml::from_str("config_path: ../child/.terragrunt\n").unwrap();

        assert_eq!(opts, ResolveOptions::new("../child/.terragrunt"));
    }
}

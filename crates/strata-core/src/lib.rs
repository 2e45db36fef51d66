//! strata-core: interpolation helpers for configuration files that include a
//! parent configuration
//!
//! A child config can refer to where it sits relative to the config it
//! includes, locate the nearest parent config on disk, and read environment
//! variables with defaults.
//!
//! # Example
//!
//! ```rust
//! use strata_core::{resolve_config_string, IncludeConfig, ResolveOptions};
//!
//! let options = ResolveOptions::new("/live/prod/app/.terragrunt");
//! let include = IncludeConfig::new("../../.terragrunt");
//!
//! let key = resolve_config_string(
//!     "state/${path_relative_to_include()}/terraform.tfstate",
//!     Some(&include),
//!     &options,
//! )
//! .unwrap();
//! assert_eq!(key, "state/prod/app/terraform.tfstate");
//! ```

pub mod env;
pub mod error;
pub mod include;
pub mod interpolation;
pub mod options;
pub mod parent;
pub mod paths;

mod value;

pub use env::{EnvSource, ProcessEnv};
pub use error::{Error, ErrorKind, Result};
pub use interpolation::{resolve_config_string, resolve_interpolation, Interpolator};
pub use options::{IncludeConfig, ResolveOptions, DEFAULT_CONFIG_FILENAME};

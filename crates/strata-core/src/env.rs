//! `get_env`: environment variable lookup with a quoted default
//!
//! Usage:
//!   ${get_env(NAME,'default')}
//!   ${get_env(NAME,"default")}
//!
//! A variable that is set to the empty string is present and yields `""`;
//! only an unset variable falls back to the default.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Read access to environment variables
pub trait EnvSource: Send + Sync {
    /// Value of `name`, or `None` when it is not set
    fn var(&self, name: &str) -> Option<String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var_os(name).map(|value| value.to_string_lossy().into_owned())
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

/// Parsed `get_env` arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetEnvArgs {
    pub name: String,
    pub default: String,
}

fn get_env_params_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"^([^,'"\s]+),(?:'([^']*)'|"([^"]*)")$"#)
            .expect("get_env parameter pattern is valid")
    })
}

/// Parse the raw text between `get_env(` and `)`
pub fn parse_get_env_params(params: &str) -> Result<GetEnvArgs> {
    let caps = get_env_params_regex()
        .captures(params)
        .ok_or_else(|| Error::invalid_function_parameters(params))?;

    let default = caps
        .get(2)
        .or_else(|| caps.get(3))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    Ok(GetEnvArgs {
        name: caps[1].to_string(),
        default,
    })
}

/// Resolve `get_env` against `env`
pub fn get_env<E: EnvSource + ?Sized>(params: &str, env: &E) -> Result<String> {
    let args = parse_get_env_params(params)?;

    match env.var(&args.name) {
        Some(value) => Ok(value),
        None => {
            log::debug!("{} is not set, using default", args.name);
            Ok(args.default)
        }
    }
}

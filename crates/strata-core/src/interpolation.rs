//! Interpolation scanning and dispatch
//!
//! Recognizes spans of the form:
//! - `${path_relative_to_include()}` - this config's directory relative to the included one
//! - `${find_in_parent_folders()}` - nearest ancestor config file
//! - `${get_env(NAME,'default')}` - environment variable with default
//!
//! Zero-argument functions may drop the parentheses (`${find_in_parent_folders}`).
//! Text outside `${...}` is copied through untouched, including lone `$` and `{`.

use crate::env::{self, EnvSource, ProcessEnv};
use crate::error::{Error, Result};
use crate::include;
use crate::options::{IncludeConfig, ResolveOptions};
use crate::parent;
use regex::Regex;
use std::sync::OnceLock;

/// Built-in helper functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelperFunction {
    PathRelativeToInclude,
    FindInParentFolders,
    GetEnv,
}

impl HelperFunction {
    /// Look a helper up by the name used inside `${...}`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "path_relative_to_include" => Some(Self::PathRelativeToInclude),
            "find_in_parent_folders" => Some(Self::FindInParentFolders),
            "get_env" => Some(Self::GetEnv),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PathRelativeToInclude => "path_relative_to_include",
            Self::FindInParentFolders => "find_in_parent_folders",
            Self::GetEnv => "get_env",
        }
    }
}

/// A function call parsed out of a single `${...}` span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionCall<'a> {
    /// Identifier before the optional parentheses
    pub name: &'a str,
    /// Raw text between the parentheses, `None` for the `${name}` form
    pub args: Option<&'a str>,
}

fn function_call_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)^\$\{([A-Za-z_][A-Za-z0-9_]*)(?:\((.*)\))?\}$")
            .expect("function call pattern is valid")
    })
}

impl<'a> FunctionCall<'a> {
    /// Parse a complete span. Anything but `${identifier}` or
    /// `${identifier(args)}` is an `InvalidInterpolationSyntax` error.
    pub fn parse(span: &'a str) -> Result<Self> {
        let caps = function_call_regex()
            .captures(span)
            .ok_or_else(|| Error::invalid_interpolation_syntax(span))?;

        let name = caps
            .get(1)
            .map(|m| m.as_str())
            .ok_or_else(|| Error::invalid_interpolation_syntax(span))?;

        Ok(Self {
            name,
            args: caps.get(2).map(|m| m.as_str()),
        })
    }
}

/// Check if a string contains anything that starts an interpolation
pub fn contains_interpolation(input: &str) -> bool {
    input.contains("${")
}

/// Resolves interpolations, reading environment variables from `E`
#[derive(Debug, Clone, Default)]
pub struct Interpolator<E = ProcessEnv> {
    env: E,
}

impl Interpolator<ProcessEnv> {
    /// Create an interpolator that reads the process environment
    pub fn new() -> Self {
        Self { env: ProcessEnv }
    }
}

impl<E: EnvSource> Interpolator<E> {
    /// Create an interpolator backed by a custom environment
    pub fn with_env(env: E) -> Self {
        Self { env }
    }

    /// Replace every `${...}` span in `input` with its resolved value.
    ///
    /// A span runs from `${` to the first following `}`. An unterminated `${`
    /// fails with the rest of the input as the offending span. The first
    /// failing span aborts the whole string.
    pub fn resolve_config_string(
        &self,
        input: &str,
        include: Option<&IncludeConfig>,
        options: &ResolveOptions,
    ) -> Result<String> {
        let mut output = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(start) = rest.find("${") {
            output.push_str(&rest[..start]);
            let candidate = &rest[start..];

            let Some(end) = candidate.find('}') else {
                return Err(Error::invalid_interpolation_syntax(candidate));
            };

            let span = &candidate[..=end];
            output.push_str(&self.resolve_interpolation(span, include, options)?);
            rest = &candidate[end + 1..];
        }

        output.push_str(rest);
        Ok(output)
    }

    /// Resolve a single span. The whole of `span` must be one `${...}` call.
    pub fn resolve_interpolation(
        &self,
        span: &str,
        include: Option<&IncludeConfig>,
        options: &ResolveOptions,
    ) -> Result<String> {
        let call = FunctionCall::parse(span)?;
        let function = HelperFunction::from_name(call.name)
            .ok_or_else(|| Error::invalid_interpolation_syntax(span))?;

        log::debug!(
            "Resolving {} in {}",
            function.name(),
            options.config_path.display()
        );

        match function {
            HelperFunction::PathRelativeToInclude => {
                expect_no_args(&call)?;
                include::path_relative_to_include(include, options, self)
            }
            HelperFunction::FindInParentFolders => {
                expect_no_args(&call)?;
                parent::find_in_parent_folders(options)
            }
            HelperFunction::GetEnv => env::get_env(call.args.unwrap_or(""), &self.env),
        }
    }
}

fn expect_no_args(call: &FunctionCall<'_>) -> Result<()> {
    match call.args {
        Some(args) if !args.is_empty() => Err(Error::invalid_function_parameters(args)
            .with_help(format!("{}() takes no arguments", call.name))),
        _ => Ok(()),
    }
}

/// Resolve every span in `input` using the process environment
pub fn resolve_config_string(
    input: &str,
    include: Option<&IncludeConfig>,
    options: &ResolveOptions,
) -> Result<String> {
    Interpolator::new().resolve_config_string(input, include, options)
}

/// Resolve one complete span using the process environment
pub fn resolve_interpolation(
    span: &str,
    include: Option<&IncludeConfig>,
    options: &ResolveOptions,
) -> Result<String> {
    Interpolator::new().resolve_interpolation(span, include, options)
}

//! `path_relative_to_include`: where the current config sits relative to the
//! config it includes

use crate::env::EnvSource;
use crate::error::Result;
use crate::interpolation::Interpolator;
use crate::options::{IncludeConfig, ResolveOptions};
use crate::paths;
use std::path::Path;

/// Directory of the current config relative to the directory of the included
/// config, or `.` when there is no include.
///
/// The include path is itself resolved first (without an include, so nesting
/// stops after one level). A relative include path is taken relative to the
/// current config's directory.
pub fn path_relative_to_include<E: EnvSource>(
    include: Option<&IncludeConfig>,
    options: &ResolveOptions,
    interpolator: &Interpolator<E>,
) -> Result<String> {
    let Some(include) = include else {
        return Ok(".".to_string());
    };

    let resolved = interpolator.resolve_config_string(&include.path, None, options)?;
    let current_dir = paths::containing_dir(&options.config_path)?;

    let include_path = Path::new(&resolved);
    let include_file = if include_path.is_absolute() {
        include_path.to_path_buf()
    } else {
        current_dir.join(include_path)
    };
    let include_dir = paths::containing_dir(&include_file)?;

    Ok(paths::to_config_string(&paths::relative_path(
        &current_dir,
        &include_dir,
    )))
}

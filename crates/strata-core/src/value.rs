//! Resolution over parsed YAML documents

use crate::env::EnvSource;
use crate::error::Result;
use crate::interpolation::{contains_interpolation, Interpolator};
use crate::options::{IncludeConfig, ResolveOptions};
use serde_yaml::value::TaggedValue;
use serde_yaml::{Mapping, Value};

impl<E: EnvSource> Interpolator<E> {
    /// Resolve every string scalar in `value`, recursing through sequences,
    /// mappings and tagged values. Keys and non-string scalars are copied as-is.
    /// The first failing string aborts the whole document.
    pub fn resolve_value(
        &self,
        value: &Value,
        include: Option<&IncludeConfig>,
        options: &ResolveOptions,
    ) -> Result<Value> {
        let resolved = match value {
            Value::String(s) if contains_interpolation(s) => {
                Value::String(self.resolve_config_string(s, include, options)?)
            }
            Value::Sequence(items) => Value::Sequence(
                items
                    .iter()
                    .map(|item| self.resolve_value(item, include, options))
                    .collect::<Result<Vec<_>>>()?,
            ),
            Value::Mapping(map) => {
                let mut out = Mapping::with_capacity(map.len());
                for (key, item) in map {
                    out.insert(key.clone(), self.resolve_value(item, include, options)?);
                }
                Value::Mapping(out)
            }
            Value::Tagged(tagged) => Value::Tagged(Box::new(TaggedValue {
                tag: tagged.tag.clone(),
                value: self.resolve_value(&tagged.value, include, options)?,
            })),
            other => other.clone(),
        };

        Ok(resolved)
    }
}

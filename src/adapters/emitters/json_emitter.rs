use serde_json::{Map, Value};

use crate::core::errors::{ResfillError, Result};
use crate::core::models::resource_binding::ResourceBinding;
use crate::core::traits::emitter::ResourceEmitter;

/// Emits a flat name-to-value JSON object.
///
/// Useful for build systems (or CI steps) that consume configuration as
/// JSON rather than Android resource XML.
pub struct JsonEmitter;

impl ResourceEmitter for JsonEmitter {
    fn emit(&self, bindings: &[ResourceBinding]) -> Result<String> {
        let mut map = Map::new();
        for binding in bindings {
            map.insert(binding.name.clone(), Value::String(binding.value.clone()));
        }

        let mut out = serde_json::to_string_pretty(&Value::Object(map)).map_err(|e| {
            ResfillError::InvalidConfig {
                detail: format!("JSON serialization failed: {e}"),
            }
        })?;
        out.push('\n');
        Ok(out)
    }

    fn format_name(&self) -> &str {
        "json"
    }

    fn default_file_name(&self) -> &str {
        "config_strings.json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::resource_binding::BindingSource;

    fn binding(name: &str, value: &str) -> ResourceBinding {
        ResourceBinding {
            name: name.to_string(),
            value: value.to_string(),
            source: BindingSource::Key(name.to_string()),
            defaulted: false,
        }
    }

    #[test]
    fn emits_flat_object() {
        let out = JsonEmitter
            .emit(&[binding("GOOGLE_MAPS_API_KEY", "abc123")])
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["GOOGLE_MAPS_API_KEY"], "abc123");
    }

    #[test]
    fn empty_bindings_emit_empty_object() {
        let out = JsonEmitter.emit(&[]).unwrap();

        assert_eq!(out.trim(), "{}");
    }

    #[test]
    fn quotes_in_values_survive_round_trip() {
        let out = JsonEmitter.emit(&[binding("KEY", "a \"b\" c")]).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["KEY"], "a \"b\" c");
    }
}

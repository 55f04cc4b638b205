use crate::core::errors::Result;
use crate::core::models::resource_binding::ResourceBinding;
use crate::core::traits::emitter::ResourceEmitter;

/// Emits `name=value` lines, gradle.properties-style.
pub struct PropertiesEmitter;

impl ResourceEmitter for PropertiesEmitter {
    fn emit(&self, bindings: &[ResourceBinding]) -> Result<String> {
        let mut out = String::from("# Generated by resfill. Do not edit; do not commit.\n");

        for binding in bindings {
            out.push_str(&binding.name);
            out.push('=');
            out.push_str(&binding.value);
            out.push('\n');
        }

        Ok(out)
    }

    fn format_name(&self) -> &str {
        "properties"
    }

    fn default_file_name(&self) -> &str {
        "config.properties"
    }
}

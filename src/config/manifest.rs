use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::core::errors::{ResfillError, Result};
use crate::core::models::resource_binding::BindingSpec;

/// Top-level resfill configuration read from `resfill.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    pub resfill: ResfillSection,
    /// Opaque passthrough pairs forwarded verbatim to the output.
    /// resfill never interprets these values.
    #[serde(default)]
    pub build: BTreeMap<String, String>,
    #[serde(default, rename = "binding")]
    pub bindings: Vec<BindingDecl>,
}

impl Manifest {
    /// Load the configuration from the given manifest path.
    ///
    /// After parsing, validates the format version, resource names,
    /// and binding uniqueness so every later stage can trust the
    /// declarations.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ResfillError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let manifest: Self = toml::from_str(&content).map_err(|e| ResfillError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })?;

        // Check format version compatibility
        if manifest.resfill.format_version > CURRENT_FORMAT_VERSION {
            return Err(ResfillError::FormatVersionTooNew {
                project_version: manifest.resfill.format_version,
                supported_version: CURRENT_FORMAT_VERSION,
            });
        }

        // Validate binding names and uniqueness
        let mut seen = BTreeSet::new();
        for decl in &manifest.bindings {
            crate::cli::context::validate_resource_name(&decl.name)?;
            if !seen.insert(decl.name.as_str()) {
                return Err(ResfillError::DuplicateBinding {
                    name: decl.name.clone(),
                });
            }
        }

        // Passthrough names feed the same output surface
        for name in manifest.build.keys() {
            crate::cli::context::validate_resource_name(name)?;
        }

        Ok(manifest)
    }

    /// The declared bindings as resolved specs, defaults applied.
    pub fn binding_specs(&self) -> Vec<BindingSpec> {
        self.bindings.iter().map(BindingDecl::to_spec).collect()
    }

    /// The `[build]` passthrough table as sorted pairs.
    pub fn passthrough_pairs(&self) -> Vec<(String, String)> {
        self.build
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Output file path, falling back to the emitter's default name.
    pub fn output_path(&self, default_file_name: &str) -> String {
        self.resfill
            .output
            .clone()
            .unwrap_or_else(|| default_file_name.to_string())
    }
}

/// Current manifest format version supported by this build of resfill.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// The `[resfill]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ResfillSection {
    pub version: String,
    /// Format version for backward compatibility. Defaults to 1 if missing.
    #[serde(default = "default_format_version")]
    pub format_version: u32,
    /// Source properties file path. Defaults to `.env`.
    #[serde(default = "default_source")]
    pub source: String,
    /// Output file path (optional; the emitter supplies a default name).
    pub output: Option<String>,
    /// Output format. Defaults to `xml`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format_version() -> u32 {
    1
}

fn default_source() -> String {
    ".env".to_string()
}

fn default_format() -> String {
    "xml".to_string()
}

/// A `[[binding]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct BindingDecl {
    /// Resource name registered with the build system.
    pub name: String,
    /// Source key to look up. Defaults to `name`.
    pub key: Option<String>,
    /// Fallback value when the key is absent. Defaults to `""`.
    pub default: Option<String>,
    /// Fail the run when the key is absent.
    #[serde(default)]
    pub required: bool,
}

impl BindingDecl {
    fn to_spec(&self) -> BindingSpec {
        BindingSpec {
            name: self.name.clone(),
            key: self.key.clone().unwrap_or_else(|| self.name.clone()),
            default: self.default.clone().unwrap_or_default(),
            required: self.required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Manifest {
        toml::from_str(content).unwrap()
    }

    #[test]
    fn minimal_manifest_applies_defaults() {
        let manifest = parse(
            r#"
[resfill]
version = "0.1.0"

[[binding]]
name = "GOOGLE_MAPS_API_KEY"
"#,
        );

        assert_eq!(manifest.resfill.source, ".env");
        assert_eq!(manifest.resfill.format, "xml");
        assert_eq!(manifest.resfill.format_version, 1);

        let specs = manifest.binding_specs();
        assert_eq!(specs[0].key, "GOOGLE_MAPS_API_KEY");
        assert_eq!(specs[0].default, "");
        assert!(!specs[0].required);
    }

    #[test]
    fn binding_overrides_are_honored() {
        let manifest = parse(
            r#"
[resfill]
version = "0.1.0"
source = "local.properties"
format = "json"
output = "out/config.json"

[[binding]]
name = "GOOGLE_MAPS_API_KEY"
key = "MAPS_KEY"
default = "placeholder"
required = true
"#,
        );

        assert_eq!(manifest.resfill.source, "local.properties");
        assert_eq!(manifest.output_path("x.json"), "out/config.json");

        let specs = manifest.binding_specs();
        assert_eq!(specs[0].key, "MAPS_KEY");
        assert_eq!(specs[0].default, "placeholder");
        assert!(specs[0].required);
    }

    #[test]
    fn build_table_is_sorted_passthrough() {
        let manifest = parse(
            r#"
[resfill]
version = "0.1.0"

[build]
targetSdk = "35"
minSdk = "23"
"#,
        );

        let pairs = manifest.passthrough_pairs();
        assert_eq!(
            pairs,
            vec![
                ("minSdk".to_string(), "23".to_string()),
                ("targetSdk".to_string(), "35".to_string()),
            ]
        );
    }

    #[test]
    fn load_missing_manifest_reports_file_not_found() {
        let result = Manifest::load(Path::new("/nonexistent/resfill.toml"));

        assert!(matches!(result, Err(ResfillError::FileNotFound { .. })));
    }

    #[test]
    fn output_path_falls_back_to_emitter_default() {
        let manifest = parse(
            r#"
[resfill]
version = "0.1.0"
"#,
        );

        assert_eq!(manifest.output_path("config_strings.xml"), "config_strings.xml");
    }
}

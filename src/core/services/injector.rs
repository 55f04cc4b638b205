use std::io::ErrorKind;
use std::path::Path;

use crate::core::errors::{ResfillError, Result};
use crate::core::models::properties_file::PropertiesFile;
use crate::core::models::resource_binding::{BindingSource, BindingSpec, ResourceBinding};
use crate::core::traits::parser::ConfigParser;

/// Resolves declared bindings against a local properties file.
///
/// Absence is never fatal here: a missing source file reads as an empty
/// mapping and a missing key falls back to the binding's default. Only a
/// real I/O failure on an existing file, a corrupt file, or a missing
/// `required` key propagate as errors.
pub struct Injector;

impl Injector {
    /// Read and parse the source properties file.
    ///
    /// A nonexistent file is expected (local properties are never
    /// committed) and yields an empty mapping. Any other read failure
    /// indicates an environment problem and propagates.
    pub fn load_source(path: &Path, parser: &dyn ConfigParser) -> Result<PropertiesFile> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let mut file = parser.parse(&content).map_err(|e| match e {
                    ResfillError::ParseError { detail, .. } => ResfillError::ParseError {
                        file: path.to_path_buf(),
                        detail,
                    },
                    other => other,
                })?;
                file.source_path = Some(path.to_path_buf());
                Ok(file)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(PropertiesFile::empty()),
            Err(e) => Err(e.into()),
        }
    }

    /// Resolve each spec to a concrete `ResourceBinding`.
    ///
    /// The returned values are never absent: a missing key resolves to
    /// the spec's default. With `strict`, or for specs marked
    /// `required`, a missing key fails instead.
    pub fn resolve(
        &self,
        specs: &[BindingSpec],
        source: &PropertiesFile,
        source_path: &Path,
        strict: bool,
    ) -> Result<Vec<ResourceBinding>> {
        let mut bindings = Vec::with_capacity(specs.len());

        for spec in specs {
            let binding = match source.get(&spec.key) {
                Some(value) => ResourceBinding {
                    name: spec.name.clone(),
                    value: value.to_string(),
                    source: BindingSource::Key(spec.key.clone()),
                    defaulted: false,
                },
                None => {
                    if strict || spec.required {
                        return Err(ResfillError::MissingRequiredKey {
                            key: spec.key.clone(),
                            source_file: source_path.to_path_buf(),
                        });
                    }
                    ResourceBinding {
                        name: spec.name.clone(),
                        value: spec.default.clone(),
                        source: BindingSource::Key(spec.key.clone()),
                        defaulted: true,
                    }
                }
            };
            bindings.push(binding);
        }

        Ok(bindings)
    }

    /// Turn the manifest's opaque `[build]` passthrough pairs into
    /// literal bindings, sorted by name for deterministic output.
    pub fn passthrough(&self, pairs: &[(String, String)]) -> Vec<ResourceBinding> {
        let mut bindings: Vec<ResourceBinding> = pairs
            .iter()
            .map(|(name, value)| ResourceBinding {
                name: name.clone(),
                value: value.clone(),
                source: BindingSource::Literal,
                defaulted: false,
            })
            .collect();
        bindings.sort_by(|a, b| a.name.cmp(&b.name));
        bindings
    }
}

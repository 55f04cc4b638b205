use std::collections::BTreeSet;

use crate::core::errors::Result;
use crate::core::models::properties_file::PropertiesFile;
use crate::core::models::resource_binding::BindingSpec;

/// Result of checking the source properties file against the manifest's
/// declared bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    /// Declared source keys absent from the properties file.
    pub missing: Vec<String>,
    /// Declared source keys present but with an empty value.
    pub empty_values: Vec<String>,
    /// Keys in the properties file not referenced by any binding.
    pub unused: Vec<String>,
    /// Missing keys whose binding is marked required.
    pub missing_required: Vec<String>,
}

impl CheckResult {
    /// Returns true if every binding resolves to a non-empty value and
    /// no source key goes unused.
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty() && self.empty_values.is_empty() && self.unused.is_empty()
    }

    /// Total number of issues found.
    pub fn issue_count(&self) -> usize {
        self.missing.len() + self.empty_values.len() + self.unused.len()
    }
}

/// Validates the source properties file against the declared bindings.
pub struct CheckService;

impl CheckService {
    /// Compare source keys against binding declarations.
    ///
    /// - **Missing**: binding keys absent from the source file
    /// - **Empty values**: binding keys present with an empty value
    /// - **Unused**: source keys no binding references
    /// - **Missing required**: the subset of missing keys that would
    ///   fail an inject run
    ///
    /// All result vectors are sorted alphabetically.
    pub fn check(&self, source: &PropertiesFile, specs: &[BindingSpec]) -> Result<CheckResult> {
        let source_keys: BTreeSet<&str> = source.keys().into_iter().collect();
        let declared_keys: BTreeSet<&str> = specs.iter().map(|s| s.key.as_str()).collect();

        let missing: Vec<String> = declared_keys
            .difference(&source_keys)
            .map(|k| k.to_string())
            .collect();

        let unused: Vec<String> = source_keys
            .difference(&declared_keys)
            .map(|k| k.to_string())
            .collect();

        let empty_values: Vec<String> = declared_keys
            .iter()
            .filter(|k| source.get(k) == Some(""))
            .map(|k| k.to_string())
            .collect();

        let missing_required: Vec<String> = specs
            .iter()
            .filter(|s| s.required && !source_keys.contains(s.key.as_str()))
            .map(|s| s.key.clone())
            .collect();

        Ok(CheckResult {
            missing,
            empty_values,
            unused,
            missing_required,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::properties_file::{Line, PropertyEntry};

    /// Helper to build a PropertiesFile from key-value pairs.
    fn make_source(pairs: &[(&str, &str)]) -> PropertiesFile {
        PropertiesFile {
            lines: pairs
                .iter()
                .enumerate()
                .map(|(i, (k, v))| {
                    Line::Entry(PropertyEntry {
                        key: k.to_string(),
                        value: v.to_string(),
                        line_number: i + 1,
                    })
                })
                .collect(),
            source_path: None,
        }
    }

    fn make_specs(keys: &[&str]) -> Vec<BindingSpec> {
        keys.iter()
            .map(|k| BindingSpec {
                name: k.to_string(),
                key: k.to_string(),
                default: String::new(),
                required: false,
            })
            .collect()
    }

    #[test]
    fn all_present_no_issues() {
        let svc = CheckService;
        let source = make_source(&[("MAPS_KEY", "abc"), ("SENTRY_DSN", "https://x")]);
        let specs = make_specs(&["MAPS_KEY", "SENTRY_DSN"]);
        let result = svc.check(&source, &specs).unwrap();

        assert!(result.is_ok());
        assert_eq!(result.issue_count(), 0);
    }

    #[test]
    fn detects_missing_keys() {
        let svc = CheckService;
        let source = make_source(&[("MAPS_KEY", "abc")]);
        let specs = make_specs(&["MAPS_KEY", "API_KEY", "SECRET"]);
        let result = svc.check(&source, &specs).unwrap();

        assert_eq!(result.missing, vec!["API_KEY", "SECRET"]);
        assert!(result.unused.is_empty());
        assert!(result.missing_required.is_empty());
    }

    #[test]
    fn detects_unused_keys() {
        let svc = CheckService;
        let source = make_source(&[("MAPS_KEY", "abc"), ("OLD_VAR", "legacy")]);
        let specs = make_specs(&["MAPS_KEY"]);
        let result = svc.check(&source, &specs).unwrap();

        assert!(result.missing.is_empty());
        assert_eq!(result.unused, vec!["OLD_VAR"]);
    }

    #[test]
    fn detects_empty_values() {
        let svc = CheckService;
        let source = make_source(&[("MAPS_KEY", ""), ("SENTRY_DSN", "x")]);
        let specs = make_specs(&["MAPS_KEY", "SENTRY_DSN"]);
        let result = svc.check(&source, &specs).unwrap();

        assert_eq!(result.empty_values, vec!["MAPS_KEY"]);
    }

    #[test]
    fn detects_missing_required() {
        let svc = CheckService;
        let source = make_source(&[]);
        let mut specs = make_specs(&["MAPS_KEY", "OPTIONAL"]);
        specs[0].required = true;
        let result = svc.check(&source, &specs).unwrap();

        assert_eq!(result.missing, vec!["MAPS_KEY", "OPTIONAL"]);
        assert_eq!(result.missing_required, vec!["MAPS_KEY"]);
    }

    #[test]
    fn empty_source_reports_all_missing() {
        let svc = CheckService;
        let source = make_source(&[]);
        let specs = make_specs(&["A", "B"]);
        let result = svc.check(&source, &specs).unwrap();

        assert_eq!(result.missing, vec!["A", "B"]);
    }

    #[test]
    fn no_bindings_reports_all_unused() {
        let svc = CheckService;
        let source = make_source(&[("A", "1"), ("B", "2")]);
        let result = svc.check(&source, &[]).unwrap();

        assert_eq!(result.unused, vec!["A", "B"]);
    }

    #[test]
    fn duplicate_source_key_counted_once() {
        let svc = CheckService;
        let source = make_source(&[("KEY", "first"), ("KEY", "last")]);
        let specs = make_specs(&["KEY"]);
        let result = svc.check(&source, &specs).unwrap();

        assert!(result.is_ok());
    }
}

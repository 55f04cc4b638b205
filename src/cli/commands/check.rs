use std::path::Path;

use crate::adapters::parsers::properties_parser::PropertiesParser;
use crate::cli::output;
use crate::config::manifest::Manifest;
use crate::core::errors::{ResfillError, Result};
use crate::core::services::check_service::CheckService;
use crate::core::services::injector::Injector;

/// Execute the `resfill check` command.
///
/// Dry run: compares the source properties file against the manifest's
/// bindings and reports missing, empty, and unused keys. Writes nothing.
/// Fails only when a `required` binding has no source key.
pub fn execute() -> Result<()> {
    let manifest = Manifest::load(crate::cli::context::manifest_path())?;

    let source_path = Path::new(&manifest.resfill.source);
    let parser = PropertiesParser;
    let source = Injector::load_source(source_path, &parser)?;

    let specs = manifest.binding_specs();
    let svc = CheckService;
    let result = svc.check(&source, &specs)?;

    let total = specs.len();
    let present = total - result.missing.len();

    output::header("🔍 resfill check");

    if source.source_path.is_none() {
        output::warning(&format!("{} does not exist", source_path.display()));
    }

    if !result.missing.is_empty() {
        output::warning(&format!(
            "Missing source keys ({}):",
            result.missing.len()
        ));
        for key in &result.missing {
            output::bullet(key);
        }
    }

    if !result.empty_values.is_empty() {
        output::warning(&format!(
            "Keys with empty values ({}):",
            result.empty_values.len()
        ));
        for key in &result.empty_values {
            output::bullet(key);
        }
    }

    if !result.unused.is_empty() {
        output::warning(&format!(
            "Source keys no binding references ({}):",
            result.unused.len()
        ));
        for key in &result.unused {
            output::bullet(key);
        }
    }

    if result.is_ok() {
        output::success(&format!("{present}/{total} bindings resolvable — all good"));
    } else {
        println!();
        output::success(&format!("{present}/{total} bindings resolvable"));
    }

    // Missing optional keys default at inject time; missing required
    // ones would fail it, so fail here too.
    if let Some(key) = result.missing_required.first() {
        return Err(ResfillError::MissingRequiredKey {
            key: key.clone(),
            source_file: source_path.to_path_buf(),
        });
    }

    Ok(())
}

use std::path::Path;

use crate::adapters::parsers::properties_parser::PropertiesParser;
use crate::cli::output;
use crate::config::manifest::Manifest;
use crate::core::errors::Result;
use crate::core::services::injector::Injector;

/// Execute the `resfill status` command.
///
/// Shows what the manifest declares and whether the source file is
/// present, without resolving or writing anything.
pub fn execute() -> Result<()> {
    let manifest_path = crate::cli::context::manifest_path();
    let manifest = Manifest::load(manifest_path)?;

    output::header("resfill status");

    output::success(&format!("Manifest: {}", manifest_path.display()));
    output::success(&format!(
        "Format: {} (manifest version {})",
        manifest.resfill.format, manifest.resfill.version
    ));

    let source_path = Path::new(&manifest.resfill.source);
    if source_path.exists() {
        let parser = PropertiesParser;
        let source = Injector::load_source(source_path, &parser)?;
        output::success(&format!(
            "Source: {} ({} key(s))",
            source_path.display(),
            source.keys().len()
        ));
    } else {
        output::warning(&format!(
            "Source: {} (not found — bindings will use defaults)",
            source_path.display()
        ));
    }

    let emitter = crate::adapters::emitters::emitter_for(&manifest.resfill.format)?;
    output::success(&format!(
        "Output: {}",
        manifest.output_path(emitter.default_file_name())
    ));

    output::success(&format!(
        "Bindings: {} declared, {} required",
        manifest.bindings.len(),
        manifest.bindings.iter().filter(|b| b.required).count()
    ));

    if !manifest.build.is_empty() {
        output::success(&format!(
            "Build passthrough: {} opaque value(s)",
            manifest.build.len()
        ));
    }

    Ok(())
}

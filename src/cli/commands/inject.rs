use std::path::Path;

use crate::adapters::emitters;
use crate::adapters::parsers::properties_parser::PropertiesParser;
use crate::cli::output;
use crate::config::manifest::Manifest;
use crate::core::errors::Result;
use crate::core::models::resource_binding::BindingSource;
use crate::core::services::injector::Injector;

/// Execute the `resfill inject` command.
///
/// Loads the source properties file (a missing file reads as empty),
/// resolves every declared binding with its default, appends the
/// `[build]` passthrough pairs, and writes the rendered resource file.
pub fn execute(
    output_override: Option<&str>,
    format_override: Option<&str>,
    strict: bool,
    verbose: bool,
) -> Result<()> {
    let manifest = Manifest::load(crate::cli::context::manifest_path())?;

    let format = format_override.unwrap_or(&manifest.resfill.format);
    let emitter = emitters::emitter_for(format)?;

    let source_path = Path::new(&manifest.resfill.source);
    let parser = PropertiesParser;
    let source = Injector::load_source(source_path, &parser)?;

    output::header(&format!("Injecting from {}", source_path.display()));

    if source.source_path.is_none() {
        output::warning(&format!(
            "{} not found — all bindings use their defaults",
            source_path.display()
        ));
    }

    let injector = Injector;
    let specs = manifest.binding_specs();
    let mut bindings = injector.resolve(&specs, &source, source_path, strict)?;
    bindings.extend(injector.passthrough(&manifest.passthrough_pairs()));

    for binding in &bindings {
        if binding.defaulted {
            output::warning(&format!(
                "'{}' not found in {} — using default \"{}\"",
                key_of(binding),
                source_path.display(),
                binding.value
            ));
        } else if verbose {
            match &binding.source {
                BindingSource::Key(key) => {
                    output::detail(&format!("{} ← {key}", binding.name));
                }
                BindingSource::Literal => {
                    output::detail(&format!("{} = literal passthrough", binding.name));
                }
            }
        }
    }

    let rendered = emitter.emit(&bindings)?;

    let output_path = output_override
        .map(str::to_string)
        .unwrap_or_else(|| manifest.output_path(emitter.default_file_name()));

    if let Some(parent) = Path::new(&output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&output_path, &rendered)?;

    let from_source = bindings
        .iter()
        .filter(|b| !b.defaulted && matches!(b.source, BindingSource::Key(_)))
        .count();

    output::success(&format!(
        "Resolved {} binding(s), {from_source} from source",
        bindings.len()
    ));
    output::success(&format!("Written to {output_path}"));

    Ok(())
}

fn key_of(binding: &crate::core::models::resource_binding::ResourceBinding) -> &str {
    match &binding.source {
        BindingSource::Key(key) => key,
        BindingSource::Literal => &binding.name,
    }
}

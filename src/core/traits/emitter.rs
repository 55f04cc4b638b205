use crate::core::errors::Result;
use crate::core::models::resource_binding::ResourceBinding;

/// Port for rendering resolved bindings into an output format.
///
/// One implementation per format the external build system consumes.
pub trait ResourceEmitter: Send + Sync {
    /// Render the bindings to the format's textual representation.
    ///
    /// Output must be deterministic for a given binding list.
    fn emit(&self, bindings: &[ResourceBinding]) -> Result<String>;

    /// Format name as used in the manifest and on the CLI (e.g. `"xml"`).
    fn format_name(&self) -> &str;

    /// Default output file name when the manifest does not set one.
    fn default_file_name(&self) -> &str;
}

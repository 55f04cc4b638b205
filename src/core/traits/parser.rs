use crate::core::errors::Result;
use crate::core::models::properties_file::PropertiesFile;

/// Port for parsing properties-style configuration files.
///
/// v0.1 only ships with `PropertiesParser`; the trait enables future
/// support for JSON or YAML sources.
pub trait ConfigParser: Send + Sync {
    /// Parse raw file content into a structured `PropertiesFile`.
    fn parse(&self, content: &str) -> Result<PropertiesFile>;

    /// File extensions this parser handles (e.g. `[".env", ".properties"]`).
    fn supported_extensions(&self) -> &[&str];
}

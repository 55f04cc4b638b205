/// Where a resolved binding's value came from.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingSource {
    /// Looked up in the source properties file under this key.
    Key(String),
    /// A literal passthrough value from the manifest's `[build]` table.
    Literal,
}

/// A declared binding from the manifest: which source key feeds which
/// resource name, and what to do when the key is absent.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingSpec {
    /// Resource name registered with the external build system.
    pub name: String,
    /// Source key to look up. Defaults to `name` in the manifest.
    pub key: String,
    /// Value used when the key is absent. Defaults to the empty string.
    pub default: String,
    /// When true, a missing key fails the run instead of defaulting.
    pub required: bool,
}

/// A (name, value) pair handed to the external resource system.
///
/// The value is never absent: a missing source file or key degrades
/// to the declared default.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceBinding {
    pub name: String,
    pub value: String,
    pub source: BindingSource,
    /// True when the value is the declared default rather than a
    /// looked-up one.
    pub defaulted: bool,
}

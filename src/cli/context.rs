use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::core::errors::{ResfillError, Result};

static MANIFEST_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Initialize the global manifest path.
/// If `custom` is provided, uses that path; otherwise defaults to `resfill.toml`.
pub fn init(custom: Option<&str>) {
    let path = custom
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("resfill.toml"));
    let _ = MANIFEST_PATH.set(path);
}

/// Get the current manifest path.
pub fn manifest_path() -> &'static Path {
    MANIFEST_PATH
        .get()
        .map(|p| p.as_path())
        .unwrap_or(Path::new("resfill.toml"))
}

/// Validate a resource name against the build system's identifier rules.
///
/// Resource names end up as generated identifiers on the consumer side,
/// so anything outside `[A-Za-z_][A-Za-z0-9_]*` is rejected up front.
pub fn validate_resource_name(name: &str) -> Result<()> {
    static NAME_RE: OnceLock<Regex> = OnceLock::new();
    let re = NAME_RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("resource name regex is valid")
    });

    if re.is_match(name) {
        Ok(())
    } else {
        Err(ResfillError::InvalidResourceName {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_conventional_names() {
        assert!(validate_resource_name("GOOGLE_MAPS_API_KEY").is_ok());
        assert!(validate_resource_name("minSdk").is_ok());
        assert!(validate_resource_name("_private").is_ok());
    }

    #[test]
    fn rejects_invalid_names() {
        assert!(validate_resource_name("").is_err());
        assert!(validate_resource_name("1starts_with_digit").is_err());
        assert!(validate_resource_name("has-dash").is_err());
        assert!(validate_resource_name("has space").is_err());
        assert!(validate_resource_name("has.dot").is_err());
    }
}

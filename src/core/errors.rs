use std::path::PathBuf;

/// All domain errors for resfill.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum ResfillError {
    #[error(
        "File not found: {path}\n\n  \
         Check that the path is correct and the file exists.\n  \
         Run 'resfill init' to scaffold a new manifest."
    )]
    FileNotFound { path: PathBuf },

    #[error(
        "Parse error in {file}: {detail}\n\n  \
         Expected format: KEY=value (one per line).\n  \
         Comments (# or !) and blank lines are allowed."
    )]
    ParseError { file: PathBuf, detail: String },

    #[error("Invalid manifest: {detail}")]
    InvalidConfig { detail: String },

    #[error(
        "Invalid resource name '{name}'\n\n  \
         Resource names must start with a letter or underscore and\n  \
         contain only letters, digits, and underscores."
    )]
    InvalidResourceName { name: String },

    #[error(
        "Duplicate binding '{name}'\n\n  \
         Each [[binding]] in resfill.toml must have a unique name.\n  \
         Remove or rename one of the duplicate entries."
    )]
    DuplicateBinding { name: String },

    #[error(
        "Required key '{key}' not found in {source_file}\n\n  \
         The binding is marked required (or the run is --strict), so the\n  \
         empty-string default is not allowed.\n\n  \
         Solutions:\n    \
         → Add '{key}=<value>' to {source_file}\n    \
         → Drop 'required = true' from the binding to accept the default"
    )]
    MissingRequiredKey { key: String, source_file: PathBuf },

    #[error(
        "Unknown output format '{name}'\n\n  \
         Supported formats: xml, json, properties."
    )]
    UnknownFormat { name: String },

    #[error(
        "This project uses manifest format version {project_version}, but \
         your resfill only supports up to version {supported_version}.\n\n  \
         Update resfill: cargo install resfill --force"
    )]
    FormatVersionTooNew {
        project_version: u32,
        supported_version: u32,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ResfillError>;

use std::io::Write;
use std::path::Path;

use crate::cli::output;
use crate::core::errors::{ResfillError, Result};

/// Execute the `resfill init` command.
///
/// Scaffolds `resfill.toml` with a commented example binding, creates
/// `.env.example`, and makes sure `.env` stays out of version control.
pub fn execute(verbose: bool) -> Result<()> {
    let manifest_path = crate::cli::context::manifest_path();

    if manifest_path.exists() {
        return Err(ResfillError::InvalidConfig {
            detail: format!(
                "resfill is already initialized in this project ({} exists)",
                manifest_path.display()
            ),
        });
    }

    output::header("resfill — Initializing project");

    let manifest_content = r#"[resfill]
version = "0.1.0"
source = ".env"
# Where the rendered resource file lands. Android example:
# output = "android/app/src/main/res/values/config_strings.xml"
format = "xml"

# Opaque values forwarded verbatim to the output. resfill never
# interprets them.
# [build]
# namespace = "com.example.app"

[[binding]]
name = "GOOGLE_MAPS_API_KEY"
# key = "GOOGLE_MAPS_API_KEY"   # source key, defaults to name
# default = ""                  # used when the key is absent
# required = false              # set true to fail the build instead
"#;
    std::fs::write(manifest_path, manifest_content)?;
    output::success(&format!(
        "Generated {} with defaults",
        manifest_path.display()
    ));

    // Committed template for the uncommitted .env
    if !Path::new(".env.example").exists() {
        std::fs::write(
            ".env.example",
            "# Copy to .env and fill in real values\nGOOGLE_MAPS_API_KEY=\n",
        )?;
        output::success("Created .env.example");
    }

    add_to_gitignore(".env")?;

    output::success("Project ready.\n");
    print_next_steps(verbose);

    Ok(())
}

/// Add an entry to .gitignore if not already present.
fn add_to_gitignore(entry: &str) -> Result<()> {
    let gitignore = Path::new(".gitignore");

    if gitignore.exists() {
        let content = std::fs::read_to_string(gitignore)?;
        if content.lines().any(|l| l.trim() == entry) {
            output::success(&format!("{entry} already in .gitignore"));
            return Ok(());
        }
        let mut file = std::fs::OpenOptions::new().append(true).open(gitignore)?;
        writeln!(file, "\n# resfill: local properties stay local\n{entry}")?;
    } else {
        std::fs::write(
            gitignore,
            format!("# resfill: local properties stay local\n{entry}\n"),
        )?;
    }

    output::success(&format!("Added {entry} to .gitignore"));
    Ok(())
}

/// Print next steps after init.
fn print_next_steps(verbose: bool) {
    println!("  Next steps:");
    println!("     1. Copy .env.example to .env and fill in real values");
    println!("     2. Declare your bindings in resfill.toml");
    println!("     3. Run 'resfill inject' from your build's pre-step");

    if verbose {
        println!();
        println!("  Files created:");
        println!("     resfill.toml   — manifest (commit this)");
        println!("     .env.example   — key template (commit this)");
    }
}

//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# naming-lint configuration

# Preset filling in every rule setting left open below:
# "recommended" (default), "strict" or "minimal"
# preset = "recommended"

# Lowest severity that makes `naming-lint check` exit non-zero
fail_on = "error"

# Each rule can be enabled/disabled and have its severity overridden

[rules.parameter-name-prefix]
enabled = true
# severity = "error"

[rules.port-name-style]
enabled = true
# severity = "error"
"#;

const CONFIG_FILE: &str = "naming-lint.toml";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Run: naming-lint check <TREE.json>...");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}

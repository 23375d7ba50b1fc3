//! List rules command implementation.

use naming_lint_rules::{builtin_registry, Preset};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<25} {:<20} Description", "Name", "Topic");
    println!("{}", "-".repeat(80));

    for descriptor in builtin_registry().descriptors() {
        println!(
            "{:<25} {:<20} {}",
            descriptor.name, descriptor.topic, descriptor.description
        );
    }

    println!("\nPresets:");
    for preset in Preset::ALL {
        println!(
            "  {:<12} - {} ({})",
            preset.name(),
            preset.rule_names().join(", "),
            preset.severity()
        );
    }

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  naming-lint check --rules port-name-style top.sv.json");
}

//! # naming-lint-rules
//!
//! Built-in SystemVerilog naming rules for naming-lint.
//!
//! ## Available Rules
//!
//! | Name | Topic | Description |
//! |------|-------|-------------|
//! | `parameter-name-prefix` | `binary-parameters` | `parameter` names start with `P_`, `localparam` names with `LP_` |
//! | `port-name-style` | `port-names` | Port names are ALL_CAPS |
//!
//! ## Usage
//!
//! ```ignore
//! use naming_lint_core::Analyzer;
//! use naming_lint_rules::builtin_registry;
//!
//! let analyzer = Analyzer::builder()
//!     .registry(builtin_registry())
//!     .only(["port_name_style"])
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::sync::OnceLock;

use naming_lint_core::{RuleBox, RuleRegistry};
use tracing::debug;

pub mod extract;
pub mod parameter_name_prefix;
pub mod port_name_style;
mod presets;
pub mod shapes;

#[cfg(test)]
#[path = "../tests/common/mod.rs"]
mod fixtures;

pub use parameter_name_prefix::ParameterNamePrefix;
pub use port_name_style::PortNameStyle;
pub use presets::{minimal_rules, recommended_rules, strict_rules, Preset};

/// Re-export core types for convenience.
pub use naming_lint_core::{Severity, SyntaxTreeRule, Violation};

/// The registry of every built-in rule, populated on first use.
pub fn builtin_registry() -> &'static RuleRegistry {
    static REGISTRY: OnceLock<RuleRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = RuleRegistry::new();
        let builtins: [(_, fn() -> RuleBox); 2] = [
            (&parameter_name_prefix::DESCRIPTOR, || {
                Box::new(ParameterNamePrefix::new())
            }),
            (&port_name_style::DESCRIPTOR, || Box::new(PortNameStyle::new())),
        ];
        for (descriptor, factory) in builtins {
            if let Err(e) = registry.register(descriptor, factory) {
                debug!("Skipping built-in rule: {}", e);
            }
        }
        registry
    })
}

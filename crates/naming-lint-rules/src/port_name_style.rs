//! Rule requiring ALL_CAPS port names.
//!
//! A port name may contain only upper-case ASCII letters, digits and
//! underscores. Direction, net type, data type and bit width do not affect
//! the check.

use naming_lint_core::utils::is_all_caps_underscore_digits;
use naming_lint_core::{
    RuleDescriptor, RuleError, RuleStatus, Severity, SyntaxNode, SyntaxTreeRule,
    TraversalContext, Violation, ViolationSet,
};

use crate::extract::port_identifier;
use crate::shapes::port_matcher;

/// Rule name for port-name-style.
pub const NAME: &str = "port-name-style";

/// Message reported for every offending port.
pub const MESSAGE: &str = "Port names must be styled with ALL_CAPS";

/// Static metadata for [`PortNameStyle`].
pub static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    name: NAME,
    topic: "port-names",
    description: "Checks that port names follow ALL_CAPS naming convention.",
};

/// Flags port names that are not ALL_CAPS.
#[derive(Debug, Clone)]
pub struct PortNameStyle {
    /// Severity recorded on violations.
    pub severity: Severity,
    violations: ViolationSet,
}

impl Default for PortNameStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl PortNameStyle {
    /// Creates a new rule with an empty violation set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
            violations: ViolationSet::new(),
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl SyntaxTreeRule for PortNameStyle {
    fn descriptor(&self) -> &'static RuleDescriptor {
        &DESCRIPTOR
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn handle_symbol(
        &mut self,
        node: &SyntaxNode,
        ctx: &TraversalContext<'_>,
    ) -> Result<(), RuleError> {
        let Some(bindings) = port_matcher().matches(node) else {
            return Ok(());
        };
        let id = port_identifier(node, &bindings)?;
        if !is_all_caps_underscore_digits(&id.token.text) {
            self.violations.insert(Violation::new(
                NAME,
                self.severity,
                id.token,
                MESSAGE,
                ctx,
            ));
        }
        Ok(())
    }

    fn report(&self) -> RuleStatus {
        RuleStatus::new(&DESCRIPTOR, self.violations.clone())
    }
}

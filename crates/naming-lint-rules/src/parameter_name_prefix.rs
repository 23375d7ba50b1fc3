//! Rule requiring `P_`/`LP_` prefixes on parameter names.
//!
//! # Rationale
//!
//! A prefix tells a reader at the point of use whether a name is a
//! parameter that can be overridden from outside (`P_`) or a constant that
//! is local to its scope (`LP_`). The prefix is matched without regard to
//! case; the rest of the name is not checked.
//!
//! Type parameters (`parameter type T = ...`) are exempt.
//!
//! # Examples
//!
//! ```text
//! parameter int P_WIDTH = 8;        // ok
//! localparam int LP_DEPTH = 4;      // ok
//! parameter int WIDTH = 8;          // flagged
//! localparam int P_DEPTH = 4;       // flagged: localparam needs LP_
//! ```

use naming_lint_core::utils::has_case_insensitive_prefix;
use naming_lint_core::{
    RuleDescriptor, RuleError, RuleStatus, Severity, SyntaxNode, SyntaxTreeRule,
    TraversalContext, Violation, ViolationSet,
};
use tracing::trace;

use crate::extract::{parameter_identifiers, DeclarationKind};
use crate::shapes::{is_type_parameter, param_decl_matcher};

/// Rule name for parameter-name-prefix.
pub const NAME: &str = "parameter-name-prefix";

/// Static metadata for [`ParameterNamePrefix`].
pub static DESCRIPTOR: RuleDescriptor = RuleDescriptor {
    name: NAME,
    topic: "binary-parameters",
    description: "Checks that parameter names start with P_ and localparam names start with LP_.",
};

/// Builds the message reported for a badly prefixed name.
#[must_use]
pub fn message(name: &str) -> String {
    format!(
        "Use P_ prefix for parameter definitions and LP_ for localparam definitions.  (got: {name})"
    )
}

/// Flags parameters not prefixed with `P_` and localparams not prefixed with `LP_`.
#[derive(Debug, Clone)]
pub struct ParameterNamePrefix {
    /// Severity recorded on violations.
    pub severity: Severity,
    violations: ViolationSet,
}

impl Default for ParameterNamePrefix {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterNamePrefix {
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

impl SyntaxTreeRule for ParameterNamePrefix {
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
        let Some(bindings) = param_decl_matcher().matches(node) else {
            return Ok(());
        };
        if is_type_parameter(node) {
            return Ok(());
        }

        let (kind, identifiers) = parameter_identifiers(node, &bindings)?;
        let prefix = match kind {
            DeclarationKind::LocalParameter => "lp_",
            _ => "p_",
        };

        for id in identifiers {
            if has_case_insensitive_prefix(&id.token.text, prefix) {
                continue;
            }
            trace!("{} lacks prefix {}", id.token.text, prefix);
            self.violations.insert(Violation::new(
                NAME,
                self.severity,
                id.token,
                message(&id.token.text),
                ctx,
            ));
        }
        Ok(())
    }

    fn report(&self) -> RuleStatus {
        RuleStatus::new(&DESCRIPTOR, self.violations.clone())
    }
}

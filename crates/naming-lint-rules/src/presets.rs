//! Rule presets for common configurations.

use naming_lint_core::{Config, RuleBox, Severity};

use crate::{parameter_name_prefix, port_name_style, ParameterNamePrefix, PortNameStyle};

/// Preset configurations for naming-lint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Every rule at warning severity.
    Recommended,
    /// Every rule at error severity.
    Strict,
    /// Parameter prefixes only, for gradual adoption.
    Minimal,
}

impl Preset {
    /// All presets, in display order.
    pub const ALL: [Preset; 3] = [Self::Recommended, Self::Strict, Self::Minimal];

    /// Resolves a preset by name (`recommended`, `strict`, `minimal`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "recommended" => Some(Self::Recommended),
            "strict" => Some(Self::Strict),
            "minimal" => Some(Self::Minimal),
            _ => None,
        }
    }

    /// Lower-case preset name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Recommended => "recommended",
            Self::Strict => "strict",
            Self::Minimal => "minimal",
        }
    }

    /// Names of the rules this preset enables.
    #[must_use]
    pub fn rule_names(self) -> &'static [&'static str] {
        match self {
            Self::Recommended | Self::Strict => {
                &[parameter_name_prefix::NAME, port_name_style::NAME]
            }
            Self::Minimal => &[parameter_name_prefix::NAME],
        }
    }

    /// Severity the preset assigns to its rules.
    #[must_use]
    pub fn severity(self) -> Severity {
        match self {
            Self::Strict => Severity::Error,
            Self::Recommended | Self::Minimal => Severity::Warning,
        }
    }

    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Minimal => minimal_rules(),
        }
    }

    /// Fills in every rule setting `config` leaves open.
    ///
    /// Rules outside the preset are disabled and rules inside it get the
    /// preset severity, unless the configuration says otherwise.
    pub fn apply(self, config: &mut Config) {
        for name in [parameter_name_prefix::NAME, port_name_style::NAME] {
            let enabled = self.rule_names().contains(&name);
            let rule = config.rule_mut(name);
            rule.enabled.get_or_insert(enabled);
            if enabled {
                rule.severity.get_or_insert(self.severity());
            }
        }
    }
}

/// Returns the recommended set of rules.
///
/// Includes:
/// - `parameter-name-prefix` - `P_`/`LP_` prefixes on parameters
/// - `port-name-style` - ALL_CAPS port names
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ParameterNamePrefix::new()),
        Box::new(PortNameStyle::new()),
    ]
}

/// Returns the strict set of rules: the recommended rules at error severity.
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ParameterNamePrefix::new().severity(Severity::Error)),
        Box::new(PortNameStyle::new().severity(Severity::Error)),
    ]
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only includes:
/// - `parameter-name-prefix`
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![Box::new(ParameterNamePrefix::new())]
}

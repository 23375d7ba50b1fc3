//! Rule registry mapping rule names to factories.
//!
//! A registry is populated once by an initialization routine and only read
//! afterwards. Lookups accept `snake_case` and mixed-case spellings of a
//! rule name (`parameter_name_prefix` resolves `parameter-name-prefix`).

use std::collections::BTreeMap;

use crate::rule::{RuleBox, RuleFactory};
use crate::types::RuleDescriptor;

/// Normalizes a rule name for lookup: ASCII lowercase, `_` replaced by `-`.
#[must_use]
pub fn normalize_rule_name(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('_', "-")
}

/// A registered rule: its descriptor plus a factory for fresh instances.
#[derive(Debug, Clone, Copy)]
pub struct RegistryEntry {
    /// Static rule metadata.
    pub descriptor: &'static RuleDescriptor,
    /// Creates a new instance with an empty violation set.
    pub factory: RuleFactory,
}

impl RegistryEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(descriptor: &'static RuleDescriptor, factory: RuleFactory) -> Self {
        Self {
            descriptor,
            factory,
        }
    }

    /// Instantiates the rule.
    #[must_use]
    pub fn create(&self) -> RuleBox {
        (self.factory)()
    }
}

/// Registry errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A rule with the same normalized name is already registered.
    #[error("Rule '{name}' is already registered")]
    Duplicate {
        /// The conflicting name.
        name: String,
    },
}

/// Name-indexed collection of rule factories.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl RuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule under its descriptor name.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is already taken.
    pub fn register(
        &mut self,
        descriptor: &'static RuleDescriptor,
        factory: RuleFactory,
    ) -> Result<(), RegistryError> {
        let key = normalize_rule_name(descriptor.name);
        if self.entries.contains_key(&key) {
            return Err(RegistryError::Duplicate { name: key });
        }
        self.entries
            .insert(key, RegistryEntry::new(descriptor, factory));
        Ok(())
    }

    /// Looks up a rule by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<RegistryEntry> {
        self.entries.get(&normalize_rule_name(name)).copied()
    }

    /// Instantiates a rule by name.
    #[must_use]
    pub fn create(&self, name: &str) -> Option<RuleBox> {
        self.get(name).map(|entry| entry.create())
    }

    /// Returns true if `name` resolves to a registered rule.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All entries, ordered by name.
    pub fn entries(&self) -> impl Iterator<Item = RegistryEntry> + '_ {
        self.entries.values().copied()
    }

    /// All descriptors, ordered by name.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static RuleDescriptor> + '_ {
        self.entries.values().map(|e| e.descriptor)
    }

    /// All registered names, ordered.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.descriptors().map(|d| d.name).collect()
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TraversalContext;
    use crate::rule::{RuleError, SyntaxTreeRule};
    use crate::syntax::SyntaxNode;
    use crate::types::{RuleStatus, ViolationSet};

    static ALPHA: RuleDescriptor = RuleDescriptor {
        name: "alpha-rule",
        topic: "testing",
        description: "First test rule",
    };

    struct Alpha;

    impl SyntaxTreeRule for Alpha {
        fn descriptor(&self) -> &'static RuleDescriptor {
            &ALPHA
        }

        fn handle_symbol(
            &mut self,
            _node: &SyntaxNode,
            _ctx: &TraversalContext<'_>,
        ) -> Result<(), RuleError> {
            Ok(())
        }

        fn report(&self) -> RuleStatus {
            RuleStatus::new(&ALPHA, ViolationSet::new())
        }
    }

    fn alpha() -> RuleBox {
        Box::new(Alpha)
    }

    #[test]
    fn normalizes_names() {
        assert_eq!(
            normalize_rule_name("Parameter_Name_Prefix"),
            "parameter-name-prefix"
        );
        assert_eq!(normalize_rule_name(" port-name-style "), "port-name-style");
    }

    #[test]
    fn register_and_create() {
        let mut registry = RuleRegistry::new();
        registry.register(&ALPHA, alpha).expect("first registration");
        assert_eq!(registry.len(), 1);
        assert!(registry.contains("ALPHA_RULE"));
        let rule = registry.create("alpha_rule").expect("resolves");
        assert_eq!(rule.name(), "alpha-rule");
        assert!(registry.create("beta-rule").is_none());
        assert_eq!(registry.names(), vec!["alpha-rule"]);
    }

    #[test]
    fn duplicate_registration_fails() {
        let mut registry = RuleRegistry::new();
        registry.register(&ALPHA, alpha).expect("first registration");
        assert_eq!(
            registry.register(&ALPHA, alpha),
            Err(RegistryError::Duplicate {
                name: "alpha-rule".into()
            })
        );
    }
}

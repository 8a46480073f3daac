//! Scenario catalog

use crate::{auxiliary, binding, constructor, construction, unbound};
use fnref_core::ScenarioResult;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which demonstration a scenario belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioGroup {
    /// Explicit implementation and closures building a summator
    Construction,
    /// Free functions and bound methods as summators
    Binding,
    /// Unbound method paths
    Unbound,
    /// Constructor functions as factories
    Constructor,
    /// Comparator, consumer, runnable and other shapes
    Auxiliary,
}

impl ScenarioGroup {
    /// All groups in catalog order
    pub const ALL: [ScenarioGroup; 5] = [
        ScenarioGroup::Construction,
        ScenarioGroup::Binding,
        ScenarioGroup::Unbound,
        ScenarioGroup::Constructor,
        ScenarioGroup::Auxiliary,
    ];

    /// Stable lowercase name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScenarioGroup::Construction => "construction",
            ScenarioGroup::Binding => "binding",
            ScenarioGroup::Unbound => "unbound",
            ScenarioGroup::Constructor => "constructor",
            ScenarioGroup::Auxiliary => "auxiliary",
        }
    }
}

impl fmt::Display for ScenarioGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A runnable scenario
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    /// Owning group
    pub group: ScenarioGroup,
    /// Name unique within the group
    pub name: &'static str,
    /// Scenario body
    pub run: fn() -> ScenarioResult,
}

impl Scenario {
    /// Create scenario
    #[inline]
    #[must_use]
    pub const fn new(group: ScenarioGroup, name: &'static str, run: fn() -> ScenarioResult) -> Self {
        Self { group, name, run }
    }

    /// `group::name`
    #[must_use]
    pub fn qualified_name(&self) -> String {
        format!("{}::{}", self.group, self.name)
    }
}

/// Every scenario, grouped in [`ScenarioGroup::ALL`] order
#[must_use]
pub fn catalog() -> Vec<Scenario> {
    use ScenarioGroup::{Auxiliary, Binding, Construction, Constructor, Unbound};

    vec![
        Scenario::new(Construction, "numeric_forms", construction::numeric_forms),
        Scenario::new(Construction, "text_forms", construction::text_forms),
        Scenario::new(Binding, "static_function", binding::static_function),
        Scenario::new(Binding, "instance_methods", binding::instance_methods),
        Scenario::new(Binding, "live_delimiter", binding::live_delimiter),
        Scenario::new(Unbound, "length_forms", unbound::length_forms_agree),
        Scenario::new(Constructor, "three_argument", constructor::three_argument),
        Scenario::new(Constructor, "two_argument", constructor::two_argument),
        Scenario::new(Auxiliary, "comparator", auxiliary::comparator),
        Scenario::new(Auxiliary, "shape_mismatch", auxiliary::shape_mismatch),
        Scenario::new(Auxiliary, "consumer_and_runnable", auxiliary::consumer_and_runnable),
        Scenario::new(Auxiliary, "default_operation", auxiliary::default_operation),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_are_unique() {
        let names: HashSet<_> = catalog().iter().map(Scenario::qualified_name).collect();
        assert_eq!(names.len(), catalog().len());
    }

    #[test]
    fn test_catalog_follows_group_order() {
        let groups: Vec<_> = catalog().iter().map(|s| s.group).collect();
        let mut sorted = groups.clone();
        sorted.sort();
        assert_eq!(groups, sorted);
    }

    #[test]
    fn test_every_group_populated() {
        let catalog = catalog();
        for group in ScenarioGroup::ALL {
            assert!(catalog.iter().any(|s| s.group == group), "{group}");
        }
    }

    #[test]
    fn test_qualified_name() {
        let scenario = catalog()[0];
        assert_eq!(scenario.qualified_name(), "construction::numeric_forms");
    }
}

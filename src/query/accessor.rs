//! Target accessor: how a query evaluator inspects graph nodes.
//!
//! The accessor is the evaluator's only window into the build graph. It
//! answers identity questions (kind, label, package), reads typed attributes,
//! follows label-valued attributes to other targets, and flattens a target's
//! declared visibility into a set of [`QueryVisibility`] entries.
//!
//! It holds nothing but a borrowed environment, so one accessor can serve
//! concurrent lookups over distinct targets as long as the environment's
//! reads are themselves safe.

use crate::attrs::{AttrType, AttrValue, ConfiguredValue, TriState};
use crate::error::{QueryError, QueryResult};
use crate::label::Label;
use crate::query::env::QueryEnvironment;
use crate::query::visibility::QueryVisibility;
use crate::target::{PackageGroup, Rule, Target, TargetNode, Visibility};
use std::collections::HashSet;
use tracing::debug;

/// Accessor over a query environment.
pub struct TargetAccessor<'a, E: QueryEnvironment> {
    env: &'a E,
}

impl<'a, E: QueryEnvironment> TargetAccessor<'a, E> {
    pub fn new(env: &'a E) -> Self {
        Self { env }
    }

    // === Identity ===

    /// Kind tag of the target (rule kind, "package group", "source file").
    pub fn target_kind(&self, target: &Target) -> String {
        target.kind().to_string()
    }

    /// Fully qualified label string.
    pub fn label(&self, target: &Target) -> String {
        target.label.to_string()
    }

    /// Name of the containing package.
    pub fn package(&self, target: &Target) -> String {
        target.package().to_string()
    }

    pub fn is_rule(&self, target: &Target) -> bool {
        target.is_rule()
    }

    pub fn is_test_rule(&self, target: &Target) -> bool {
        target
            .rule()
            .is_some_and(|rule| self.env.is_test_rule_kind(&rule.kind))
    }

    pub fn is_test_suite(&self, target: &Target) -> bool {
        target
            .rule()
            .is_some_and(|rule| self.env.is_test_suite_kind(&rule.kind))
    }

    // === Attributes ===

    /// Read a non-configurable string attribute.
    ///
    /// Panics if `target` is not a rule, or if the attribute is absent,
    /// configurable, or not string-typed. Those are caller contract
    /// violations, not query failures.
    pub fn string_attr(&self, target: &Target, name: &str) -> String {
        match self.nonconfigurable_value(target, name) {
            AttrValue::String(s) => s.clone(),
            other => panic!(
                "attribute '{name}' on '{}' is not a string: {other:?}",
                target.label
            ),
        }
    }

    /// Read a non-configurable string-list attribute. Same contract as
    /// [`TargetAccessor::string_attr`].
    pub fn string_list_attr(&self, target: &Target, name: &str) -> Vec<String> {
        match self.nonconfigurable_value(target, name) {
            AttrValue::StringList(items) => items.clone(),
            other => panic!(
                "attribute '{name}' on '{}' is not a string list: {other:?}",
                target.label
            ),
        }
    }

    /// Resolve every target reachable through a label-valued attribute.
    ///
    /// An undeclared attribute yields an empty list; many rule kinds simply
    /// lack it. Labels are gathered across all select branches (condition
    /// keys excluded) and resolved one by one. A label that fails to resolve
    /// is reported to the environment's diagnostic sink, prefixed with
    /// `error_prefix` and attributed to `caller`, and then skipped; the call
    /// itself still succeeds with the remaining targets.
    pub fn label_list_attr(
        &self,
        caller: &str,
        target: &Target,
        name: &str,
        error_prefix: &str,
    ) -> Vec<&'a Target> {
        let rule = self.expect_rule(target);
        let Some(entry) = rule.attr(name) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        for attr_label in entry.reachable_labels() {
            match self.env.get_target(&attr_label) {
                Ok(resolved) => result.push(resolved),
                Err(err) => {
                    debug!("Skipping unresolved label {attr_label} in attribute '{name}'");
                    self.env
                        .report_build_file_error(caller, format!("{error_prefix}{err}"));
                }
            }
        }

        result
    }

    /// Enumerate every value an attribute can take, rendered as strings.
    ///
    /// An undeclared attribute yields an empty list. A present-but-null value
    /// yields a `None` entry.
    pub fn attr_as_strings(&self, target: &Target, name: &str) -> Vec<Option<String>> {
        let rule = self.expect_rule(target);
        let Some(entry) = rule.attr(name) else {
            return Vec::new();
        };

        let attr_type = entry.attribute.attr_type;
        entry
            .value
            .visit_values()
            .into_iter()
            .map(|value| render_compat(attr_type, value))
            .collect()
    }

    // === Visibility ===

    /// Flatten the target's declared visibility into the set of grants that
    /// apply to it.
    ///
    /// The result always contains the same-package entry. Package groups are
    /// expanded recursively; a group label that does not resolve is fatal to
    /// the whole call, because a partially resolved visibility would silently
    /// under- or over-restrict access. Each group is expanded at most once
    /// per call, so cyclic includes terminate.
    pub fn visibility(&self, target: &Target) -> QueryResult<HashSet<QueryVisibility>> {
        let mut result = HashSet::new();
        let _ = result.insert(QueryVisibility::SamePackage(target.package().to_string()));

        match &target.visibility {
            Visibility::Public => {
                let _ = result.insert(QueryVisibility::Everything);
            }
            Visibility::Private => {}
            Visibility::Groups { groups, direct } => {
                let mut expanded = HashSet::new();
                for group_label in groups {
                    self.expand_group(&target.label, group_label, &mut expanded, &mut result)?;
                }
                for spec in direct {
                    let _ = result.insert(QueryVisibility::Spec(spec.clone()));
                }
            }
        }

        Ok(result)
    }

    fn expand_group(
        &self,
        origin: &Label,
        group_label: &Label,
        expanded: &mut HashSet<Label>,
        result: &mut HashSet<QueryVisibility>,
    ) -> QueryResult<()> {
        if !expanded.insert(group_label.clone()) {
            debug!("Package group {group_label} already expanded, skipping");
            return Ok(());
        }

        let group = self.resolve_group(origin, group_label)?;
        for include in &group.includes {
            self.expand_group(origin, include, expanded, result)?;
        }
        for spec in &group.packages {
            let _ = result.insert(QueryVisibility::Spec(spec.clone()));
        }

        Ok(())
    }

    fn resolve_group(&self, origin: &Label, group_label: &Label) -> QueryResult<&'a PackageGroup> {
        let target = self.env.get_target(group_label).map_err(|source| {
            QueryError::UnresolvedPackageGroup {
                target: origin.clone(),
                source,
            }
        })?;

        match &target.node {
            TargetNode::PackageGroup(group) => Ok(group),
            _ => panic!(
                "visibility of '{origin}' references '{group_label}', which is not a package group"
            ),
        }
    }

    // === Helpers ===

    fn expect_rule<'t>(&self, target: &'t Target) -> &'t Rule {
        target
            .rule()
            .unwrap_or_else(|| panic!("attribute read on non-rule target '{}'", target.label))
    }

    fn nonconfigurable_value<'t>(&self, target: &'t Target, name: &str) -> &'t AttrValue {
        let rule = self.expect_rule(target);
        let entry = rule
            .attr(name)
            .unwrap_or_else(|| panic!("rule '{}' has no attribute '{name}'", target.label));
        assert!(
            !entry.attribute.configurable,
            "attribute '{name}' on '{}' is configurable",
            target.label
        );
        match &entry.value {
            ConfiguredValue::Plain(value) => value,
            ConfiguredValue::Select(_) => panic!(
                "non-configurable attribute '{name}' on '{}' carries a select",
                target.label
            ),
        }
    }
}

/// Render one attribute value for `attr()`-style matching.
///
/// Boolean and tri-state values print as integer strings because historical
/// query output did, and downstream scripts match on "1"/"0"/"-1". The quirk
/// is keyed on the declared type and deliberately not generalized further.
fn render_compat(attr_type: AttrType, value: &AttrValue) -> Option<String> {
    match (attr_type, value) {
        (AttrType::Boolean, AttrValue::Boolean(true)) => Some("1".to_string()),
        (AttrType::Boolean, AttrValue::Boolean(false)) => Some("0".to_string()),
        (AttrType::TriState, AttrValue::TriState(TriState::Yes)) => Some("1".to_string()),
        (AttrType::TriState, AttrValue::TriState(TriState::No)) => Some("0".to_string()),
        (AttrType::TriState, AttrValue::TriState(TriState::Auto)) => Some("-1".to_string()),
        (_, value) => value.as_display_string(),
    }
}

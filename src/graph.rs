//! In-memory target graph store
//!
//! Flat, label-indexed storage for build graph nodes. Labels are globally
//! unique, so targets are keyed by their label directly.

use crate::label::Label;
use crate::target::{PackageGroup, PackageSpec, Rule, Target, TargetNode, Visibility};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// The complete target graph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetGraph {
    targets: HashMap<Label, Target>,
}

impl TargetGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a target, replacing any previous target with the same label.
    pub fn add_target(&mut self, target: Target) {
        debug!("Adding target {} ({})", target.label, target.kind());
        let _ = self.targets.insert(target.label.clone(), target);
    }

    /// Add a rule target with no attributes yet.
    pub fn add_rule(&mut self, label: Label, kind: impl Into<String>, visibility: Visibility) {
        self.add_target(Target::new(
            label,
            visibility,
            TargetNode::Rule(Rule::new(kind)),
        ));
    }

    /// Add a source file target.
    pub fn add_file(&mut self, label: Label, visibility: Visibility) {
        self.add_target(Target::new(label, visibility, TargetNode::File));
    }

    /// Add a package group. Package groups are visible everywhere.
    pub fn add_package_group(
        &mut self,
        label: Label,
        includes: Vec<Label>,
        packages: Vec<PackageSpec>,
    ) {
        self.add_target(Target::new(
            label,
            Visibility::Public,
            TargetNode::PackageGroup(PackageGroup { includes, packages }),
        ));
    }

    /// Get a target by label.
    pub fn get(&self, label: &Label) -> Option<&Target> {
        self.targets.get(label)
    }

    /// Mutable access to a rule's payload, for attribute population.
    pub fn rule_mut(&mut self, label: &Label) -> Option<&mut Rule> {
        match self.targets.get_mut(label) {
            Some(Target {
                node: TargetNode::Rule(rule),
                ..
            }) => Some(rule),
            _ => None,
        }
    }

    /// Iterate over all targets.
    pub fn targets(&self) -> impl Iterator<Item = &Target> {
        self.targets.values()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

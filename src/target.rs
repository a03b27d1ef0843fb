//! Build graph node model
//!
//! A target is any node in the build dependency graph. The node kind is a
//! tagged union: rules carry typed attributes, package groups carry
//! visibility specifications, files carry nothing extra. Query code switches
//! on the kind instead of downcasting.

use crate::attrs::{AttrEntry, Attribute, ConfiguredValue};
use crate::label::Label;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A pattern matching a set of packages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PackageSpec {
    /// Exactly one package (`//foo/bar`).
    Package(String),
    /// A package and everything beneath it (`//foo/bar/...`).
    Subtree(String),
}

impl PackageSpec {
    /// Whether `package` falls under this specification.
    pub fn matches(&self, package: &str) -> bool {
        match self {
            PackageSpec::Package(p) => p == package,
            PackageSpec::Subtree(root) => {
                root.is_empty() || package == root || package.starts_with(&format!("{root}/"))
            }
        }
    }
}

impl fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageSpec::Package(p) => write!(f, "//{p}"),
            PackageSpec::Subtree(root) => write!(f, "//{root}/..."),
        }
    }
}

/// Raw visibility as declared on a target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Visibility {
    /// Visible to every package.
    Public,
    /// Visible only within the declaring package.
    Private,
    /// Visible to the named package groups plus directly listed packages.
    Groups {
        groups: Vec<Label>,
        direct: Vec<PackageSpec>,
    },
}

/// A rule target: a kind tag plus named, typed attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub kind: String,
    attrs: HashMap<String, AttrEntry>,
}

impl Rule {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            attrs: HashMap::new(),
        }
    }

    /// Look up an attribute instance by name.
    pub fn attr(&self, name: &str) -> Option<&AttrEntry> {
        self.attrs.get(name)
    }

    pub fn set_attr(&mut self, attribute: Attribute, value: ConfiguredValue) {
        let name = attribute.name.clone();
        let _ = self
            .attrs
            .insert(name, AttrEntry::new(attribute, value));
    }

    pub fn attr_count(&self) -> usize {
        self.attrs.len()
    }
}

/// A package group: a composable, named set of package specifications.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageGroup {
    /// Labels of other package groups folded into this one.
    pub includes: Vec<Label>,
    /// Directly listed package specifications.
    pub packages: Vec<PackageSpec>,
}

/// Node kind discriminant with per-kind payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TargetNode {
    Rule(Rule),
    PackageGroup(PackageGroup),
    File,
}

/// A node in the build dependency graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub label: Label,
    pub visibility: Visibility,
    pub node: TargetNode,
}

impl Target {
    pub fn new(label: Label, visibility: Visibility, node: TargetNode) -> Self {
        Self {
            label,
            visibility,
            node,
        }
    }

    /// Kind tag: the rule kind for rules, a fixed tag for other nodes.
    pub fn kind(&self) -> &str {
        match &self.node {
            TargetNode::Rule(rule) => &rule.kind,
            TargetNode::PackageGroup(_) => "package group",
            TargetNode::File => "source file",
        }
    }

    /// Name of the containing package.
    pub fn package(&self) -> &str {
        self.label.package()
    }

    pub fn is_rule(&self) -> bool {
        matches!(self.node, TargetNode::Rule(_))
    }

    pub fn rule(&self) -> Option<&Rule> {
        match &self.node {
            TargetNode::Rule(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn package_group(&self) -> Option<&PackageGroup> {
        match &self.node {
            TargetNode::PackageGroup(group) => Some(group),
            _ => None,
        }
    }
}

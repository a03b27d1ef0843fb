//! Rule attribute model
//!
//! Attributes carry typed values that may vary by build configuration: a value
//! is either plain or a `select` over condition branches. Query code never
//! evaluates conditions; it inspects every branch a value could take.

use crate::label::Label;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Declared type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttrType {
    String,
    StringList,
    Boolean,
    TriState,
    LabelList,
}

/// Three-valued setting: explicitly on, explicitly off, or decided by the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TriState {
    Auto,
    No,
    Yes,
}

impl fmt::Display for TriState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriState::Auto => write!(f, "auto"),
            TriState::No => write!(f, "no"),
            TriState::Yes => write!(f, "yes"),
        }
    }
}

/// A concrete attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    String(String),
    StringList(Vec<String>),
    Boolean(bool),
    TriState(TriState),
    LabelList(Vec<Label>),
    /// A value that is present but unset.
    Null,
}

impl AttrValue {
    /// Natural string rendering; `Null` has none.
    pub fn as_display_string(&self) -> Option<String> {
        match self {
            AttrValue::String(s) => Some(s.clone()),
            AttrValue::StringList(items) => Some(format!("[{}]", items.join(", "))),
            AttrValue::Boolean(b) => Some(b.to_string()),
            AttrValue::TriState(t) => Some(t.to_string()),
            AttrValue::LabelList(labels) => {
                let rendered: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
                Some(format!("[{}]", rendered.join(", ")))
            }
            AttrValue::Null => None,
        }
    }
}

/// An attribute declaration: name, type, and whether the value may be
/// configured with `select`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub attr_type: AttrType,
    pub configurable: bool,
}

impl Attribute {
    pub fn new(name: impl Into<String>, attr_type: AttrType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            configurable: true,
        }
    }

    /// A declaration whose value is fixed independent of configuration.
    pub fn nonconfigurable(name: impl Into<String>, attr_type: AttrType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            configurable: false,
        }
    }
}

/// One branch of a `select`. A `None` condition is the default branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectBranch {
    pub condition: Option<Label>,
    pub value: AttrValue,
}

impl SelectBranch {
    pub fn new(condition: Option<Label>, value: AttrValue) -> Self {
        Self { condition, value }
    }
}

/// An attribute value assignment: plain, or configured over select branches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConfiguredValue {
    Plain(AttrValue),
    Select(Vec<SelectBranch>),
}

impl ConfiguredValue {
    pub fn is_configured(&self) -> bool {
        matches!(self, ConfiguredValue::Select(_))
    }

    /// Every value this assignment can take, across all branches.
    pub fn visit_values(&self) -> Vec<&AttrValue> {
        match self {
            ConfiguredValue::Plain(value) => vec![value],
            ConfiguredValue::Select(branches) => branches.iter().map(|b| &b.value).collect(),
        }
    }
}

/// An attribute instance on a rule: its declaration plus its assigned value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttrEntry {
    pub attribute: Attribute,
    pub value: ConfiguredValue,
}

impl AttrEntry {
    pub fn new(attribute: Attribute, value: ConfiguredValue) -> Self {
        Self { attribute, value }
    }

    /// Labels reachable through this attribute's values across every branch,
    /// duplicates removed, in first-occurrence order. Select condition keys
    /// are configuration selectors, not dependencies, and are never included.
    pub fn reachable_labels(&self) -> Vec<Label> {
        let mut seen = HashSet::new();
        let mut result = Vec::new();

        for value in self.value.visit_values() {
            if let AttrValue::LabelList(labels) = value {
                for label in labels {
                    if seen.insert(label.clone()) {
                        result.push(label.clone());
                    }
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn label(s: &str) -> Label {
        Label::from_str(s).unwrap()
    }

    #[test]
    fn test_visit_values_plain() {
        let value = ConfiguredValue::Plain(AttrValue::Boolean(true));
        assert_eq!(value.visit_values(), vec![&AttrValue::Boolean(true)]);
        assert!(!value.is_configured());
    }

    #[test]
    fn test_visit_values_select() {
        let value = ConfiguredValue::Select(vec![
            SelectBranch::new(
                Some(label("//conditions:linux")),
                AttrValue::String("a".to_string()),
            ),
            SelectBranch::new(None, AttrValue::String("b".to_string())),
        ]);

        assert!(value.is_configured());
        let values = value.visit_values();
        assert_eq!(values.len(), 2);
        assert_eq!(values[0], &AttrValue::String("a".to_string()));
        assert_eq!(values[1], &AttrValue::String("b".to_string()));
    }

    #[test]
    fn test_reachable_labels_dedup_in_order() {
        let entry = AttrEntry::new(
            Attribute::new("deps", AttrType::LabelList),
            ConfiguredValue::Select(vec![
                SelectBranch::new(
                    Some(label("//conditions:linux")),
                    AttrValue::LabelList(vec![label("//lib:a"), label("//lib:b")]),
                ),
                SelectBranch::new(
                    None,
                    AttrValue::LabelList(vec![label("//lib:b"), label("//lib:c")]),
                ),
            ]),
        );

        assert_eq!(
            entry.reachable_labels(),
            vec![label("//lib:a"), label("//lib:b"), label("//lib:c")]
        );
    }

    #[test]
    fn test_reachable_labels_exclude_condition_keys() {
        // The condition label is a selector, never a dependency.
        let entry = AttrEntry::new(
            Attribute::new("deps", AttrType::LabelList),
            ConfiguredValue::Select(vec![SelectBranch::new(
                Some(label("//conditions:windows")),
                AttrValue::LabelList(vec![label("//lib:win")]),
            )]),
        );

        assert_eq!(entry.reachable_labels(), vec![label("//lib:win")]);
    }

    #[test]
    fn test_reachable_labels_non_label_attr() {
        let entry = AttrEntry::new(
            Attribute::new("copts", AttrType::StringList),
            ConfiguredValue::Plain(AttrValue::StringList(vec!["-O2".to_string()])),
        );
        assert!(entry.reachable_labels().is_empty());
    }

    #[test]
    fn test_display_string() {
        assert_eq!(
            AttrValue::StringList(vec!["a".to_string(), "b".to_string()]).as_display_string(),
            Some("[a, b]".to_string())
        );
        assert_eq!(
            AttrValue::TriState(TriState::Auto).as_display_string(),
            Some("auto".to_string())
        );
        assert_eq!(AttrValue::Null.as_display_string(), None);
    }
}

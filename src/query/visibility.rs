//! Resolved visibility entries.

use crate::target::PackageSpec;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry of a target's effective visibility, after constant policies and
/// package groups have been flattened away.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryVisibility {
    /// Visible to every package.
    Everything,
    /// Visible to targets in the named package (the target's own).
    SamePackage(String),
    /// Visible to packages matching the specification.
    Spec(PackageSpec),
}

impl QueryVisibility {
    /// Whether a target in `package` is allowed to depend on the target this
    /// entry was resolved for.
    pub fn is_visible_to(&self, package: &str) -> bool {
        match self {
            QueryVisibility::Everything => true,
            QueryVisibility::SamePackage(own) => own == package,
            QueryVisibility::Spec(spec) => spec.matches(package),
        }
    }
}

impl fmt::Display for QueryVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryVisibility::Everything => write!(f, "//..."),
            QueryVisibility::SamePackage(own) => write!(f, "//{own}:__pkg__"),
            QueryVisibility::Spec(spec) => write!(f, "{spec}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything() {
        assert!(QueryVisibility::Everything.is_visible_to("any/package"));
        assert!(QueryVisibility::Everything.is_visible_to(""));
    }

    #[test]
    fn test_same_package() {
        let vis = QueryVisibility::SamePackage("base".to_string());
        assert!(vis.is_visible_to("base"));
        assert!(!vis.is_visible_to("base/strings"));
    }

    #[test]
    fn test_spec() {
        let vis = QueryVisibility::Spec(PackageSpec::Subtree("tools".to_string()));
        assert!(vis.is_visible_to("tools/build"));
        assert!(!vis.is_visible_to("base"));
    }

    #[test]
    fn test_display() {
        assert_eq!(QueryVisibility::Everything.to_string(), "//...");
        assert_eq!(
            QueryVisibility::SamePackage("base".to_string()).to_string(),
            "//base:__pkg__"
        );
        assert_eq!(
            QueryVisibility::Spec(PackageSpec::Package("base".to_string())).to_string(),
            "//base"
        );
    }
}

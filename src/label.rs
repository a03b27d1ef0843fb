//! Target labels
//!
//! A label uniquely names a target inside a package, e.g. `//base/strings:split`.
//! The package part is the directory-like namespace, the name part is the
//! target inside it. `//base/strings` is shorthand for `//base/strings:strings`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error for malformed label strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid label '{0}': expected //package:name")]
pub struct LabelError(String);

/// A fully qualified target identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Label {
    package: String,
    name: String,
}

impl Label {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// The containing package, without the leading `//`.
    pub fn package(&self) -> &str {
        &self.package
    }

    /// The target name inside the package.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "//{}:{}", self.package, self.name)
    }
}

impl std::str::FromStr for Label {
    type Err = LabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some(rest) = s.strip_prefix("//") else {
            return Err(LabelError(s.to_string()));
        };

        match rest.split_once(':') {
            Some((package, name)) => {
                if name.is_empty() || name.contains(':') {
                    return Err(LabelError(s.to_string()));
                }
                Ok(Label::new(package, name))
            }
            None => {
                // `//foo/bar` names the target `bar` in package `foo/bar`.
                if rest.is_empty() {
                    return Err(LabelError(s.to_string()));
                }
                let name = rest.rsplit('/').next().unwrap_or(rest);
                Ok(Label::new(rest, name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_full_label() {
        let label = Label::from_str("//base/strings:split").unwrap();
        assert_eq!(label.package(), "base/strings");
        assert_eq!(label.name(), "split");
    }

    #[test]
    fn test_parse_shorthand_label() {
        let label = Label::from_str("//base/strings").unwrap();
        assert_eq!(label.package(), "base/strings");
        assert_eq!(label.name(), "strings");
    }

    #[test]
    fn test_parse_root_package() {
        let label = Label::from_str("//:toolchain").unwrap();
        assert_eq!(label.package(), "");
        assert_eq!(label.name(), "toolchain");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Label::from_str("base:split").is_err());
        assert!(Label::from_str("//").is_err());
        assert!(Label::from_str("//base:").is_err());
        assert!(Label::from_str("//base:a:b").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let label = Label::new("tools/build", "defs");
        assert_eq!(label.to_string(), "//tools/build:defs");
        assert_eq!(Label::from_str(&label.to_string()).unwrap(), label);
    }
}
